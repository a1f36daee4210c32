// src/exec/command_line.rs

/// Join arguments into a single shell command line.
///
/// Arguments containing a space are wrapped in double quotes; everything
/// else is inserted verbatim. No other metacharacters are escaped, so the
/// result is *not* safe against shell injection.
pub fn build_command_line<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, arg) in args.into_iter().enumerate() {
        let arg = arg.as_ref();
        if i > 0 {
            line.push(' ');
        }
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens_join_with_spaces() {
        assert_eq!(build_command_line(["make", "-j4"]), "make -j4");
        assert_eq!(build_command_line(["sleep"]), "sleep");
    }

    #[test]
    fn only_spaced_tokens_are_quoted() {
        assert_eq!(
            build_command_line(["cp", "my file.txt", "dest/"]),
            "cp \"my file.txt\" dest/"
        );
    }

    #[test]
    fn metacharacters_pass_through() {
        assert_eq!(
            build_command_line(["echo", "$HOME", "|", "wc"]),
            "echo $HOME | wc"
        );
    }

    #[test]
    fn empty_input_gives_empty_line() {
        assert_eq!(build_command_line(Vec::<String>::new()), "");
    }
}
