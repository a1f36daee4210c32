// tests/property/main.rs

use bgnotify::exec::build_command_line;
use proptest::prelude::*;

fn plain_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=-]{1,12}"
}

fn any_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._-]{0,12}"
}

proptest! {
    #[test]
    fn tokens_without_spaces_join_verbatim(tokens in proptest::collection::vec(plain_token(), 1..8)) {
        prop_assert_eq!(build_command_line(&tokens), tokens.join(" "));
    }

    #[test]
    fn only_spaced_tokens_are_quoted_in_order(tokens in proptest::collection::vec(any_token(), 1..8)) {
        let expected: Vec<String> = tokens
            .iter()
            .map(|t| if t.contains(' ') { format!("\"{t}\"") } else { t.clone() })
            .collect();
        prop_assert_eq!(build_command_line(&tokens), expected.join(" "));
    }
}
