// src/main.rs

use bgnotify::errors::BgnotifyError;
use bgnotify::{cli, logging, run};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("bgnotify error: {err:?}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(()) => {}
        Err(BgnotifyError::Usage) => {
            eprint!("{}", cli::usage_text(&cli::program_name()));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("bgnotify error: {err}");
            std::process::exit(1);
        }
    }
}
