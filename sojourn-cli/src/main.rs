//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = sojourn_cli::run() {
        eprintln!("sojourn: {err}");
        std::process::exit(1);
    }
}
