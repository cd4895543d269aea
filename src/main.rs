//! silsilah CLI entry point
//!
//! Minimal entrypoint: parse and dispatch via the cli module, print the
//! error to stderr, exit non-zero on failure.

use silsilah::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
