//! Command-line interface
//!
//! Loads the registry from a flat JSON file, applies one operation through
//! the public registry contract, and writes the file back. A failed
//! operation or import leaves the file untouched.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
