//! Command-line front end: argument parsing, console output, and the runner.

pub mod args;
pub mod console;
pub mod runner;

pub use args::{CliArgs, CliCommand, HELP, parse_args};
pub use runner::CliRunner;
