//! CLI module for courseboard
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and block until terminated

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
