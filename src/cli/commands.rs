//! CLI command implementations
//!
//! The serve command owns process setup: tracing subscriber, runtime
//! construction, and the blocking server loop. Nothing here outlives a
//! command invocation.

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { port, host } => serve(port, host),
    }
}

/// Boot the HTTP server and block until it exits
///
/// Configuration comes from the environment (`PORT`, default 3000);
/// explicit flags override it.
pub fn serve(port: Option<u16>, host: Option<String>) -> CliResult<()> {
    init_tracing();

    let mut config = HttpServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("HTTP server error: {}", e)))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
