//! CLI argument definitions using clap
//!
//! Commands:
//! - courseboard serve [--port <port>] [--host <host>]

use clap::{Parser, Subcommand};

/// courseboard - A minimal in-memory course catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "courseboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to bind (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind
        #[arg(long)]
        host: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_command_parses() {
        let cli = Cli::try_parse_from(["courseboard", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve {
                port: None,
                host: None
            }
        ));
    }

    #[test]
    fn test_serve_with_overrides() {
        let cli =
            Cli::try_parse_from(["courseboard", "serve", "--port", "8080", "--host", "127.0.0.1"])
                .unwrap();
        match cli.command {
            Command::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
            }
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["courseboard", "frobnicate"]).is_err());
    }
}
