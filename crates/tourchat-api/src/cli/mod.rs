//! CLI command definitions for the `tourchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Conversational assistant for 3D-tour demos.
#[derive(Parser)]
#[command(name = "tourchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to ~/.tourchat/config.toml).
    #[arg(long, global = true, env = "TOURCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Run one assistant turn from the terminal.
    Ask(ask::AskArgs),

    /// Show configuration and provider status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from([
            "tourchat",
            "ask",
            "show me refrigerators",
            "--demo-type",
            "showroom",
            "--locale",
            "ar",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.message, "show me refrigerators");
                assert_eq!(args.demo_type, "showroom");
                assert_eq!(args.locale, "ar");
                assert!(args.items.is_none());
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["tourchat", "serve"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 3000);
                assert_eq!(host, "127.0.0.1");
            }
            _ => panic!("expected serve"),
        }
    }
}
