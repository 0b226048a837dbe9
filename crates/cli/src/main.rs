//! NanoInteractive adapter CLI.
//!
//! This tool provides commands for:
//! - Validating adapter configuration files
//! - Showing the outbound request the adapter builds for a bid request
//! - Showing the typed bids the adapter extracts from a recorded response

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use nanointeractive_adapter::logging::init_logging;

mod config;
mod error;
mod translate;

use error::CliError;

#[derive(Parser)]
#[command(name = "nanocli")]
#[command(about = "NanoInteractive bid adapter CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Build the outbound partner request for a bid request
    Request {
        /// Path to the OpenRTB bid request JSON
        #[arg(long, short)]
        input: PathBuf,

        /// Path to the TOML configuration file (bundled config if omitted)
        #[arg(long, short, env = "NANO_ADAPTER_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Parse a recorded partner response into typed bids
    Response {
        /// Path to the OpenRTB bid request JSON the response answers
        #[arg(long, short)]
        request: PathBuf,

        /// HTTP status the partner answered with
        #[arg(long, short, default_value_t = 200)]
        status: u16,

        /// Path to the response body (empty body if omitted)
        #[arg(long, short)]
        body: Option<PathBuf>,

        /// Path to the TOML configuration file (bundled config if omitted)
        #[arg(long, short, env = "NANO_ADAPTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate config against settings validation
    Validate {
        /// Path to the TOML configuration file
        #[arg(long, short)]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: {e:?}");
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Validate { file } => config::validate(&file, cli.verbose),
        },
        Commands::Request { input, config } => {
            translate::request(&input, config.as_deref(), cli.verbose)
        }
        Commands::Response {
            request,
            status,
            body,
            config,
        } => translate::response(
            &request,
            status,
            body.as_deref(),
            config.as_deref(),
            cli.verbose,
        ),
    }
}
