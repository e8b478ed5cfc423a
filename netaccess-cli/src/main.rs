//! Netaccess CLI
//!
//! Command-line diagnostics for service endpoint selection.

mod commands;
mod config;
mod display;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use netaccess_core::CensorshipMode;
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "netaccess")]
#[command(version, about = "Inspect service endpoint selection and censorship circumvention")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: ~/.netaccess)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Network configuration file (JSON)
    #[arg(long, global = true, env = "NETACCESS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration for a phone number
    Resolve {
        /// Phone number in international format (default: stored number)
        number: Option<String>,

        /// Censorship mode (default: stored mode)
        #[arg(long)]
        mode: Option<CensorshipMode>,

        /// Print the full profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a country calling code is censored by default
    CensoredByDefault {
        /// Country calling code (e.g. 98)
        code: u16,
    },

    /// List every host the client may contact
    Hostnames,

    /// Manage stored network settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show stored settings
    Show,
    /// Set the censorship circumvention mode
    SetMode {
        /// enabled, disabled or default
        mode: CensorshipMode,
    },
    /// Set the local phone number
    SetNumber {
        /// Phone number in international format
        number: String,
    },
    /// Forget the local phone number
    ClearNumber,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(".netaccess"))
            .unwrap_or_else(|| PathBuf::from(".netaccess"))
    });

    let config = CliConfig {
        data_dir,
        config_path: cli.config,
    };

    match cli.command {
        Commands::Resolve { number, mode, json } => {
            commands::resolve::run(&config, number.as_deref(), mode, json)
        }
        Commands::CensoredByDefault { code } => {
            commands::resolve::censored_by_default(&config, code)
        }
        Commands::Hostnames => commands::resolve::hostnames(&config),
        Commands::Settings(cmd) => match cmd {
            SettingsCommands::Show => commands::settings::show(&config),
            SettingsCommands::SetMode { mode } => commands::settings::set_mode(&config, mode),
            SettingsCommands::SetNumber { number } => {
                commands::settings::set_number(&config, &number)
            }
            SettingsCommands::ClearNumber => commands::settings::clear_number(&config),
        },
    }
}
