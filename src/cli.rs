use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trip-budget", version, about = "Trip budget estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Force debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Listen port, overrides configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Estimate a trip budget and print it as JSON
    Estimate {
        /// Destination name, e.g. "Goa"
        destination: String,

        /// budget, mid-range or luxury
        #[arg(short, long, default_value = "mid-range")]
        style: String,

        /// flight, train, bus or car
        #[arg(short, long, default_value = "flight")]
        mode: String,

        /// Number of travelers
        #[arg(short, long, default_value = "1")]
        people: u32,

        /// Trip length in days
        #[arg(short, long, default_value = "1")]
        days: u32,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file and environment
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Serve if none provided
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve { port: None })
    }
}
