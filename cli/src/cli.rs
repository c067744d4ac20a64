//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Provision the DHT11 temperature/humidity monitor on a Raspberry Pi
#[derive(Parser)]
#[command(
    name = "thermopi",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Assume "yes" for interactive confirmations
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Load settings overrides from a YAML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install and verify the pigpio GPIO daemon
    SetupDaemon,

    /// Install the monitor service and push it to its remote repository
    Deploy,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            config,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            yes,
            config_path: config,
        })?;
        match command {
            Command::Version => commands::version::run(json),
            Command::SetupDaemon => commands::setup_daemon::run(&app).await,
            Command::Deploy => commands::deploy::run(&app).await,
        }
    }
}
