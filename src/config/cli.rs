//! CLI argument parsing using clap.
//!
//! Defines the command-line interface. All record and credential values
//! live in the configuration file; the CLI selects the file and toggles
//! runtime behavior.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// cfddns: Cloudflare Dynamic DNS Updater
///
/// Periodically discovers the machine's public IPv4 address and updates
/// a Cloudflare DNS record when it changes.
#[derive(Debug, Parser)]
#[command(name = "cfddns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON configuration file
    #[arg(long, short, default_value = defaults::CONFIG_PATH)]
    pub config: PathBuf,

    /// Test mode - log the update that would be sent without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for cfddns
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a configuration file template
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_PATH)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
