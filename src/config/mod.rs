//! Configuration layer for cfddns.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - JSON configuration file parsing ([`FileConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! All record and credential values come from the JSON configuration file;
//! the CLI only selects the file path and toggles runtime behavior
//! (`--dry-run`, `--verbose`). Unknown keys in the file are tolerated.
//!
//! Missing required fields fail at parse time. Present-but-empty strings and
//! a zero period are rejected by explicit validation so the program never
//! starts polling with blank credentials.

mod cli;
pub mod defaults;
mod error;
mod file;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use file::{FileConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
