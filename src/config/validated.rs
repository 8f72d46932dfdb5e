//! Validated configuration built from the CLI and the JSON file.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::file::FileConfig;

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// required fields are present, non-empty, and usable: the period is
/// positive, the endpoint bases are parsed URLs, and the token has been
/// turned into a sendable `Authorization` header value.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and a parsed
/// file config, or [`ValidatedConfig::load`] to read the file named by the
/// CLI first.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// `Authorization` header value carrying the bearer token
    pub bearer: HeaderValue,

    /// Provider-assigned zone identifier
    pub zone_id: String,

    /// Fully-qualified record name to manage
    pub zone_name: String,

    /// Whether the record is proxied through Cloudflare's edge
    pub proxied: bool,

    /// DNS record type, e.g. "A"
    pub record_type: String,

    /// Sleep interval between poll cycles
    pub period: Duration,

    /// Base URL of the Cloudflare API
    pub api_url: Url,

    /// Base URL of the IP echo service
    pub echo_url: Url,

    /// Dry-run mode (log the update without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    // The bearer token is deliberately omitted from the rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ record: {} ({}), zone: {}, proxied: {}, period: {}s, api: {}, echo: {}, \
             dry_run: {} }}",
            self.zone_name,
            self.record_type,
            self.zone_id,
            self.proxied,
            self.period.as_secs(),
            self.api_url,
            self.echo_url,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and a parsed file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is empty
    /// - The period is zero
    /// - An endpoint base URL is invalid
    /// - The token cannot be sent as an HTTP header value
    pub fn from_raw(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let token = require_non_empty(field::AUTHORIZATION, file.authorization)?;
        let bearer = bearer_value(&token)?;

        let zone_id = require_non_empty(field::ZONE_ID, file.zone_id)?;
        let zone_name = require_non_empty(field::ZONE_NAME, file.zone_name)?;
        let record_type = require_non_empty(field::RECORD_TYPE, file.record_type)?;

        let period = resolve_period(file.period)?;

        let api_url = resolve_base_url(field::API_URL, file.api_url, defaults::API_URL)?;
        let echo_url = resolve_base_url(field::ECHO_URL, file.echo_url, defaults::ECHO_URL)?;

        Ok(Self {
            bearer,
            zone_id,
            zone_name,
            proxied: file.proxied,
            record_type,
            period,
            api_url,
            echo_url,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and validates configuration from the file named by the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The parsed configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = FileConfig::load(&cli.config)?;
        Self::from_raw(cli, file)
    }
}

/// Writes the configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn require_non_empty(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::empty(field));
    }
    Ok(value)
}

fn bearer_value(token: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| ConfigError::InvalidToken {
        reason: e.to_string(),
    })
}

fn resolve_period(seconds: u64) -> Result<Duration, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field: field::PERIOD,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

fn resolve_base_url(
    field: &'static str,
    configured: Option<String>,
    default: &str,
) -> Result<Url, ConfigError> {
    let url_str = configured.as_deref().unwrap_or(default);

    let mut url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
        field,
        url: url_str.to_string(),
        reason: e.to_string(),
    })?;

    // Joining request paths onto data: / mailto: style URLs cannot work.
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            field,
            url: url_str.to_string(),
            reason: "cannot be used as a base URL".to_string(),
        });
    }

    // Url::join resolves relative to the last slash, so a base with a
    // path prefix must end in one or its final segment is dropped.
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}
