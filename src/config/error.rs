//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations. All of
/// these are fatal at startup; none occur once the poll loop is running.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the JSON configuration.
    ///
    /// Also covers missing required fields, which serde reports as
    /// parse errors naming the absent field.
    #[error("Failed to parse JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required field is present but empty.
    #[error("Config field '{field}' must not be empty")]
    EmptyField {
        /// Name of the empty field
        field: &'static str,
    },

    /// Invalid duration value (zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid URL provided for an endpoint base.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The authorization token cannot be sent as an HTTP header value.
    #[error("Invalid authorization token: {reason}")]
    InvalidToken {
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for configuration errors.
///
/// These match the JSON keys of the configuration file, so error messages
/// name exactly what the operator has to fix.
pub mod field {
    /// The bearer token field.
    pub const AUTHORIZATION: &str = "authorization";
    /// The provider-assigned zone identifier field.
    pub const ZONE_ID: &str = "zoneID";
    /// The fully-qualified record name field.
    pub const ZONE_NAME: &str = "zoneName";
    /// The DNS record type field.
    pub const RECORD_TYPE: &str = "type";
    /// The poll period field.
    pub const PERIOD: &str = "period";
    /// The optional provider base URL field.
    pub const API_URL: &str = "apiURL";
    /// The optional IP echo base URL field.
    pub const ECHO_URL: &str = "echoURL";
}

impl ConfigError {
    /// Creates an `EmptyField` error for a required field.
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}
