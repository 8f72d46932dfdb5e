//! JSON configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. Field names
//! match the file's JSON keys (`zoneID`, `zoneName`, ...). Unknown keys are
//! tolerated so operators can annotate their config files.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Raw configuration structure from the JSON file.
///
/// Required fields are enforced by serde at parse time; a file missing
/// any of them fails to load. Emptiness and value validation happen in
/// [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Bearer token for the Cloudflare API
    pub authorization: String,

    /// Provider-assigned zone identifier
    #[serde(rename = "zoneID")]
    pub zone_id: String,

    /// Fully-qualified record name to manage
    #[serde(rename = "zoneName")]
    pub zone_name: String,

    /// Whether the record is proxied through Cloudflare's edge
    pub proxied: bool,

    /// DNS record type, e.g. "A"
    #[serde(rename = "type")]
    pub record_type: String,

    /// Sleep interval between poll cycles, in seconds
    pub period: u64,

    /// Base URL of the Cloudflare API (default: production endpoint)
    #[serde(rename = "apiURL")]
    pub api_url: Option<String>,

    /// Base URL of the IP echo service (default: httpbin.org)
    #[serde(rename = "echoURL")]
    pub echo_url: Option<String>,
}

impl FileConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a required field is missing.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a configuration file template with placeholder values.
///
/// JSON has no comments, so the placeholders describe themselves; every
/// value must be replaced before the program will do anything useful.
#[must_use]
pub fn default_config_template() -> String {
    r#"{
  "authorization": "your-cloudflare-api-token",
  "zoneID": "0123456789abcdef0123456789abcdef",
  "zoneName": "home.example.com",
  "proxied": false,
  "type": "A",
  "period": 300
}
"#
    .to_string()
}
