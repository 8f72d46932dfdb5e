//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default configuration file path.
pub const CONFIG_PATH: &str = "config.json";

/// Default base URL of the Cloudflare API.
pub const API_URL: &str = "https://api.cloudflare.com";

/// Default base URL of the IP echo service.
pub const ECHO_URL: &str = "https://httpbin.org";
