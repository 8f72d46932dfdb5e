//! Pattern extraction from HTTP response bodies.
//!
//! The IP echo service and the DNS provider both return bodies whose exact
//! schema is outside this program's control. Rather than binding to a
//! provider schema version, the relevant values are pulled out by pattern:
//! the first IPv4 dotted-quad for addresses, the first 32-character
//! lowercase-hex substring for record identifiers.

use std::net::Ipv4Addr;

use regex::Regex;

/// Extracts the first valid IPv4 address from arbitrary text.
///
/// Dotted-quad candidates are located by pattern and then parsed through
/// [`Ipv4Addr`], so candidates with out-of-range octets (e.g.
/// "999.999.999.999") are skipped in favor of the next candidate. This is
/// stricter than a bare digit pattern, which would accept such strings.
#[derive(Debug, Clone)]
pub struct Ipv4Extractor {
    pattern: Regex,
}

impl Ipv4Extractor {
    /// Creates an extractor with a compiled dotted-quad pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("IPv4 pattern is valid"),
        }
    }

    /// Returns the first pattern candidate that parses as a real IPv4
    /// address, or `None` if the text contains no valid address.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<Ipv4Addr> {
        self.pattern
            .find_iter(text)
            .find_map(|m| m.as_str().parse().ok())
    }
}

impl Default for Ipv4Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the first provider-style record identifier from arbitrary text.
///
/// Cloudflare record identifiers are currently 32-character lowercase-hex
/// strings; that convention lives here and nowhere else.
#[derive(Debug, Clone)]
pub struct RecordIdExtractor {
    pattern: Regex,
}

impl RecordIdExtractor {
    /// Creates an extractor with a compiled record-id pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"[a-f0-9]{32}").expect("record id pattern is valid"),
        }
    }

    /// Returns the first record-id-shaped substring, or `None`.
    #[must_use]
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

impl Default for RecordIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}
