//! DNS record value types.

use std::fmt;
use std::net::Ipv4Addr;

/// Provider-assigned opaque record identifier.
///
/// Currently a 32-character lowercase-hex string by Cloudflare convention,
/// but nothing beyond "unique string per record" is assumed here; the hex
/// convention lives in the extractor that finds these in response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a provider-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the provider reported about the managed record in one cycle.
///
/// Read fresh every cycle, never cached. Either part may be absent when
/// the listing response contained nothing extractable; the poll loop
/// treats an incomplete snapshot as "cannot determine current state" and
/// skips the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSnapshot {
    /// The record's identifier, if one was found
    pub id: Option<RecordId>,
    /// The record's current IPv4 content, if one was found
    pub content: Option<Ipv4Addr>,
}

impl RecordSnapshot {
    /// Returns the identifier and content when both are known.
    #[must_use]
    pub fn known(&self) -> Option<(&RecordId, Ipv4Addr)> {
        match (&self.id, self.content) {
            (Some(id), Some(content)) => Some((id, content)),
            _ => None,
        }
    }
}
