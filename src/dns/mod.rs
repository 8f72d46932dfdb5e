//! Cloudflare DNS record reading and updating.
//!
//! This module provides:
//! - The opaque record identifier and per-cycle snapshot ([`RecordId`],
//!   [`RecordSnapshot`])
//! - The provider client ([`CloudflareClient`]) with its read and update
//!   operations
//! - The update outcome carrying the provider's verbatim response
//!   ([`UpdateOutcome`])

mod cloudflare;
mod record;


pub use cloudflare::{CloudflareClient, DnsError, UpdateOutcome};
pub use record::{RecordId, RecordSnapshot};
