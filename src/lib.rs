//! cfddns: Cloudflare Dynamic DNS Updater
//!
//! A library for keeping a single Cloudflare DNS record pointed at the
//! machine's current public IPv4 address.

pub mod config;
pub mod dns;
pub mod engine;
pub mod extract;
pub mod ip;
pub mod time;
pub mod transport;
