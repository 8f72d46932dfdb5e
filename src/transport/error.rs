//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Covers the request failing outright; a response carrying a
/// non-success status is not an `HttpError` (the discovery and DNS
/// clients decide what a rejection means). The poll loop treats every
/// variant as transient: the current cycle is skipped and the next one
/// starts from scratch.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// DNS resolution failures, refused connections, and mid-response
    /// drops all land here.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not answer within the client's timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be used.
    ///
    /// Reached only when a configured base URL joins into something the
    /// client cannot send, so it points at the configuration rather than
    /// at a transient network fault.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
