//! Public IP discovery via an external echo service.
//!
//! One GET per poll cycle to the echo service's `/ip` path; the address is
//! pulled out of the body by pattern so both plain-text and JSON responses
//! work.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::extract::Ipv4Extractor;
use crate::transport::{HttpClient, HttpError, HttpRequest};

/// Error type for public IP discovery.
///
/// All variants are transient from the poll loop's point of view: the
/// current cycle is skipped and the next cycle retries from scratch.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The HTTP request to the echo service failed.
    #[error("IP echo request failed: {0}")]
    Http(#[from] HttpError),

    /// The echo service answered with a non-success status.
    #[error("IP echo service returned {status}")]
    Status {
        /// The response status code
        status: http::StatusCode,
    },

    /// The response body contained no valid IPv4 address.
    #[error("No IPv4 address found in echo response")]
    NoAddress,
}

/// Client for a "what is my IP" echo service.
///
/// Holds its own compiled extractor and the echo base URL; the request
/// path is always `/ip` (httpbin convention).
#[derive(Debug, Clone)]
pub struct IpEchoClient<H> {
    client: H,
    base: url::Url,
    extractor: Ipv4Extractor,
}

impl<H> IpEchoClient<H> {
    /// Creates a discovery client for the given echo base URL.
    #[must_use]
    pub fn new(client: H, base: url::Url) -> Self {
        Self {
            client,
            base,
            extractor: Ipv4Extractor::new(),
        }
    }

    /// Returns the configured echo base URL.
    #[must_use]
    pub const fn base(&self) -> &url::Url {
        &self.base
    }
}

impl<H: HttpClient> IpEchoClient<H> {
    /// Discovers the caller's current public IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoverError`] when the request fails, the service
    /// answers with a non-success status, or the body contains no valid
    /// IPv4 address.
    pub async fn discover(&self) -> Result<Ipv4Addr, DiscoverError> {
        let url = self
            .base
            .join("ip")
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        let request = HttpRequest::get(url).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        let response = self.client.request(request).await?;

        if !response.is_success() {
            return Err(DiscoverError::Status {
                status: response.status,
            });
        }

        let body = response.body_text().ok_or(DiscoverError::NoAddress)?;
        self.extractor.extract(body).ok_or(DiscoverError::NoAddress)
    }
}

#[cfg(test)]
#[path = "ip_tests.rs"]
mod tests;
