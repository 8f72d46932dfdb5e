//! Cloudflare API client for reading and updating the managed record.

use std::net::Ipv4Addr;

use serde::Serialize;
use thiserror::Error;

use crate::config::ValidatedConfig;
use crate::extract::{Ipv4Extractor, RecordIdExtractor};
use crate::transport::{HttpClient, HttpError, HttpRequest};

use super::record::{RecordId, RecordSnapshot};

/// Error type for DNS provider operations.
///
/// Transient from the poll loop's point of view: a failed read or update
/// skips the current cycle and the next cycle starts over.
#[derive(Debug, Error)]
pub enum DnsError {
    /// The HTTP request to the provider failed.
    #[error("DNS API request failed: {0}")]
    Http(#[from] HttpError),

    /// The provider answered the record listing with a non-success status.
    ///
    /// Distinguishes "lookup failed" from "record listing contained no
    /// extractable record", which yields an empty snapshot instead.
    #[error("DNS API returned {status}: {body}")]
    Status {
        /// The response status code
        status: http::StatusCode,
        /// The verbatim response body
        body: String,
    },
}

/// The provider's answer to an update request.
///
/// The body is not parsed; it is carried verbatim for logging, exactly
/// as the provider sent it. The status lets callers notice a rejection
/// without this client taking a position on the provider's body schema.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The response status code
    pub status: http::StatusCode,
    /// The verbatim response body
    pub body: String,
}

/// JSON body for the record update request.
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    #[serde(rename = "type")]
    record_type: &'a str,
    name: &'a str,
    proxied: bool,
    content: String,
}

/// Client for the Cloudflare v4 DNS records API.
///
/// Carries everything a cycle needs to read and update the managed record:
/// the API base, the bearer header, the zone/record identity, and its own
/// compiled extractors (no process-wide singletons).
#[derive(Debug, Clone)]
pub struct CloudflareClient<H> {
    client: H,
    api_base: url::Url,
    bearer: http::HeaderValue,
    zone_id: String,
    zone_name: String,
    record_type: String,
    proxied: bool,
    id_extractor: RecordIdExtractor,
    ip_extractor: Ipv4Extractor,
}

impl<H> CloudflareClient<H> {
    /// Creates a provider client from the validated configuration.
    #[must_use]
    pub fn new(client: H, config: &ValidatedConfig) -> Self {
        Self {
            client,
            api_base: config.api_url.clone(),
            bearer: config.bearer.clone(),
            zone_id: config.zone_id.clone(),
            zone_name: config.zone_name.clone(),
            record_type: config.record_type.clone(),
            proxied: config.proxied,
            id_extractor: RecordIdExtractor::new(),
            ip_extractor: Ipv4Extractor::new(),
        }
    }

    /// Returns the managed record's fully-qualified name.
    #[must_use]
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    fn records_url(&self) -> Result<url::Url, HttpError> {
        self.api_base
            .join(&format!("client/v4/zones/{}/dns_records", self.zone_id))
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))
    }

    fn record_url(&self, id: &RecordId) -> Result<url::Url, HttpError> {
        self.api_base
            .join(&format!(
                "client/v4/zones/{}/dns_records/{}",
                self.zone_id,
                id.as_str()
            ))
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(http::header::AUTHORIZATION, self.bearer.clone())
    }
}

impl<H: HttpClient> CloudflareClient<H> {
    /// Reads the managed record's identifier and current content.
    ///
    /// Lists the zone's records filtered by the configured name and type,
    /// then extracts the first record-id-shaped substring and the first
    /// valid IPv4 address from the body. Either part of the snapshot may
    /// be absent when the body contains nothing extractable.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError`] when the request fails or the provider answers
    /// with a non-success status.
    pub async fn read_record(&self) -> Result<RecordSnapshot, DnsError> {
        let mut url = self.records_url()?;
        url.query_pairs_mut()
            .append_pair("name", &self.zone_name)
            .append_pair("type", &self.record_type);

        let request = self.authorized(HttpRequest::get(url));
        let response = self.client.request(request).await?;

        if !response.is_success() {
            return Err(DnsError::Status {
                status: response.status,
                body: response.body_text().unwrap_or_default().to_string(),
            });
        }

        let body = response.body_text().unwrap_or_default();

        Ok(RecordSnapshot {
            id: self.id_extractor.extract(body).map(RecordId::new),
            content: self.ip_extractor.extract(body),
        })
    }

    /// Updates the record to point at the given IPv4 address.
    ///
    /// Sends a PUT with a JSON body carrying the configured type, name,
    /// and proxied flag plus the new address as `content`. The provider's
    /// response body is returned verbatim for logging; its schema is not
    /// parsed, so a well-formed rejection surfaces only through the status.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Http`] when the request itself fails.
    pub async fn update_record(
        &self,
        id: &RecordId,
        new_ip: Ipv4Addr,
    ) -> Result<UpdateOutcome, DnsError> {
        let url = self.record_url(id)?;

        let body = serde_json::to_vec(&UpdateRequest {
            record_type: &self.record_type,
            name: &self.zone_name,
            proxied: self.proxied,
            content: new_ip.to_string(),
        })
        .expect("update body of strings and bool serializes");

        let request = self.authorized(HttpRequest::put(url).with_body(body));
        let response = self.client.request(request).await?;

        Ok(UpdateOutcome {
            status: response.status,
            body: response.body_text().unwrap_or_default().to_string(),
        })
    }
}
