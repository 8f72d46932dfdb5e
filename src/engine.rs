//! The poll loop: discover, compare, update, sleep, repeat.

use std::future::Future;
use std::net::Ipv4Addr;
use std::time::Duration;

use thiserror::Error;

use crate::dns::{CloudflareClient, DnsError, RecordId};
use crate::ip::{DiscoverError, IpEchoClient};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::HttpClient;

/// Error type for a failed poll cycle.
///
/// Every variant is recoverable: the cycle is logged and skipped, and the
/// loop re-attempts from scratch after the configured period. Only startup
/// configuration errors terminate the process, and those never reach here.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Public IP discovery failed.
    #[error("IP discovery failed: {0}")]
    Discover(#[from] DiscoverError),

    /// Reading or updating the DNS record failed.
    #[error("DNS record operation failed: {0}")]
    Dns(#[from] DnsError),
}

/// What one poll cycle concluded.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The record differed from the discovered IP and was updated.
    Updated {
        /// The new address sent to the provider
        ip: Ipv4Addr,
        /// The provider's response status
        status: http::StatusCode,
        /// The provider's verbatim response body
        body: String,
    },

    /// The record already points at the discovered IP.
    Unchanged {
        /// The discovered address
        ip: Ipv4Addr,
    },

    /// The public IP or the record's current state could not be determined;
    /// nothing was changed.
    Indeterminate,

    /// Dry-run mode: an update was warranted but only logged.
    DryRun {
        /// The address that would have been sent
        ip: Ipv4Addr,
        /// The record that would have been updated
        record: RecordId,
    },
}

/// The poll loop orchestrator.
///
/// Owns the discovery and provider clients, the poll period, and the
/// sleeper used for the inter-cycle wait. One [`Engine::run_cycle`] call
/// performs the discover → read → compare → update-or-skip sequence;
/// [`Engine::run`] repeats it until the supplied shutdown future resolves.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation shared by both API clients
/// - `S`: The sleeper implementation for the inter-cycle wait (defaults to
///   [`TokioSleeper`])
#[derive(Debug)]
pub struct Engine<H, S = TokioSleeper> {
    discovery: IpEchoClient<H>,
    dns: CloudflareClient<H>,
    period: Duration,
    dry_run: bool,
    sleeper: S,
}

impl<H> Engine<H, TokioSleeper> {
    /// Creates an engine with the given clients and poll period.
    #[must_use]
    pub const fn new(
        discovery: IpEchoClient<H>,
        dns: CloudflareClient<H>,
        period: Duration,
    ) -> Self {
        Self {
            discovery,
            dns,
            period,
            dry_run: false,
            sleeper: TokioSleeper,
        }
    }
}

impl<H, S> Engine<H, S> {
    /// Sets a custom sleeper for the inter-cycle wait.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Engine<H, S2> {
        Engine {
            discovery: self.discovery,
            dns: self.dns,
            period: self.period,
            dry_run: self.dry_run,
            sleeper,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured poll period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns true if dry-run mode is enabled.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl<H: HttpClient, S: Sleeper> Engine<H, S> {
    /// Performs one poll cycle.
    ///
    /// Discovers the public IP, reads the record, compares, and updates the
    /// record when the two differ. A discovery or record-read that yields
    /// no usable value ends the cycle as [`CycleOutcome::Indeterminate`]
    /// without touching the record.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] when a request fails or the provider answers
    /// a read with a non-success status. Callers log and skip the cycle.
    pub async fn run_cycle(&self) -> Result<CycleOutcome, CycleError> {
        let ip = match self.discovery.discover().await {
            Ok(ip) => ip,
            // An empty extraction is "state unknown", not a fault.
            Err(DiscoverError::NoAddress) => return Ok(CycleOutcome::Indeterminate),
            Err(e) => return Err(e.into()),
        };

        let snapshot = self.dns.read_record().await?;
        let Some((record, content)) = snapshot.known() else {
            return Ok(CycleOutcome::Indeterminate);
        };

        if content == ip {
            return Ok(CycleOutcome::Unchanged { ip });
        }

        if self.dry_run {
            return Ok(CycleOutcome::DryRun {
                ip,
                record: record.clone(),
            });
        }

        let outcome = self.dns.update_record(record, ip).await?;
        Ok(CycleOutcome::Updated {
            ip,
            status: outcome.status,
            body: outcome.body,
        })
    }

    /// Runs poll cycles until the shutdown future resolves.
    ///
    /// Both the cycle itself and the inter-cycle sleep race against the
    /// shutdown future, so a signal interrupts the loop promptly instead
    /// of waiting out the period.
    pub async fn run<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping...");
                    return;
                }

                result = self.run_cycle() => {
                    self.log_cycle(&result);
                }
            }

            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping...");
                    return;
                }

                () = self.sleeper.sleep(self.period) => {}
            }
        }
    }

    fn log_cycle(&self, result: &Result<CycleOutcome, CycleError>) {
        match result {
            Ok(CycleOutcome::Unchanged { ip }) => {
                tracing::info!("Public IP {ip} matches record, no update needed");
            }
            Ok(CycleOutcome::Updated { ip, status, body }) => {
                if status.is_success() {
                    tracing::info!("Updated {} to {ip}: {body}", self.dns.zone_name());
                } else {
                    tracing::warn!(
                        "Update of {} to {ip} returned {status}: {body}",
                        self.dns.zone_name(),
                    );
                }
            }
            Ok(CycleOutcome::Indeterminate) => {
                tracing::warn!("Cannot determine public IP or record state, skipping cycle");
            }
            Ok(CycleOutcome::DryRun { ip, record }) => {
                tracing::info!("Dry-run: would update record {record} to {ip}");
            }
            Err(e) => {
                tracing::warn!("Poll cycle failed, will retry next cycle: {e}");
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
