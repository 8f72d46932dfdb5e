//! Application execution logic.
//!
//! This module wires the validated configuration into the poll engine
//! and runs it until a shutdown signal arrives.

use tokio::signal;

use cfddns::config::ValidatedConfig;
use cfddns::dns::CloudflareClient;
use cfddns::engine::Engine;
use cfddns::ip::IpEchoClient;
use cfddns::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Builds the poll engine from the validated configuration.
///
/// One `reqwest` client is created and shared by the discovery and DNS
/// clients, so every cycle's requests draw from the same connection pool.
fn build_engine(config: &ValidatedConfig) -> Engine<ReqwestClient> {
    let http = ReqwestClient::new();
    let discovery = IpEchoClient::new(http.clone(), config.echo_url.clone());
    let dns = CloudflareClient::new(http, config);

    Engine::new(discovery, dns, config.period).with_dry_run(config.dry_run)
}

/// Executes the main application loop.
///
/// Runs poll cycles until a shutdown signal (Ctrl+C or SIGTERM) arrives.
/// Cycle failures are logged and skipped by the engine; nothing here
/// terminates the process early.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// async runtime with signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) {
    let engine = build_engine(&config);

    if engine.is_dry_run() {
        tracing::info!("Dry-run mode enabled - updates will be logged but not sent");
    }
    tracing::info!(
        "Polling every {}s for public IP changes",
        engine.period().as_secs()
    );

    engine.run(shutdown_signal()).await;
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
