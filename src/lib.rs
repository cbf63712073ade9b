//! geo_echo library: caller address enrichment over HTTP
//!
//! For each inbound request the service determines the caller's public IP,
//! enriches it with geolocation and network-ownership data from a remote
//! lookup service, parses the caller's `User-Agent` and answers with a single
//! JSON document.
//!
//! # Example
//!
//! ```no_run
//! use geo_echo::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod address;
pub mod config;
pub mod enrichment;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod server;
pub mod user_agent;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use enrichment::{EnrichedResponse, EnrichmentPipeline, RequestContext};
pub use error_handling::{EnrichmentError, GeoLookupError};

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::error_handling::InitializationError;
use crate::server::{serve, shutdown_signal, AppState};

/// Runs the HTTP service until Ctrl-C or SIGTERM.
///
/// Builds the enrichment pipeline from `config`, binds
/// `bind_address:port` and serves requests. Logs a request summary on exit.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built, the listener cannot be
/// bound, or the server stops with an I/O error.
pub async fn run_server(config: Config) -> Result<()> {
    let pipeline = Arc::new(
        EnrichmentPipeline::from_config(&config).context("Failed to initialize pipeline")?,
    );
    let stats = Arc::clone(pipeline.stats());

    let address = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| InitializationError::BindError {
            address: address.clone(),
            source,
        })?;

    log::info!(
        "Geo lookups via {}, public IP fallback via {}",
        config.geo_endpoint,
        config.public_ip_endpoint
    );

    serve(listener, AppState::new(pipeline), shutdown_signal())
        .await
        .context("Server error")?;

    stats.log_summary();
    Ok(())
}
