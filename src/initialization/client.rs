//! HTTP client initialization.
//!
//! This module builds the single outbound client shared by the address
//! resolver and the geolocation lookup.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the outbound HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Default User-Agent header from config (overridden per request when the caller sent one)
/// - Overall request timeout from config
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
