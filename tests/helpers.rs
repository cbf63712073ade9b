// Shared test helpers for building pipelines against mock upstream services.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::MockServer;

use geo_echo::server::{enrich_handler, AppState};
use geo_echo::{Config, EnrichmentPipeline};

/// Builds a config whose upstream endpoints point at the given mock servers.
#[allow(dead_code)] // Used by other test files
pub fn config_for(geo: &MockServer, public_ip: &MockServer) -> Config {
    Config {
        geo_endpoint: format!("{}/json", geo.uri()),
        public_ip_endpoint: format!("{}/ip", public_ip.uri()),
        timeout_seconds: 2,
        ..Default::default()
    }
}

/// Builds a pipeline against the given mock servers.
#[allow(dead_code)] // Used by other test files
pub fn pipeline_for(geo: &MockServer, public_ip: &MockServer) -> Arc<EnrichmentPipeline> {
    Arc::new(
        EnrichmentPipeline::from_config(&config_for(geo, public_ip))
            .expect("Failed to build pipeline"),
    )
}

/// A successful geolocation response for `ip`, shaped like the real service.
#[allow(dead_code)] // Used by other test files
pub fn geo_success_body(ip: &str) -> Value {
    json!({
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "CA",
        "regionName": "California",
        "city": "Mountain View",
        "lat": 37.4056,
        "lon": -122.0775,
        "timezone": "America/Los_Angeles",
        "as": "AS15169 Google LLC",
        "query": ip
    })
}

/// Invokes the root handler directly with an arbitrary peer address.
#[allow(dead_code)] // Used by other test files
pub async fn call_handler(
    pipeline: Arc<EnrichmentPipeline>,
    peer: &str,
    headers: HeaderMap,
) -> (StatusCode, HeaderMap, Bytes) {
    let peer: SocketAddr = peer.parse().expect("Invalid peer address");
    let response = enrich_handler(State(AppState::new(pipeline)), ConnectInfo(peer), headers).await;
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, headers, body)
}
