//! Root enrichment handler.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::AppState;
use crate::config::HEADER_X_FORWARDED_FOR;
use crate::enrichment::RequestContext;

/// Enriches the calling request and answers with JSON, or a plain-text 500.
///
/// Accepts any method. Header bytes that are not valid UTF-8 are replaced
/// rather than dropped, so the reported identity keeps what the caller sent.
pub async fn enrich_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    let forwarded_for = header_text(&headers, HEADER_X_FORWARDED_FOR);
    let user_agent = header_text(&headers, header::USER_AGENT.as_str());

    let request = RequestContext {
        forwarded_for: forwarded_for.as_deref(),
        peer,
        user_agent: user_agent.as_deref(),
    };

    match state.pipeline.enrich(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch data: {}", e),
        )
            .into_response(),
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
