//! Geolocation lookup against the remote service.
//!
//! This module issues the lookup request, decodes the response and hands a
//! successful one to the normalization helpers.

use std::sync::Arc;

use reqwest::header::{HeaderValue, USER_AGENT};
use url::Url;

use super::extract::normalize;
use super::types::{GeoRecord, IpApiResponse};
use crate::config::{GEO_FIELDS, GEO_STATUS_SUCCESS};
use crate::error_handling::{GeoLookupError, InitializationError};

/// Client for the remote geolocation service.
pub struct GeoLookupClient {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl GeoLookupClient {
    /// Creates a lookup client for `endpoint`; the IP is appended to its path.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if `endpoint` is not an
    /// absolute URL that can carry path segments.
    pub fn new(client: Arc<reqwest::Client>, endpoint: &str) -> Result<Self, InitializationError> {
        let parsed = Url::parse(endpoint).map_err(|e| InitializationError::EndpointError {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(InitializationError::EndpointError {
                endpoint: endpoint.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self {
            client,
            endpoint: parsed,
        })
    }

    /// Builds `<endpoint>/<ip>?fields=...`, escaping `ip` as a single path segment.
    pub(crate) fn lookup_url(&self, ip: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(ip);
        }
        url.set_query(Some(&format!("fields={}", GEO_FIELDS)));
        url
    }

    /// Looks up `ip` and returns the normalized record.
    ///
    /// The lookup itself only needs `ip`. As an extension, `user_agent` (the
    /// caller's own User-Agent) replaces the client default on the outbound
    /// request when it is a valid header value; otherwise the default is sent.
    /// No retries.
    ///
    /// # Errors
    ///
    /// - `TransportFailure` on connect/timeout/body errors
    /// - `DecodeFailure` when the body is not the expected JSON
    /// - `UpstreamRejected` when the service reports a non-success status
    pub async fn lookup(
        &self,
        ip: &str,
        user_agent: Option<&str>,
    ) -> Result<GeoRecord, GeoLookupError> {
        let mut request = self.client.get(self.lookup_url(ip));
        let forwarded_agent = user_agent
            .filter(|agent| !agent.is_empty())
            .and_then(|agent| HeaderValue::from_str(agent).ok());
        if let Some(agent) = forwarded_agent {
            request = request.header(USER_AGENT, agent);
        }

        let body = request.send().await?.text().await?;
        let response: IpApiResponse = serde_json::from_str(&body)?;

        if response.status != GEO_STATUS_SUCCESS {
            log::debug!(
                "Geolocation lookup for {} rejected upstream: {}",
                ip,
                response.message
            );
            return Err(GeoLookupError::UpstreamRejected {
                message: response.message,
            });
        }

        Ok(normalize(response))
    }
}
