//! Request enrichment pipeline.
//!
//! Resolves the caller's address, looks it up in the geolocation service and
//! attaches the parsed client identity. A request is either fully enriched or
//! fails as a whole; there are no partial documents.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::Serialize;

use crate::address::AddressResolver;
use crate::config::Config;
use crate::error_handling::{EnrichmentError, ErrorType, InitializationError, ProcessingStats};
use crate::geoip::{GeoLookupClient, GeoRecord};
use crate::initialization::init_client;
use crate::user_agent::{parse_identity, ClientIdentity};

/// What the pipeline needs to know about an inbound request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Raw `X-Forwarded-For` header value, if any
    pub forwarded_for: Option<&'a str>,
    /// Socket peer of the connection
    pub peer: SocketAddr,
    /// Raw `User-Agent` header value, if any
    pub user_agent: Option<&'a str>,
}

/// The document served to the caller: geo fields plus the client identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedResponse {
    #[serde(flatten)]
    pub geo: GeoRecord,
    pub user_agent: ClientIdentity,
}

/// Orchestrates address resolution, geo lookup and identity parsing.
pub struct EnrichmentPipeline {
    resolver: AddressResolver,
    geo: GeoLookupClient,
    stats: Arc<ProcessingStats>,
}

impl EnrichmentPipeline {
    pub fn new(resolver: AddressResolver, geo: GeoLookupClient, stats: Arc<ProcessingStats>) -> Self {
        Self {
            resolver,
            geo,
            stats,
        }
    }

    /// Builds the pipeline and its shared outbound client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built or
    /// the geolocation endpoint is not a valid URL.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let resolver = AddressResolver::new(Arc::clone(&client), config.public_ip_endpoint.clone());
        let geo = GeoLookupClient::new(client, &config.geo_endpoint)?;
        Ok(Self::new(resolver, geo, Arc::new(ProcessingStats::new())))
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Runs one enrichment pass for a request.
    ///
    /// # Errors
    ///
    /// Returns `EnrichmentError::GeoLookup` if the geolocation lookup fails for
    /// any reason. Address resolution and identity parsing cannot fail.
    pub async fn enrich(
        &self,
        request: RequestContext<'_>,
    ) -> Result<EnrichedResponse, EnrichmentError> {
        let resolved = self
            .resolver
            .resolve(request.forwarded_for, request.peer)
            .await;
        if resolved.degraded {
            self.stats.increment_error(ErrorType::PublicIpFallbackFailure);
        }

        let geo = match self.geo.lookup(&resolved.address, request.user_agent).await {
            Ok(geo) => geo,
            Err(e) => {
                let error = EnrichmentError::from(e);
                log::warn!(
                    "Enrichment failed for {} (peer {}): {}",
                    resolved.address,
                    request.peer,
                    error
                );
                self.stats.record_failed(error.error_type());
                return Err(error);
            }
        };

        let user_agent = parse_identity(request.user_agent.unwrap_or_default());
        self.stats.record_served();

        Ok(EnrichedResponse { geo, user_agent })
    }
}
