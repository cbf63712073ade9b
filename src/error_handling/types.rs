//! Error type definitions.
//!
//! This module defines the error types for startup and for the per-request
//! enrichment pipeline, plus the categories counted by `ProcessingStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// An upstream endpoint is not a usable base URL.
    #[error("Invalid endpoint {endpoint}: {reason}")]
    EndpointError { endpoint: String, reason: String },

    /// Error binding the listener.
    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a single geolocation lookup.
///
/// All three are fatal to the request that triggered the lookup.
#[derive(Error, Debug)]
pub enum GeoLookupError {
    /// Connection, timeout or body read failure talking to the geolocation service.
    #[error("geolocation request failed: {0}")]
    TransportFailure(#[from] ReqwestError),

    /// The geolocation service answered with a body that is not the expected JSON.
    #[error("geolocation response could not be decoded: {0}")]
    DecodeFailure(#[from] serde_json::Error),

    /// The geolocation service reported a non-success status.
    #[error("geolocation lookup rejected: {message}")]
    UpstreamRejected { message: String },
}

impl GeoLookupError {
    /// Maps the failure onto its statistics category.
    pub fn error_type(&self) -> ErrorType {
        match self {
            GeoLookupError::TransportFailure(_) => ErrorType::GeoTransportFailure,
            GeoLookupError::DecodeFailure(_) => ErrorType::GeoDecodeFailure,
            GeoLookupError::UpstreamRejected { .. } => ErrorType::GeoUpstreamRejected,
        }
    }
}

/// Failure of the enrichment pipeline as a whole.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// Geolocation lookup for the resolved address failed.
    #[error(transparent)]
    GeoLookup(#[from] GeoLookupError),
}

impl EnrichmentError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            EnrichmentError::GeoLookup(e) => e.error_type(),
        }
    }
}

/// Categories of failures counted while serving requests.
///
/// `PublicIpFallbackFailure` is a degraded outcome, not a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    GeoTransportFailure,
    GeoDecodeFailure,
    GeoUpstreamRejected,
    PublicIpFallbackFailure,
}

impl ErrorType {
    /// Returns a human-readable label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::GeoTransportFailure => "Geo lookup transport failure",
            ErrorType::GeoDecodeFailure => "Geo lookup decode failure",
            ErrorType::GeoUpstreamRejected => "Geo lookup rejected upstream",
            ErrorType::PublicIpFallbackFailure => "Public IP fallback failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_rejected_message() {
        let err = GeoLookupError::UpstreamRejected {
            message: "invalid query".to_string(),
        };
        assert_eq!(err.to_string(), "geolocation lookup rejected: invalid query");
        assert_eq!(err.error_type(), ErrorType::GeoUpstreamRejected);
    }

    #[test]
    fn test_enrichment_error_is_transparent() {
        let err: EnrichmentError = GeoLookupError::UpstreamRejected {
            message: "reserved range".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "geolocation lookup rejected: reserved range");
        assert_eq!(err.error_type(), ErrorType::GeoUpstreamRejected);
    }

    #[test]
    fn test_decode_failure_category() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("malformed JSON should not parse");
        let err = GeoLookupError::from(json_err);
        assert_eq!(err.error_type(), ErrorType::GeoDecodeFailure);
        assert!(err.to_string().starts_with("geolocation response could not be decoded"));
    }
}
