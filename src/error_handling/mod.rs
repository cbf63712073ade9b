//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for startup and request enrichment
//! - Processing statistics tracking (served/failed requests, failure categories)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{EnrichmentError, ErrorType, GeoLookupError, InitializationError};
