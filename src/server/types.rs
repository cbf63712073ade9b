//! Server data structures.

use std::sync::Arc;

use crate::enrichment::EnrichmentPipeline;

/// Shared state for the HTTP boundary; request counters live in the pipeline
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<EnrichmentPipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<EnrichmentPipeline>) -> Self {
        Self { pipeline }
    }
}
