//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for served requests and failure
//! categories, shared by every request task.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe processing statistics tracker.
///
/// The error map is filled once in `new()` and never mutated afterwards, so
/// concurrent tasks only touch the atomic counters.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    served: AtomicUsize,
    failed: AtomicUsize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProcessingStats {
            errors,
            served: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Records a request answered with an enriched document.
    pub fn record_served(&self) {
        self.served.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a request answered with an error.
    pub fn record_failed(&self, error: ErrorType) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.increment_error(error);
    }

    /// Get the count for an error type.
    ///
    /// Returns 0 if the error type is not in the map.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Logs a summary of the counters (used at shutdown).
    pub fn log_summary(&self) {
        log::info!(
            "Requests served: {}, failed: {}",
            self.served(),
            self.failed()
        );
        for error_type in ErrorType::iter() {
            let count = self.get_error_count(error_type);
            if count > 0 {
                log::info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
