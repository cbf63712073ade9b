//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Outbound HTTP client

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
