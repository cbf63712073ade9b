//! Server HTTP handlers.

mod enrich;

pub use enrich::enrich_handler;
