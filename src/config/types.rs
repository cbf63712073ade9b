//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be supplied through the environment.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_GEO_ENDPOINT, DEFAULT_PORT, DEFAULT_PUBLIC_IP_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from CLI flags with environment fallbacks, or constructed
/// programmatically (tests build it with struct update syntax over `Default`).
///
/// # Examples
///
/// ```bash
/// # Listen on the default port
/// geo_echo
///
/// # Port from the environment
/// PORT=9090 geo_echo
///
/// # Point at a self-hosted geolocation endpoint
/// geo_echo --geo-endpoint http://geo.internal/json --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geo_echo",
    about = "Reports the caller's public IP, location and client identity as JSON."
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the listener to
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Geolocation endpoint; the IP is appended as a path segment
    #[arg(long, env = "GEO_ENDPOINT", default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// Public-IP echo endpoint used when the caller is on loopback
    #[arg(long, env = "PUBLIC_IP_ENDPOINT", default_value = DEFAULT_PUBLIC_IP_ENDPOINT)]
    pub public_ip_endpoint: String,

    /// Timeout for each outbound request in seconds
    #[arg(long, env = "TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// User-Agent sent upstream when the caller supplied none
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            public_ip_endpoint: DEFAULT_PUBLIC_IP_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
