//! Configuration constants.
//!
//! This module defines the fixed values used throughout the service: upstream
//! endpoints, timeouts, size limits, sentinels and the EU membership set.

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address for the listener
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default geolocation endpoint. The IP is appended as a path segment.
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json";

/// Default public-IP echo endpoint. Returns the caller's address as raw text.
pub const DEFAULT_PUBLIC_IP_ENDPOINT: &str = "http://ifconfig.co/ip";

/// Field selection requested from the geolocation service
pub const GEO_FIELDS: &str =
    "status,message,query,country,countryCode,regionName,region,city,lat,lon,timezone,as";

/// Upstream `status` value that marks a successful lookup
pub const GEO_STATUS_SUCCESS: &str = "success";

// Network operation timeouts
/// Per-request timeout for outbound calls in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Maximum number of bytes read from the public-IP echo response.
/// The longest textual IPv6 address is 45 characters.
pub const MAX_PUBLIC_IP_BODY_SIZE: usize = 64;

/// Address used when the public-IP fallback cannot be reached
pub const UNKNOWN_ADDRESS: &str = "UNKNOWN";

/// Product/version placeholder when the identity string has no separator
pub const UNKNOWN_IDENTITY: &str = "Unknown";

/// Loopback addresses that trigger the public-IP fallback
pub const LOOPBACK_ADDRESSES: [&str; 2] = ["127.0.0.1", "::1"];

/// HTTP header name constants
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";

/// ISO 3166-1 alpha-2 codes of the 27 European Union member states.
pub const EU_COUNTRY_CODES: [&str; 27] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
    "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

/// Default User-Agent for outbound requests when the caller sent none
pub const DEFAULT_USER_AGENT: &str = concat!("geo_echo/", env!("CARGO_PKG_VERSION"));
