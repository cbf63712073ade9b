//! GeoIP data structures.
//!
//! This module defines the upstream response shape and the normalized record
//! returned to callers.

use serde::{Deserialize, Serialize};

/// Geolocation and network-ownership data for one address.
///
/// Field names follow the JSON document served to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoRecord {
    pub ip: String,
    pub ip_decimal: u32,
    pub country: String,
    pub country_iso: String,
    pub country_eu: bool,
    pub region_name: String,
    pub region_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
    pub asn: String,
    pub asn_org: String,
}

/// Raw geolocation service response.
///
/// Every field defaults so that a failure response, which carries only
/// `status` and `message`, still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct IpApiResponse {
    pub status: String,
    pub message: String,
    pub query: String,
    pub country: String,
    pub country_code: String,
    pub region_name: String,
    pub region: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    /// Combined "<ASN> <organization>" string
    #[serde(rename = "as")]
    pub autonomous_system: String,
}
