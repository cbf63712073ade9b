//! GeoIP lookup using a remote geolocation service.
//!
//! This module queries the geolocation service for an address and normalizes
//! the answer: the combined autonomous-system string is split into number and
//! organization, the dotted IPv4 address is converted to its numeric form and
//! the country code is classified as EU member or not.

mod extract;
mod lookup;
mod types;

// Re-export public API
pub use extract::{ip_to_decimal, is_eu_country, split_asn};
pub use lookup::GeoLookupClient;
pub use types::GeoRecord;
