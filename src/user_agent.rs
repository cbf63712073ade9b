//! Client identity parsing.
//!
//! Splits a raw `User-Agent` value into product and version on the first `/`.
//! Only the leading `product/version` token is recognized; comments and
//! further tokens stay in the version.

use serde::Serialize;

use crate::config::UNKNOWN_IDENTITY;

/// The caller's declared client identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientIdentity {
    pub product: String,
    pub version: String,
    pub raw_value: String,
}

/// Parses a raw identification string.
///
/// Without a `/` both `product` and `version` are `"Unknown"`. `raw_value`
/// always keeps the input untouched.
pub fn parse_identity(raw: &str) -> ClientIdentity {
    let (product, version) = match raw.split_once('/') {
        Some((product, version)) => (product.to_string(), version.to_string()),
        None => (UNKNOWN_IDENTITY.to_string(), UNKNOWN_IDENTITY.to_string()),
    };

    ClientIdentity {
        product,
        version,
        raw_value: raw.to_string(),
    }
}
