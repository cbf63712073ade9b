//! Normalization of upstream geolocation data.
//!
//! Lenient, pure helpers: none of them fail on malformed input, they fall back
//! to empty or zero values instead.

use super::types::{GeoRecord, IpApiResponse};
use crate::config::EU_COUNTRY_CODES;

/// Splits a combined autonomous-system string on the first space.
///
/// `"AS15169 Google LLC"` becomes `("AS15169", "Google LLC")`; a string with no
/// space is all ASN and the organization is empty.
pub fn split_asn(value: &str) -> (String, String) {
    match value.split_once(' ') {
        Some((asn, org)) => (asn.to_string(), org.to_string()),
        None => (value.to_string(), String::new()),
    }
}

/// Converts a dotted IPv4 address into its 32-bit big-endian value.
///
/// Octets that do not parse count as zero, and only the first four groups are
/// folded. Anything that is not dotted-quad (IPv6, sentinels) yields 0.
pub fn ip_to_decimal(ip: &str) -> u32 {
    ip.split('.').take(4).fold(0u32, |decimal, octet| {
        decimal
            .wrapping_mul(256)
            .wrapping_add(octet.parse::<u32>().unwrap_or(0))
    })
}

/// Whether `country_code` is one of the EU member states.
pub fn is_eu_country(country_code: &str) -> bool {
    EU_COUNTRY_CODES.contains(&country_code)
}

/// Builds the normalized record from a successful upstream response.
///
/// `ip_decimal` is derived from the address the upstream reports, which may
/// differ from the address that was asked about.
pub(crate) fn normalize(response: IpApiResponse) -> GeoRecord {
    let (asn, asn_org) = split_asn(&response.autonomous_system);
    let ip_decimal = ip_to_decimal(&response.query);
    let country_eu = is_eu_country(&response.country_code);

    GeoRecord {
        ip: response.query,
        ip_decimal,
        country: response.country,
        country_iso: response.country_code,
        country_eu,
        region_name: response.region_name,
        region_code: response.region,
        city: response.city,
        latitude: response.lat,
        longitude: response.lon,
        time_zone: response.timezone,
        asn,
        asn_org,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_asn_with_organization() {
        assert_eq!(
            split_asn("AS15169 Google LLC"),
            ("AS15169".to_string(), "Google LLC".to_string())
        );
    }

    #[test]
    fn test_split_asn_without_organization() {
        assert_eq!(split_asn("AS15169"), ("AS15169".to_string(), String::new()));
    }

    #[test]
    fn test_split_asn_empty() {
        assert_eq!(split_asn(""), (String::new(), String::new()));
    }

    #[test]
    fn test_ip_to_decimal_well_formed() {
        assert_eq!(ip_to_decimal("1.2.3.4"), 16_909_060);
        assert_eq!(ip_to_decimal("0.0.0.0"), 0);
        assert_eq!(ip_to_decimal("255.255.255.255"), u32::MAX);
        assert_eq!(ip_to_decimal("8.8.8.8"), 134_744_072);
        assert_eq!(ip_to_decimal("203.0.113.9"), 3_405_803_785);
    }

    #[test]
    fn test_ip_to_decimal_matches_std_parse() {
        for ip in ["10.0.0.1", "192.168.1.254", "172.16.5.4", "100.64.0.1"] {
            let expected = u32::from(ip.parse::<std::net::Ipv4Addr>().unwrap());
            assert_eq!(ip_to_decimal(ip), expected, "mismatch for {}", ip);
        }
    }

    #[test]
    fn test_ip_to_decimal_unparsable_octets_are_zero() {
        assert_eq!(ip_to_decimal("1.x.3.4"), 16_777_216 + 3 * 256 + 4);
        assert_eq!(ip_to_decimal("UNKNOWN"), 0);
        assert_eq!(ip_to_decimal(""), 0);
    }

    #[test]
    fn test_ip_to_decimal_ignores_groups_past_fourth() {
        assert_eq!(ip_to_decimal("1.2.3.4.5"), 16_909_060);
    }

    #[test]
    fn test_ip_to_decimal_ipv6_does_not_panic() {
        assert_eq!(ip_to_decimal("2001:db8::1"), 0);
    }

    #[test]
    fn test_ip_to_decimal_oversized_octets_do_not_panic() {
        let _ = ip_to_decimal("999999999.999999999.999999999.999999999");
    }

    #[test]
    fn test_is_eu_country() {
        for code in EU_COUNTRY_CODES {
            assert!(is_eu_country(code), "{} should be EU", code);
        }
        assert_eq!(EU_COUNTRY_CODES.len(), 27);
    }

    #[test]
    fn test_is_eu_country_non_members() {
        for code in ["US", "GB", "CH", "NO", "", "de", "XX", "EU"] {
            assert!(!is_eu_country(code), "{:?} should not be EU", code);
        }
    }

    #[test]
    fn test_normalize_uses_upstream_query() {
        let response = IpApiResponse {
            status: "success".to_string(),
            query: "1.2.3.4".to_string(),
            country: "Germany".to_string(),
            country_code: "DE".to_string(),
            region_name: "Hesse".to_string(),
            region: "HE".to_string(),
            city: "Frankfurt am Main".to_string(),
            lat: 50.1109,
            lon: 8.68213,
            timezone: "Europe/Berlin".to_string(),
            autonomous_system: "AS3320 Deutsche Telekom AG".to_string(),
            ..Default::default()
        };

        let record = normalize(response);
        assert_eq!(record.ip, "1.2.3.4");
        assert_eq!(record.ip_decimal, 16_909_060);
        assert_eq!(record.country_iso, "DE");
        assert!(record.country_eu);
        assert_eq!(record.region_code, "HE");
        assert_eq!(record.time_zone, "Europe/Berlin");
        assert_eq!(record.asn, "AS3320");
        assert_eq!(record.asn_org, "Deutsche Telekom AG");
    }
}
