//! Caller address resolution.
//!
//! The caller's address comes from the first `X-Forwarded-For` hop when the
//! header is present, otherwise from the socket peer. A loopback peer is
//! replaced by asking a public-IP echo service what our own public address is.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::{LOOPBACK_ADDRESSES, MAX_PUBLIC_IP_BODY_SIZE, UNKNOWN_ADDRESS};

/// Outcome of address resolution.
///
/// `degraded` is set when the public-IP fallback was needed but failed and
/// `address` holds the `UNKNOWN` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: String,
    pub degraded: bool,
}

impl ResolvedAddress {
    fn resolved(address: String) -> Self {
        Self {
            address,
            degraded: false,
        }
    }

    fn degraded() -> Self {
        Self {
            address: UNKNOWN_ADDRESS.to_string(),
            degraded: true,
        }
    }
}

/// Resolves the caller's public address for a request.
pub struct AddressResolver {
    client: Arc<reqwest::Client>,
    public_ip_endpoint: String,
}

impl AddressResolver {
    pub fn new(client: Arc<reqwest::Client>, public_ip_endpoint: impl Into<String>) -> Self {
        Self {
            client,
            public_ip_endpoint: public_ip_endpoint.into(),
        }
    }

    /// Resolves the caller's address.
    ///
    /// A forwarded address is trusted as-is, even when it is itself a loopback
    /// address; only the peer address goes through the loopback check. Makes at
    /// most one outbound call and never fails.
    pub async fn resolve(&self, forwarded_for: Option<&str>, peer: SocketAddr) -> ResolvedAddress {
        if let Some(forwarded) = forwarded_for.and_then(first_forwarded_address) {
            log::debug!("Using forwarded address {}", forwarded);
            return ResolvedAddress::resolved(forwarded);
        }

        let host = peer.ip().to_string();
        if !is_loopback(&host) {
            return ResolvedAddress::resolved(host);
        }

        match self.fetch_public_ip().await {
            Ok(public_ip) => {
                log::debug!("Loopback peer {} resolved to public address {}", host, public_ip);
                ResolvedAddress::resolved(public_ip)
            }
            Err(e) => {
                log::warn!(
                    "Public IP lookup via {} failed: {}. Continuing with {}",
                    self.public_ip_endpoint,
                    e,
                    UNKNOWN_ADDRESS
                );
                ResolvedAddress::degraded()
            }
        }
    }

    /// Asks the echo service for our public address, reading at most
    /// `MAX_PUBLIC_IP_BODY_SIZE` bytes of the body.
    async fn fetch_public_ip(&self) -> Result<String, reqwest::Error> {
        let mut response = self
            .client
            .get(&self.public_ip_endpoint)
            .send()
            .await?
            .error_for_status()?;

        let mut body = Vec::with_capacity(MAX_PUBLIC_IP_BODY_SIZE);
        while body.len() < MAX_PUBLIC_IP_BODY_SIZE {
            match response.chunk().await? {
                Some(chunk) => {
                    let take = chunk.len().min(MAX_PUBLIC_IP_BODY_SIZE - body.len());
                    body.extend_from_slice(&chunk[..take]);
                }
                None => break,
            }
        }

        Ok(String::from_utf8_lossy(&body).trim().to_string())
    }
}

/// Returns the first hop of an `X-Forwarded-For` value, trimmed.
///
/// Returns `None` for an empty header value so the caller falls back to the peer.
pub fn first_forwarded_address(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let first = value.split(',').next().unwrap_or(value);
    Some(first.trim().to_string())
}

/// Whether `address` is the IPv4 or IPv6 loopback address.
pub fn is_loopback(address: &str) -> bool {
    LOOPBACK_ADDRESSES.contains(&address)
}
