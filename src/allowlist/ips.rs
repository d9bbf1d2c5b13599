//! Trusted IP range matcher.
//!
//! # Responsibilities
//! - Parse configured entries as CIDR blocks or bare IP literals
//! - Normalize bare literals to host-only ranges (/32 or /128)
//! - Check request remote addresses for containment in any range
//!
//! # Design Decisions
//! - Parse errors surface only at configuration time; an unparsable
//!   request address is simply untrusted (fail closed)
//! - Semantically identical ranges may coexist; containment is what
//!   matters, not canonical form

use std::net::{IpAddr, SocketAddr};

use ipnet::IpNet;

use crate::allowlist::composite::TrustChecker;
use crate::http::request::TrustRequest;

/// Set of trusted IPv4/IPv6 ranges.
#[derive(Debug, Default)]
pub struct TrustedIps {
    networks: Vec<IpNet>,
}

impl TrustedIps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and store one trusted IP entry.
    ///
    /// The entry is tried as a CIDR block first, then as a bare IP
    /// literal normalized to a host-only range. Returns a diagnostic
    /// message if neither parse succeeds.
    pub fn add(&mut self, entry: &str) -> Option<String> {
        match parse_ip_network(entry) {
            Some(net) => {
                self.networks.push(net);
                None
            }
            None => Some(format!("could not parse IP network ({entry})")),
        }
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// True if the address falls inside any trusted range.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.networks.iter().any(|net| net.contains(&addr))
    }
}

impl TrustChecker for TrustedIps {
    fn is_trusted(&self, req: &TrustRequest) -> bool {
        match parse_remote_addr(&req.remote_addr) {
            Some(addr) => self.contains(addr),
            None => false,
        }
    }
}

fn parse_ip_network(entry: &str) -> Option<IpNet> {
    if let Ok(net) = entry.parse::<IpNet>() {
        return Some(net);
    }
    // Bare literal: host-only range (/32 for v4, /128 for v6).
    entry.parse::<IpAddr>().ok().map(IpNet::from)
}

/// Extract the IP address from a `host:port` or bare-host remote address.
///
/// Bracketed IPv6 literals (`[::1]:443`, `[::1]`) are unwrapped. Returns
/// `None` for anything that is not an IP address.
pub(crate) fn parse_remote_addr(raw: &str) -> Option<IpAddr> {
    if let Ok(sock) = raw.parse::<SocketAddr>() {
        return Some(sock.ip());
    }
    let host = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(raw);
    host.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(remote_addr: &str) -> TrustRequest {
        TrustRequest::new("GET", "/", remote_addr)
    }

    #[test]
    fn test_cidr_containment() {
        let mut ips = TrustedIps::new();
        assert_eq!(ips.add("43.36.201.0/24"), None);

        assert!(ips.is_trusted(&req("43.36.201.100:443")));
        assert!(!ips.is_trusted(&req("1.2.3.4:443")));
    }

    #[test]
    fn test_bare_literal_is_host_only() {
        let mut ips = TrustedIps::new();
        assert_eq!(ips.add("127.0.0.1"), None);

        assert!(ips.is_trusted(&req("127.0.0.1:8080")));
        assert!(!ips.is_trusted(&req("127.0.0.2:8080")));
    }

    #[test]
    fn test_ipv6_ranges() {
        let mut ips = TrustedIps::new();
        assert_eq!(ips.add("::1"), None);
        assert_eq!(ips.add("2a12:105:ee7:9234:0:0:0:0/64"), None);

        assert!(ips.is_trusted(&req("[::1]:443")));
        assert!(ips.is_trusted(&req("[2a12:105:ee7:9234::beef]:443")));
        assert!(!ips.is_trusted(&req("[2a12:105:ee7:9235::1]:443")));
    }

    #[test]
    fn test_invalid_entries_report_diagnostics() {
        let mut ips = TrustedIps::new();
        assert_eq!(
            ips.add("[::1]"),
            Some("could not parse IP network ([::1])".to_string())
        );
        assert_eq!(
            ips.add("alkwlkbn/32"),
            Some("could not parse IP network (alkwlkbn/32)".to_string())
        );
        assert!(ips.is_empty());
        assert!(!ips.is_trusted(&req("127.0.0.1:443")));
    }

    #[test]
    fn test_unparsable_remote_address_is_untrusted() {
        let mut ips = TrustedIps::new();
        assert_eq!(ips.add("0.0.0.0/0"), None);

        assert!(!ips.is_trusted(&req("not-an-address")));
        assert!(!ips.is_trusted(&req("")));
        // Hostname remote addresses are never trusted, even with port.
        assert!(!ips.is_trusted(&req("example.com:443")));
    }

    #[test]
    fn test_remote_addr_forms() {
        assert_eq!(
            parse_remote_addr("10.32.0.1:443"),
            "10.32.0.1".parse::<IpAddr>().ok()
        );
        assert_eq!(
            parse_remote_addr("10.32.0.1"),
            "10.32.0.1".parse::<IpAddr>().ok()
        );
        assert_eq!(parse_remote_addr("[::1]:443"), "::1".parse::<IpAddr>().ok());
        assert_eq!(parse_remote_addr("[::1]"), "::1".parse::<IpAddr>().ok());
        assert_eq!(parse_remote_addr("::1"), "::1".parse::<IpAddr>().ok());
    }

    #[test]
    fn test_overlapping_equivalent_ranges() {
        let mut ips = TrustedIps::new();
        assert_eq!(ips.add("135.180.78.199"), None);
        assert_eq!(ips.add("135.180.78.199/32"), None);
        assert_eq!(ips.len(), 2);

        assert!(ips.is_trusted(&req("135.180.78.199:443")));
    }
}
