//! CORS preflight bypass.
//!
//! Browsers send an `OPTIONS` request ahead of cross-origin requests;
//! operators may exempt those from authentication wholesale. The path is
//! never inspected.

use crate::allowlist::composite::TrustChecker;
use crate::http::request::TrustRequest;

/// Trusts every `OPTIONS` request when enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preflight {
    enabled: bool,
}

impl Preflight {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl TrustChecker for Preflight {
    fn is_trusted(&self, req: &TrustRequest) -> bool {
        self.enabled && req.method == "OPTIONS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_ignores_path() {
        let preflight = Preflight::new(true);
        assert!(preflight.is_trusted(&TrustRequest::new("OPTIONS", "/any/path/works", "")));
        assert!(!preflight.is_trusted(&TrustRequest::new("GET", "/any/path/works", "")));
    }

    #[test]
    fn test_disabled_preflight_trusts_nothing() {
        let preflight = Preflight::new(false);
        assert!(!preflight.is_trusted(&TrustRequest::new("OPTIONS", "/any/path/works", "")));
    }
}
