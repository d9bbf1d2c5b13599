//! Composite trust evaluation over heterogeneous matchers.
//!
//! # Responsibilities
//! - Define the common trust-checker capability all matchers implement
//! - Combine matchers with short-circuit OR semantics
//! - Publish rebuilt allowlists atomically for lock-free readers
//!
//! # Design Decisions
//! - Trait objects rather than an enum: matcher kinds are
//!   closed-but-extensible and evaluated uniformly
//! - Evaluation order is cheapest-first (preflight and route checks
//!   before IP parsing); the result is order-independent since OR is
//!   commutative
//! - Reload replaces the whole allowlist via atomic swap, never mutates
//!   a published matcher in place

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::http::request::TrustRequest;

/// Capability shared by every allowlist matcher kind.
pub trait TrustChecker: Send + Sync + std::fmt::Debug {
    /// Returns true if this matcher trusts the request (auth may be
    /// skipped). Must never fail: anything uninterpretable is untrusted.
    fn is_trusted(&self, req: &TrustRequest) -> bool;
}

/// Ordered set of matchers evaluated with OR semantics.
#[derive(Debug, Default)]
pub struct CompositeAllowlist {
    checkers: Vec<Box<dyn TrustChecker>>,
}

impl CompositeAllowlist {
    pub fn new(checkers: Vec<Box<dyn TrustChecker>>) -> Self {
        Self { checkers }
    }

    /// True if any matcher trusts the request; short-circuits on the
    /// first match, false when none match (fail closed).
    pub fn is_trusted(&self, req: &TrustRequest) -> bool {
        self.checkers.iter().any(|c| c.is_trusted(req))
    }
}

/// Shared, atomically swappable handle to the current allowlist.
///
/// Constructed once at startup and cloned into request handlers; a
/// configuration reload builds a fresh [`CompositeAllowlist`] and
/// publishes it with [`store`](Self::store) so in-flight requests never
/// observe a partially built matcher.
#[derive(Clone)]
pub struct AllowlistHandle {
    inner: Arc<ArcSwap<CompositeAllowlist>>,
}

impl AllowlistHandle {
    pub fn new(allowlist: CompositeAllowlist) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(allowlist)),
        }
    }

    /// Evaluate against the currently published allowlist.
    pub fn is_trusted(&self, req: &TrustRequest) -> bool {
        self.inner.load().is_trusted(req)
    }

    /// Atomically publish a rebuilt allowlist.
    pub fn store(&self, allowlist: CompositeAllowlist) {
        self.inner.store(Arc::new(allowlist));
    }

    /// Snapshot of the currently published allowlist.
    pub fn load(&self) -> Arc<CompositeAllowlist> {
        self.inner.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::preflight::Preflight;
    use crate::allowlist::routes::Routes;

    #[test]
    fn test_or_semantics() {
        let mut routes = Routes::new();
        assert_eq!(routes.add("GET=/foo"), None);

        let composite = CompositeAllowlist::new(vec![
            Box::new(Preflight::new(true)),
            Box::new(routes),
        ]);

        // Trusted by preflight only
        assert!(composite.is_trusted(&TrustRequest::new("OPTIONS", "/anything", "")));
        // Trusted by routes only
        assert!(composite.is_trusted(&TrustRequest::new("GET", "/foo", "")));
        // Trusted by neither
        assert!(!composite.is_trusted(&TrustRequest::new("POST", "/bar", "")));
    }

    #[test]
    fn test_empty_composite_trusts_nothing() {
        let composite = CompositeAllowlist::default();
        assert!(!composite.is_trusted(&TrustRequest::new("GET", "/", "127.0.0.1:80")));
    }

    #[test]
    fn test_handle_swap_replaces_allowlist() {
        let handle = AllowlistHandle::new(CompositeAllowlist::default());
        let req = TrustRequest::new("OPTIONS", "/", "");
        assert!(!handle.is_trusted(&req));

        handle.store(CompositeAllowlist::new(vec![Box::new(Preflight::new(
            true,
        ))]));
        assert!(handle.is_trusted(&req));
    }
}
