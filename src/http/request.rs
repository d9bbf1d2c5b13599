//! Normalized request view for trust evaluation.
//!
//! # Responsibilities
//! - Reduce an HTTP request to the three fields matchers care about
//! - Extract the peer address from connection info when available
//!
//! # Design Decisions
//! - Owned strings: the view outlives any borrow of the request and is
//!   cheap relative to regex evaluation
//! - A missing peer address yields an empty remote address, which no IP
//!   range can trust (fail closed)

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::Request;

/// The request fields consulted by allowlist matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustRequest {
    /// HTTP method token, e.g. `GET`.
    pub method: String,
    /// URI path, e.g. `/foo/bar`.
    pub path: String,
    /// Peer address as `host:port` or bare host; may be empty.
    pub remote_addr: String,
}

impl TrustRequest {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        remote_addr: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            remote_addr: remote_addr.into(),
        }
    }

    /// Build a view from an axum request.
    ///
    /// The remote address comes from the `ConnectInfo` extension the
    /// server attaches at accept time; absent that, it is left empty.
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let remote_addr = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.to_string())
            .unwrap_or_default();

        Self {
            method: req.method().as_str().to_string(),
            path: req.uri().path().to_string(),
            remote_addr,
        }
    }
}
