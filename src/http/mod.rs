//! HTTP integration layer.
//!
//! # Data Flow
//! ```text
//! Incoming axum request
//!     → request.rs (normalize to method / path / remote address)
//!     → middleware/auth_bypass.rs (consult AllowlistHandle)
//!     → trusted: mark request, skip authentication
//!     → untrusted: fail closed (authentication required)
//! ```

pub mod middleware;
pub mod request;

pub use request::TrustRequest;
