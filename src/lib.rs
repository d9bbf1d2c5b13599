//! Request trust evaluator for an authenticating reverse proxy.
//!
//! Decides, per inbound request, whether authentication may be skipped
//! because the request matches an operator-configured allowlist. Matchers
//! are compiled once from configuration, frozen, and queried lock-free on
//! the request path.

// Core subsystems
pub mod allowlist;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod observability;

pub use allowlist::composite::{AllowlistHandle, CompositeAllowlist, TrustChecker};
pub use config::schema::{AllowlistConfig, GatewayConfig};
pub use config::validation::validate_allowlist;
pub use http::request::TrustRequest;
