//! Request-path middleware.

pub mod auth_bypass;

pub use auth_bypass::{auth_bypass_middleware, AuthBypassState, TrustContext};
