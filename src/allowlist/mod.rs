//! Allowlist matching subsystem.
//!
//! # Data Flow
//! ```text
//! Allowlist Compilation (at startup / reload):
//!     AllowlistConfig (raw strings)
//!         → config::validation (attempt every entry, collect diagnostics)
//!         → routes.rs / ips.rs / preflight.rs (compiled matchers)
//!         → composite.rs (frozen CompositeAllowlist)
//!         → published via AllowlistHandle (atomic swap)
//!
//! Incoming Request (method, path, remote address)
//!     → composite.rs (evaluate matchers in order, OR semantics)
//!     → Return: trusted (skip auth) or untrusted (require auth)
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - Partial success: one bad entry never blocks the others
//! - Fail closed: anything unparsable at request time is untrusted
//! - First matcher to report trusted wins (short-circuit OR)

pub mod composite;
pub mod ips;
pub mod preflight;
pub mod routes;

pub use composite::{AllowlistHandle, CompositeAllowlist, TrustChecker};
pub use ips::TrustedIps;
pub use preflight::Preflight;
pub use routes::{Regexes, Routes};
