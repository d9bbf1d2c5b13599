//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (compile matchers, accumulate diagnostics)
//!     → CompositeAllowlist (validated, immutable)
//!     → published via AllowlistHandle
//!
//! On reload:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs revalidates
//!     → atomic swap of the published allowlist
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full rebuild
//! - All fields have defaults to allow minimal configs
//! - Validation never stops at the first bad entry: the operator sees
//!   every diagnostic in one pass

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::{AllowlistConfig, GatewayConfig};
pub use validation::validate_allowlist;
