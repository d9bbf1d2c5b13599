//! Observability subsystem.
//!
//! Structured logging via `tracing`; matchers themselves stay silent on
//! the hot path, logging happens at compile/reload boundaries and in the
//! middleware at debug level.

pub mod logging;

pub use logging::init_logging;
