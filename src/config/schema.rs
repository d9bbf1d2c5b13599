//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the trust evaluator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Authentication bypass allowlist.
    pub allowlist: AllowlistConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Raw allowlist inputs, as written by the operator.
///
/// Order is preserved: diagnostics are reported in configured order.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AllowlistConfig {
    /// Route entries, each `METHOD=regex` or bare `regex`.
    pub skip_auth_routes: Vec<String>,

    /// Method-agnostic path regex entries.
    pub skip_auth_regex: Vec<String>,

    /// Trust all CORS preflight (`OPTIONS`) requests.
    pub skip_auth_preflight: bool,

    /// Trusted caller addresses, each an IP literal or CIDR block.
    pub trusted_ips: Vec<String>,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
