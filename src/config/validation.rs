//! Allowlist validation and compilation.
//!
//! # Responsibilities
//! - Compile every configured entry into its matcher
//! - Accumulate every diagnostic, not just the first
//! - Assemble the validated matchers into a CompositeAllowlist
//!
//! # Design Decisions
//! - Returns all validation diagnostics, not just first
//! - Partial success: valid entries are committed even when siblings fail
//! - Failing duplicates each contribute their own diagnostic; successful
//!   duplicates are deduplicated by the matchers themselves
//! - Runs before the allowlist is published to request handlers

use crate::allowlist::composite::{CompositeAllowlist, TrustChecker};
use crate::allowlist::ips::TrustedIps;
use crate::allowlist::preflight::Preflight;
use crate::allowlist::routes::{Regexes, Routes};
use crate::config::schema::AllowlistConfig;

/// Compile the full allowlist configuration.
///
/// Every entry of every list is attempted; diagnostics accumulate in
/// configured order (routes, then regexes, then trusted IPs). An empty
/// diagnostic vector means the configuration is fully valid. The
/// returned allowlist contains only the entries that compiled; the
/// caller decides whether non-empty diagnostics are fatal.
pub fn validate_allowlist(config: &AllowlistConfig) -> (CompositeAllowlist, Vec<String>) {
    let mut msgs = Vec::new();

    let mut routes = Routes::new();
    msgs.extend(validate_routes(&config.skip_auth_routes, &mut routes));

    let mut regexes = Regexes::new();
    msgs.extend(validate_regexes(&config.skip_auth_regex, &mut regexes));

    let preflight = Preflight::new(config.skip_auth_preflight);

    let mut ips = TrustedIps::new();
    msgs.extend(validate_trusted_ips(&config.trusted_ips, &mut ips));

    tracing::debug!(
        routes = routes.len(),
        regexes = regexes.len(),
        preflight = config.skip_auth_preflight,
        trusted_ips = ips.len(),
        diagnostics = msgs.len(),
        "allowlist compiled"
    );

    // Cheapest checks first; OR is commutative so order only affects latency.
    let checkers: Vec<Box<dyn TrustChecker>> = vec![
        Box::new(preflight),
        Box::new(routes),
        Box::new(regexes),
        Box::new(ips),
    ];

    (CompositeAllowlist::new(checkers), msgs)
}

/// Populate the route matcher, returning one diagnostic per failed entry.
pub fn validate_routes(entries: &[String], routes: &mut Routes) -> Vec<String> {
    entries.iter().filter_map(|e| routes.add(e)).collect()
}

/// Populate the regex matcher, returning one diagnostic per failed entry.
pub fn validate_regexes(entries: &[String], regexes: &mut Regexes) -> Vec<String> {
    entries.iter().filter_map(|e| regexes.add(e)).collect()
}

/// Populate the trusted IP matcher, returning one diagnostic per failed
/// entry.
pub fn validate_trusted_ips(entries: &[String], ips: &mut TrustedIps) -> Vec<String> {
    entries.iter().filter_map(|e| ips.add(e)).collect()
}
