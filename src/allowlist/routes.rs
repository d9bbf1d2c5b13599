//! Route and regex path matchers.
//!
//! # Responsibilities
//! - Parse `METHOD=pattern` and bare `pattern` allowlist entries
//! - Compile patterns as regular expressions, reporting every failure
//! - Match request method + path with "contains a match" semantics
//!
//! # Design Decisions
//! - Unanchored matching: patterns apply anywhere in the path unless the
//!   pattern itself carries `^`/`$`
//! - Re-adding an identical entry is a silent no-op, never an error
//! - A pattern that fails to compile is never stored

use std::collections::HashSet;

use regex::Regex;

use crate::allowlist::composite::TrustChecker;
use crate::http::request::TrustRequest;

/// Method sentinel for entries with no `METHOD=` prefix.
const ANY_METHOD: &str = "ANY";

/// Compile a pattern source, producing the operator-facing diagnostic on
/// failure. The `/.../ ` framing is a fixed format consumed by tooling.
fn compile_pattern(source: &str) -> Result<Regex, String> {
    Regex::new(source).map_err(|err| format!("error compiling regex /{source}/: {err}"))
}

/// One compiled `METHOD=pattern` allowlist entry.
#[derive(Debug, Clone)]
struct RoutePattern {
    method: String,
    pattern: Regex,
}

/// Method-scoped path pattern matcher.
///
/// Entries of the form `POST=^/api/` restrict the pattern to one HTTP
/// method; entries without a method prefix match any method.
#[derive(Debug, Default)]
pub struct Routes {
    patterns: Vec<RoutePattern>,
    seen: HashSet<String>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and store one allowlist entry.
    ///
    /// Returns a diagnostic message if the pattern does not compile.
    /// Duplicate entries (same method + pattern source) are dropped
    /// silently so registration stays idempotent.
    pub fn add(&mut self, entry: &str) -> Option<String> {
        let (method, source) = split_method(entry);
        let method = method.unwrap_or(ANY_METHOD);
        let key = format!("{method}={source}");
        if self.seen.contains(&key) {
            return None;
        }

        match compile_pattern(source) {
            Ok(pattern) => {
                self.seen.insert(key);
                self.patterns.push(RoutePattern {
                    method: method.to_string(),
                    pattern,
                });
                None
            }
            Err(msg) => Some(msg),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn matches(&self, method: &str, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| (p.method == ANY_METHOD || p.method == method) && p.pattern.is_match(path))
    }
}

impl TrustChecker for Routes {
    fn is_trusted(&self, req: &TrustRequest) -> bool {
        self.matches(&req.method, &req.path)
    }
}

/// Split a `METHOD=remainder` entry.
///
/// The method prefix is recognized only when everything before the first
/// `=` is a non-empty, unbroken run of uppercase ASCII letters; anything
/// else (lowercase, digits, empty) is part of the pattern itself.
fn split_method(entry: &str) -> (Option<&str>, &str) {
    if let Some(idx) = entry.find('=') {
        let prefix = &entry[..idx];
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_uppercase()) {
            return (Some(prefix), &entry[idx + 1..]);
        }
    }
    (None, entry)
}

/// Method-agnostic path pattern matcher.
///
/// Same compilation and dedup behavior as [`Routes`], but every entry is
/// a bare pattern and the request method is ignored entirely.
#[derive(Debug, Default)]
pub struct Regexes {
    patterns: Vec<Regex>,
    seen: HashSet<String>,
}

impl Regexes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and store one pattern, returning a diagnostic on failure.
    pub fn add(&mut self, source: &str) -> Option<String> {
        if self.seen.contains(source) {
            return None;
        }

        match compile_pattern(source) {
            Ok(pattern) => {
                self.seen.insert(source.to_string());
                self.patterns.push(pattern);
                None
            }
            Err(msg) => Some(msg),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(path))
    }
}

impl TrustChecker for Regexes {
    fn is_trusted(&self, req: &TrustRequest) -> bool {
        self.matches(&req.path)
    }
}
