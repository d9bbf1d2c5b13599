//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::validate_allowlist;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
///
/// The allowlist is compiled once here so that every diagnostic is
/// reported before the config is accepted; the proxy must not start
/// with ambiguous security configuration.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<GatewayConfig, ConfigError> {
    let config: GatewayConfig = toml::from_str(content)?;

    let (_, diagnostics) = validate_allowlist(&config.allowlist);
    if !diagnostics.is_empty() {
        return Err(ConfigError::Validation(diagnostics));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").expect("defaults should be valid");
        assert!(config.allowlist.skip_auth_routes.is_empty());
        assert!(!config.allowlist.skip_auth_preflight);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [allowlist]
            skip_auth_routes = ["POST=/foo/bar", "PUT=^/foo/bar$"]
            skip_auth_regex = ["/foo/baz"]
            skip_auth_preflight = true
            trusted_ips = ["10.32.0.1/32", "43.36.201.0/24"]

            [observability]
            log_level = "debug"
            "#,
        )
        .expect("config should be valid");

        assert_eq!(config.allowlist.skip_auth_routes.len(), 2);
        assert!(config.allowlist.skip_auth_preflight);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_invalid_allowlist_is_rejected() {
        let err = parse_config(
            r#"
            [allowlist]
            skip_auth_routes = ["POST=/(foo"]
            trusted_ips = ["alkwlkbn/32"]
            "#,
        )
        .expect_err("validation should fail");

        match err {
            ConfigError::Validation(msgs) => {
                assert_eq!(msgs.len(), 2);
                assert!(msgs[0].starts_with("error compiling regex //(foo/: "));
                assert_eq!(msgs[1], "could not parse IP network (alkwlkbn/32)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
