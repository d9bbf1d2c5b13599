//! Validate an allowlist configuration file.
//!
//! Prints every diagnostic the validator accumulates and exits non-zero
//! if the configuration would prevent the proxy from starting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use trustgate::config::validation::validate_allowlist;
use trustgate::observability::init_logging;

#[derive(Parser)]
#[command(name = "trustgate-check")]
#[command(about = "Validate allowlist configuration for the trust evaluator", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    config: PathBuf,

    /// Log level when RUST_LOG is unset.
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let content = match std::fs::read_to_string(&cli.config) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: could not read {}: {}", cli.config.display(), e);
            return ExitCode::from(2);
        }
    };

    // Parse syntax only; semantic diagnostics are listed one per line
    // below rather than folded into a single error.
    let config = match parse_config_syntax(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    let (_, diagnostics) = validate_allowlist(&config.allowlist);
    if diagnostics.is_empty() {
        println!("{}: allowlist configuration valid", cli.config.display());
        return ExitCode::SUCCESS;
    }

    for msg in &diagnostics {
        eprintln!("{msg}");
    }
    eprintln!(
        "{}: {} invalid allowlist entr{}",
        cli.config.display(),
        diagnostics.len(),
        if diagnostics.len() == 1 { "y" } else { "ies" }
    );
    ExitCode::FAILURE
}

fn parse_config_syntax(content: &str) -> Result<trustgate::GatewayConfig, toml::de::Error> {
    toml::from_str(content)
}
