use clap::Parser;
use std::path::PathBuf;

/// Housekeeping and reporting for a Dependency-Track server
#[derive(Parser, Debug)]
#[command(name = "dtrack-tools")]
#[command(version)]
#[command(
    about = "Housekeeping and reporting for a Dependency-Track server",
    long_about = None,
    after_help = "Actions:\n  \
        clean-gitflow-short-living-branch-versions (alias: cleanup)\n      \
        [--project-filter <REGEX>] [--dry-run]\n  \
        create-vulnerability-report (alias: report)\n      \
        --tag <TAG> [--writer xlsx|json] [--output-dir <DIR>]"
)]
pub struct Args {
    /// Base URL of the Dependency-Track server, e.g. https://dtrack.example.com
    #[arg(long, env = "DTRACK_URL", value_name = "URL")]
    pub url: Option<String>,

    /// API key sent with every request
    #[arg(long, env = "DTRACK_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Path to a config file (defaults to ./dtrack-tools.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Action to run
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Arguments of the action
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub arguments: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
