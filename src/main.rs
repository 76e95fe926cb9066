mod cli;

use cli::Args;
use dtrack_tools::adapters::outbound::network::{DependencyTrackClient, DependencyTrackRepository};
use dtrack_tools::application::factories::{ActionFactory, ActionKind, ActionOutcome};
use dtrack_tools::config::{self, ConfigFile};
use dtrack_tools::shared::error::ExitCode;
use dtrack_tools::shared::Result;
use std::path::Path;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    let exit_code = match run(&args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!("Action {} failed: {:#}", args.action, e);
            ExitCode::for_error(&e)
        }
    };

    if exit_code != ExitCode::Success {
        info!("Exiting with {}", exit_code);
    }
    process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: &Args) -> Result<ActionOutcome> {
    let config = load_config(args)?;

    // Validate the action and its arguments before touching the network
    let kind: ActionKind = args.action.parse()?;
    let action = ActionFactory::create(kind, &args.arguments, &config.action_settings())?;

    let connection = config::resolve_connection(
        args.url.as_deref(),
        args.api_key.as_deref(),
        args.timeout,
        &config,
    )?;
    let client =
        DependencyTrackClient::new(&connection.url, &connection.api_key, connection.timeout)?;
    info!("Running {} against {}", kind, client.api_url());

    let repository = DependencyTrackRepository::new(client);
    action.execute(&repository)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}
