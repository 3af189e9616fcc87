//! Shared utilities for CLI commands

use crate::Result;
use crate::cli::args::ReportArgs;

/// Set up structured logging for the report command.
///
/// Logging goes to stderr so the report itself stays clean on stdout.
pub fn setup_logging(args: &ReportArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wigos_log_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
