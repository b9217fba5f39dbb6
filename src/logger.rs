//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, before running a command.

use anyhow::{Result, anyhow, bail};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Initialise the global tracing subscriber, writing to stderr.
///
/// An explicit `level` wins. Without one, `RUST_LOG` is used when it parses,
/// and [`DEFAULT_LEVEL`] otherwise.
pub fn init(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::default().add_directive(parse_level(level)?.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to set subscriber: {e}"))
}

/// Parse a log level string into a [`LevelFilter`].
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    if level.is_empty() {
        bail!("Log level must not be empty");
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Unrecognised log level: '{level}'"))
}
