//! Process start-up: configuration loading and logging, then the engine.
use dnsforever_domain::{Config, ConfigError, ConfigOverrides, ZoneEvent};
use dnsforever_infrastructure::init_logging;
use tokio::sync::mpsc;
use tracing::info;

use crate::Authority;

pub fn load_config(
    config_path: Option<&str>,
    overrides: ConfigOverrides,
) -> Result<Config, ConfigError> {
    Config::load(config_path, overrides)
}

/// Loads the configuration, installs the global subscriber (unless one is
/// already present) and builds the engine.
pub fn start(
    config_path: Option<&str>,
    overrides: ConfigOverrides,
) -> Result<(Authority, Option<mpsc::UnboundedReceiver<ZoneEvent>>), ConfigError> {
    let config = load_config(config_path, overrides)?;
    init_logging(&config.logging);

    info!(
        level = %config.logging.level,
        format = ?config.logging.format,
        "Starting dnsforever authority"
    );

    Ok(Authority::with_event_channel(&config))
}
