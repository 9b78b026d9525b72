use anyhow::Context;
use zonelight_domain::{CliOverrides, Config};

/// Loads, overrides and validates the configuration. Runs before logging is
/// initialized, so failures surface through the returned error only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
