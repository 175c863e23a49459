use relief_geocoder_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call after `init_logging`.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        backend = %config.cache.backend,
        providers = ?config.providers.order,
        timeout_ms = config.providers.timeout_ms,
        "Configuration loaded"
    );
}
