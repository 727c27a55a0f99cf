use naxsi_wl_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        known_ids = config.rules.known_ids.len(),
        rules_file = config.rules.rules_file.as_deref().unwrap_or("none"),
        format = %config.output.format,
        "Configuration loaded"
    );

    Ok(config)
}
