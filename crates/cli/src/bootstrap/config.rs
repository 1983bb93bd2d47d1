use anyhow::Context;
use netscene_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    debug!(
        arp_command = %config.scanner.command,
        pihole_api = %config.pihole.api,
        "Configuration loaded"
    );
    Ok(config)
}
