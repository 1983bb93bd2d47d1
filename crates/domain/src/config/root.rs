use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pihole::{PiholeApi, PiholeConfig};
use super::scanner::ScannerConfig;

const LOCAL_CONFIG_PATH: &str = "netscene.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/netscene/config.toml";

/// Main configuration structure for NetScene
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// ARP table query settings
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Pi-hole HTTP client settings
    #[serde(default)]
    pub pihole: PiholeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. netscene.toml in current directory
    /// 3. /etc/netscene/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(api) = overrides.pihole_api {
            self.pihole.api = api;
        }
        if let Some(timeout) = overrides.pihole_timeout_secs {
            self.pihole.timeout_secs = timeout;
        }
        if let Some(command) = overrides.arp_command {
            self.scanner.command = command;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "scanner.command cannot be empty".to_string(),
            ));
        }

        if self.pihole.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "pihole.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file that would be used by default
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub pihole_api: Option<PiholeApi>,
    pub pihole_timeout_secs: Option<u64>,
    pub arp_command: Option<String>,
}
