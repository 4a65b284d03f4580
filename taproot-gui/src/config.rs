use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taproot_ui::node::NodeStates;
use tracing_subscriber::filter;

use bitcoin::Network;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";
const DEFAULT_DIR_NAME: &str = "taproot-gui";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    #[serde(default = "default_network")]
    pub network: Network,
    /// Display the balance of the selected asset under the selector.
    #[serde(default = "default_show_balance")]
    pub show_balance: bool,
    /// Asset selected when the form opens, "sats" for the native currency.
    pub initial_asset: Option<String>,
    /// Asset balances of each node, keyed by node name.
    #[serde(default)]
    pub nodes: NodeStates,
}

fn default_network() -> Network {
    Network::Regtest
}

fn default_show_balance() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            network: default_network(),
            show_balance: default_show_balance(),
            initial_asset: None,
            nodes: NodeStates::new(),
        }
    }
}

impl Config {
    /// Default location of the configuration file, in the user configuration directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push(DEFAULT_DIR_NAME);
        path.push(DEFAULT_FILE_NAME);
        Ok(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        let config = Self::from_toml(&content)?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,
    #[error("Failed to locate the user configuration directory")]
    NoConfigDir,
    #[error("{0}")]
    ReadingFile(String),
    #[error("Configuration field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use taproot_ui::node::AssetBalance;

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"
            network = "signet"
            initial_asset = "sats"

            [nodes.alice]
            balances = [
                { id = "0a1b2c3d4e5f", name = "LUSD", balance = 1000 },
                { id = "ffeeddccbbaa", name = "ACME", balance = 0 },
            ]

            [nodes.bob]
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(config.network, Network::Signet);
        assert!(config.show_balance);
        assert_eq!(config.initial_asset.as_deref(), Some("sats"));
        assert_eq!(
            config.nodes["alice"].balances[0],
            AssetBalance::new("0a1b2c3d4e5f", "LUSD", 1000)
        );
        assert!(config.nodes["bob"].balances.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
    }

    #[test]
    fn test_invalid_config() {
        let config = Config::from_toml(r#"log_level = "loud""#).unwrap();
        assert!(matches!(
            config.log_level(),
            Err(ConfigError::InvalidField("log_level", _))
        ));
        assert!(matches!(
            Config::from_toml("nodes = 3"),
            Err(ConfigError::ReadingFile(_))
        ));
        assert_eq!(
            Config::from_file(Path::new("/nonexistent/taproot-gui/gui.toml")),
            Err(ConfigError::NotFound)
        );
    }
}
