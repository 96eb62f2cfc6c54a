//! Server configuration.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde::Deserialize;
use xdg::BaseDirectories;

/// Application prefix in XDG base directories.
///
/// This will be concatenated into `$XDG_CONFIG_HOME/depot`.
const XDG_PREFIX: &str = "depot";

/// Environment variable that holds the configuration.
const ENV_CONFIG: &str = "DEPOT_SERVER_TOML";

/// Configuration for the Depot server.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection.
    pub database: DatabaseConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL.
    pub url: String,
}

/// Loads the configuration.
///
/// An explicitly specified path wins over `DEPOT_SERVER_TOML`, which
/// wins over the XDG config path.
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = config_path {
        Ok(load_config_from_path(path))
    } else if let Ok(config_env) = env::var(ENV_CONFIG) {
        Ok(load_config_from_str(&config_env))
    } else {
        let path = get_xdg_config_path()?;

        if path.is_file() {
            Ok(load_config_from_path(&path))
        } else {
            Err(anyhow!(
                "No config found at {:?}. Specify one with --config.",
                path
            ))
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    tracing::info!("Using configurations: {:?}", path);

    let config = std::fs::read_to_string(path).expect("Failed to read configuration file");
    toml::from_str(&config).expect("Invalid configuration file")
}

pub fn load_config_from_str(s: &str) -> Config {
    tracing::info!("Using configurations from environment variable");
    toml::from_str(s).expect("Invalid configuration file")
}

pub fn get_xdg_config_path() -> anyhow::Result<PathBuf> {
    let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
    let config_path = xdg_dirs.place_config_file("server.toml")?;

    Ok(config_path)
}
