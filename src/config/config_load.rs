// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::config_types::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub osc: OscConfig,
    pub logging: LoggingConfig,
    pub animation: AnimationConfig,
    pub converter: ConverterConfig,
    pub array: ArrayConfig,
    pub palette: PaletteConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_path().filter(|p| p.exists()) {
            return Self::load_from(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from(PathBuf::from("config.toml"))
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn palette(&self) -> Palette {
        Palette::from(&self.palette)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join("config.toml"))
    }
}
