use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "carprice.json";

/// Where the artifacts live and where to listen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV of historical listings used to fill the choice controls
    pub dataset_path: PathBuf,
    /// Serialized predictor
    pub model_path: PathBuf,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/Cardetails.csv"),
            model_path: PathBuf::from("data/model.json"),
            bind_addr: "127.0.0.1:8501".to_string(),
        }
    }
}

/// Get the path to the config file in the working directory
pub fn get_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Load the config, falling back to defaults if the file doesn't exist
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context("failed to read config file")?;
    let config: AppConfig = serde_json::from_str(&content).context("failed to parse config file")?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
