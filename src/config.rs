use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "sigma-inspect.toml";
pub const DEFAULT_LOG_FILTER: &str = "sigma_reader=info,sigma_inspect=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    pub log_filter: String,
    pub output: OutputFormat,
    /// Fail when bytes remain after the layout is decoded
    pub require_consumed: bool,
    pub default_layout: Option<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            require_consumed: false,
            default_layout: None,
        }
    }
}

impl InspectConfig {
    /// Reads the config file if present, otherwise falls back to defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)?;
            let config: InspectConfig = toml::from_str(&content)?;
            Ok(config)
        } else if config_path.is_some() {
            anyhow::bail!("config file not found: {}", config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}
