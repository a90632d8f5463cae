use automotion_vision::DEFAULT_OUTPUT_DIR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "automotion.config.json";

pub const DEFAULT_REPORT_NAME: &str = "result";

/// Automotion configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `json/` records and `img/` screenshots
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name of the HTML report, without extension
    #[serde(default = "default_report_name")]
    pub report_name: String,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_report_name() -> String {
    DEFAULT_REPORT_NAME.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Absolute path to the output directory
    pub fn get_output_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.output_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            report_name: default_report_name(),
        }
    }
}
