// File: src/config.rs
// Handles configuration loading, saving, and defaults.
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_model() -> String {
    crate::client::gemini::DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    crate::client::gemini::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// API key for the generative service. May be left empty in the file and
    /// supplied via the `GEMINI_API_KEY` environment variable instead.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Upper bound for one service call; expiry surfaces as a service error.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    fn config_file_path() -> Result<PathBuf> {
        let proj = ProjectDirs::from("com", "taskscribe", "taskscribe")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        let dir = proj.config_dir();
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| anyhow::anyhow!("Failed to create directory {:?}: {}", dir, e))?;
        }
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration from disk, falling back to defaults when the
    /// file does not exist. The API key honors the `GEMINI_API_KEY`
    /// environment variable when the file leaves it empty.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
            })?;
            toml::from_str(&contents).map_err(|e| {
                anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
            })?
        } else {
            Config::default()
        };

        if config.api_key.trim().is_empty()
            && let Ok(key) = std::env::var("GEMINI_API_KEY")
        {
            config.api_key = key.trim().to_string();
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }
}
