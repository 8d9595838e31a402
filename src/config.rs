//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Get the path to the SavvySpend config file, typically located at ~/.savvyspend/config.json.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Saved backend base URL, if the user chose one.
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    /// Create Config with the given API base URL.
    pub fn new(api_url: Option<String>) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// The environment saved in this config, if any.
    ///
    /// # Errors
    /// Returns a message if the saved URL is not a valid environment.
    pub fn environment(&self) -> Result<Option<Environment>, String> {
        self.api_url
            .as_deref()
            .map(str::parse::<Environment>)
            .transpose()
    }
}

/// Resolves the backend to use: an explicit URL wins, then the saved config,
/// then the local default.
pub fn resolve_environment(
    explicit: Option<&str>,
    config_path: &Path,
) -> Result<Environment, String> {
    if let Some(url) = explicit {
        return url.parse();
    }
    if config_path.exists() {
        let config = Config::load_from_file(config_path)
            .map_err(|e| format!("Failed to load config: {}", e))?;
        if let Some(environment) = config.environment()? {
            return Ok(environment);
        }
    }
    Ok(Environment::default())
}
