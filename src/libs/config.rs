//! Configuration management for the tudu application.
//!
//! Settings are stored as JSON in the platform application-data directory
//! (see [`DataStorage`]). The only setting today is an optional override of
//! the directory holding the task database, set either by editing the file
//! or through the interactive `tudu init` wizard.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Directory holding the task database. Defaults to the platform
    /// application-data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigReadError(config_path.display().to_string())))?;
        serde_json::from_str(&raw).map_err(|_| msg_error_anyhow!(Message::ConfigParseError(config_path.display().to_string())))
    }

    /// Writes the configuration to disk, creating the data directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// Prompts for each setting with the current value as the default. An
    /// empty data directory resets the setting to the platform default.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();

        let data_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataDir.to_string())
            .default(current.data_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let data_dir = if data_dir.trim().is_empty() { None } else { Some(PathBuf::from(data_dir.trim())) };

        Ok(Config { data_dir })
    }
}
