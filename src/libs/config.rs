//! Application configuration management.
//!
//! Settings are stored as JSON in the platform application data
//! directory and loaded on every run. A missing file is not an error;
//! the application falls back to defaults so it works with zero setup.
//!
//! The only setting today is an optional override for the database file
//! location. The resolved path is handed explicitly to the task store at
//! construction; nothing in the crate reads connection state globally.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tasq\config.json`
//! - **macOS**: `~/Library/Application Support/tasq/config.json`
//! - **Linux**: `~/.local/share/tasq/config.json`

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the default database file location when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard and returns the updated
    /// configuration. The caller is responsible for saving it.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;

        msg_print!(Message::ConfigInitHeader, true);

        let default_path = match &current.db_path {
            Some(path) => path.display().to_string(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?.display().to_string(),
        };

        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(default_path.clone())
            .interact_text()?;

        let db_path = if db_path == default_path && current.db_path.is_none() {
            // Keep the default implicit so the file stays portable.
            None
        } else {
            Some(PathBuf::from(db_path))
        };

        Ok(Config { db_path })
    }

    /// Resolves the database file path: the configured override if set,
    /// otherwise the platform data directory.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
