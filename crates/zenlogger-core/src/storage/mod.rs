mod config;
pub mod memory;
pub mod migrations;
pub mod sessions;
pub mod settings;
pub mod sqlite;
mod store;

pub use config::{AlertsConfig, Config, LoggingConfig, StorageConfig, TimerConfig};
pub use memory::MemoryStore;
pub use sessions::{Session, SessionRepository, SESSIONS_KEY};
pub use settings::{DefaultView, Settings, SettingsRepository, Theme, SETTING_PREFIX, SOUND_OPTIONS};
pub use sqlite::SqliteStore;
pub use store::KeyValueStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/zenlogger[-dev]/` based on ZENLOGGER_ENV.
///
/// Set ZENLOGGER_ENV=dev to use development data directory.
/// ZENLOGGER_DATA_DIR overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ZENLOGGER_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ZENLOGGER_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("zenlogger-dev")
            } else {
                base_dir.join("zenlogger")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
