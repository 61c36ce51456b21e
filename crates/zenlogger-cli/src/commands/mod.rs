pub mod backup;
pub mod config;
pub mod sessions;
pub mod settings;
pub mod stats;
pub mod timer;

use std::sync::Arc;

use zenlogger_core::{Config, SqliteStore};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the configured database file.
pub fn open_store(config: &Config) -> Result<Arc<SqliteStore>, Box<dyn std::error::Error>> {
    let path = config.database_path()?;
    Ok(Arc::new(SqliteStore::open(path)?))
}
