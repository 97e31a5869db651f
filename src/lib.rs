pub mod classifier;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod journal;
pub mod models;
pub mod report;
pub mod validation;
#[cfg(test)]
mod test_utils;

use crate::config::EmotionConfig;
use crate::db::{migrations, Database};
use crate::error::AppError;
use crate::journal::Journal;
use directories::ProjectDirs;
use log::info;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Filesystem locations for the journal's persistent state.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub db_file: PathBuf,
    pub config_file: PathBuf,
    pub reports_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the platform data directory, creating it if needed.
    pub fn resolve() -> Result<Self, AppError> {
        let proj_dirs = ProjectDirs::from("com", "moodlog", "Moodlog")
            .ok_or_else(|| AppError::Internal("Could not determine project directories".into()))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(Self {
            db_file: data_dir.join("moodlog.db"),
            config_file: data_dir.join("config.json"),
            reports_dir: data_dir.join("daily_reports"),
        })
    }
}

/// Open the journal in the platform data directory: open the
/// database, apply migrations, and load the emotion configuration
/// (falling back to the built-in table when no config file exists).
pub fn open_default() -> Result<Journal, AppError> {
    let paths = AppPaths::resolve()?;

    let db = Database::open(&paths.db_file)?;
    migrations::run(db.connection())?;
    info!("Opened journal database at {}", paths.db_file.display());

    let config = EmotionConfig::load_or_builtin(&paths.config_file)?;

    Journal::new(Arc::new(Mutex::new(db)), config, &paths.reports_dir)
}
