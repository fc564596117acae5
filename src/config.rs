use std::path::PathBuf;
use std::time::Duration;

use crate::application::order_store::DEFAULT_STORAGE_KEY;
use crate::clock::TICK;
use crate::domain::ports::validate_slot_key;
use crate::errors::AppError;

/// Where the order slot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File { dir: PathBuf },
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_key: String,
    pub backend: StorageBackend,
    pub export_dir: PathBuf,
    pub clock_tick: Duration,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let storage_key = var("ORDER_STORE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        validate_slot_key(&storage_key)
            .map_err(|_| AppError::Config(format!("ORDER_STORE_KEY '{}' is not a plain name", storage_key)))?;

        let backend = match var("DATABASE_URL") {
            Some(database_url) => StorageBackend::Postgres { database_url },
            None => StorageBackend::File {
                dir: PathBuf::from(var("DATA_DIR").unwrap_or_else(|| ".bakso".to_string())),
            },
        };

        let export_dir = PathBuf::from(var("EXPORT_DIR").unwrap_or_else(|| ".".to_string()));

        let clock_tick = match var("CLOCK_TICK_MS") {
            Some(raw) => {
                let ms: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::Config(format!("CLOCK_TICK_MS must be a number, got '{}'", raw)))?;
                if ms == 0 {
                    return Err(AppError::Config("CLOCK_TICK_MS must be positive".into()));
                }
                Duration::from_millis(ms)
            }
            None => TICK,
        };

        Ok(Self {
            storage_key,
            backend,
            export_dir,
            clock_tick,
        })
    }
}
