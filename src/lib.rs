pub mod application;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod schema;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use application::order_store::OrderStore;
use config::{Config, StorageBackend};
use domain::errors::DomainError;
use domain::ports::SlotStorage;
use infrastructure::file_slot::FileSlotStorage;
use infrastructure::pg_slot::PgSlotStorage;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), DomainError> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Internal(format!("migrations failed: {}", e)))?;
    Ok(())
}

/// Opens the slot storage selected by `config`.
pub fn open_storage(config: &Config) -> Result<Box<dyn SlotStorage>, DomainError> {
    match &config.backend {
        StorageBackend::File { dir } => {
            info!("Using file slot storage in {}", dir.display());
            Ok(Box::new(FileSlotStorage::new(dir.clone())?))
        }
        StorageBackend::Postgres { database_url } => {
            info!("Using Postgres slot storage");
            let pool = create_pool(database_url)?;
            run_migrations(&pool)?;
            Ok(Box::new(PgSlotStorage::new(pool)))
        }
    }
}

/// Builds the one order store the dashboard works on.
pub fn open_store(config: &Config) -> Result<OrderStore<Box<dyn SlotStorage>>, DomainError> {
    OrderStore::open(open_storage(config)?, &config.storage_key)
}
