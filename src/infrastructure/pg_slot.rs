use chrono::Utc;
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::SlotStorage;
use crate::schema::storage_slots;

use super::models::{NewSlotRow, SlotRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Storage ───────────────────────────────────────────────────────────────────

/// Slots kept as JSONB rows of the `storage_slots` table.
pub struct PgSlotStorage {
    pool: DbPool,
}

impl PgSlotStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SlotStorage for PgSlotStorage {
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = storage_slots::table
            .filter(storage_slots::key.eq(key))
            .select(SlotRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(|r| r.value.to_string()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        // JSONB only accepts documents; reject anything else before the round trip.
        let value: serde_json::Value = serde_json::from_str(value)?;
        let mut conn = self.pool.get()?;

        // Single upsert, so concurrent saves of one key cannot interleave.
        diesel::insert_into(storage_slots::table)
            .values(&NewSlotRow {
                key: key.to_string(),
                value,
                updated_at: Utc::now(),
            })
            .on_conflict(storage_slots::key)
            .do_update()
            .set((
                storage_slots::value.eq(excluded(storage_slots::value)),
                storage_slots::updated_at.eq(excluded(storage_slots::updated_at)),
            ))
            .execute(&mut conn)?;

        Ok(())
    }
}
