use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

use crate::schema::storage_slots;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = storage_slots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SlotRow {
    pub key: String,
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = storage_slots)]
pub struct NewSlotRow {
    pub key: String,
    pub value: Value,
    pub updated_at: DateTime<Utc>,
}
