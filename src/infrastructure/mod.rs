pub mod file_slot;
pub mod memory_slot;
pub mod models;
pub mod pg_slot;
