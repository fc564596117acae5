use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::errors::DomainError;
use crate::domain::ports::SlotStorage;

/// Slot storage kept in process memory. Clones share the same slots, so a
/// test can hand one clone to the store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }

    fn lock_err<T>(_: T) -> DomainError {
        DomainError::Internal("memory slot lock poisoned".into())
    }
}

impl SlotStorage for MemorySlotStorage {
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let slots = self.slots.lock().map_err(Self::lock_err)?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut slots = self.slots.lock().map_err(Self::lock_err)?;
        slots.insert(key.to_string(), value.to_string());
        *self.writes.lock().map_err(Self::lock_err)? += 1;
        Ok(())
    }
}
