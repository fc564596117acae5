use super::errors::DomainError;

/// A durable key-value slot holding one serialized document per key.
pub trait SlotStorage: Send + Sync + 'static {
    /// Returns the stored document, or `None` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, DomainError>;
    /// Replaces the document stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Slot keys double as file names: ASCII letters, digits, `-`, `_` and `.`,
/// never starting with `.`.
pub fn validate_slot_key(key: &str) -> Result<(), DomainError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!("invalid slot key '{}'", key)))
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        (**self).save(key, value)
    }
}
