use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::{validate_slot_key, SlotStorage};

/// Stores each slot as `<dir>/<key>.json`.
///
/// Writes go to a uniquely named temp file that is renamed over the slot, and
/// are serialized through a mutex so two saves never interleave.
pub struct FileSlotStorage {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSlotStorage {
    /// Creates `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf, DomainError> {
        validate_slot_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStorage for FileSlotStorage {
    fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.slot_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // Invalid UTF-8 comes back lossily; the store rejects it as malformed.
        match String::from_utf8(bytes) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                warn!("Slot file {} is not valid UTF-8", path.display());
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.slot_path(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DomainError::Internal("slot write lock poisoned".into()))?;

        let tmp = self.dir.join(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
