//! Durable key-value storage for the event collection.
//!
//! One string value per key, read once at session start and overwritten
//! wholesale on every mutation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{CalendarError, CalendarResult};

/// The single key under which the event collection is stored.
pub const EVENTS_KEY: &str = "calendar-events";

pub trait KeyValueStorage {
    /// Read a key's value; `None` when the key has never been written.
    fn read(&self, key: &str) -> CalendarResult<Option<String>>;

    /// Overwrite a key's value.
    fn write(&self, key: &str, value: &str) -> CalendarResult<()>;
}

/// File-backed storage: one `<key>.json` file per key under a data
/// directory. Writes go through a temp file and rename.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// The platform data directory for fruitcal.
    pub fn default_dir() -> CalendarResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("fruitcal"))
            .ok_or_else(|| {
                CalendarError::Storage("No data directory available on this platform".to_string())
            })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> CalendarResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> CalendarResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions. Clones share the
/// same underlying map, so a handle kept outside a session observes its
/// writes.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> CalendarResult<Option<String>> {
        let entries = self.entries.lock().expect("storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> CalendarResult<()> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
