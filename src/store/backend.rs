//! Key/value storage boundary.
//!
//! Persistence is a handful of named string slots, mirroring the web
//! storage the original data formats grew up in. [`FileStorage`] keeps one
//! file per key under a directory; [`MemoryStorage`] backs tests and
//! throwaway sessions.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// A named string slot per key. Writes are atomic from the caller's
/// perspective: a `get` after `set` returns the full new value or, on
/// failure, the old one.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// File-per-key storage under a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if missing) a storage directory.
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let dest = self.path_for(key);
        // Write via temp file and rename so a crash never leaves a
        // truncated slot behind.
        let tmp = dest.with_extension("json.tmp");
        let result = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &dest));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let dest = self.path_for(key);
        if dest.exists() {
            fs::remove_file(dest)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory storage for tests and unsaved sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
