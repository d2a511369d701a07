//! Versioned deck store with read-repair migration.
//!
//! Deck snapshots have lived under several storage keys over time. `load`
//! scans the key chain newest-first, takes the first payload that parses
//! with a `decks` mapping, and immediately rewrites it under the canonical
//! key so the next load short-circuits. Corrupt or mis-shaped payloads are
//! skipped, never fatal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{STORE_KEY, STORE_KEYS, STORE_VERSION};
use crate::error::{Result, ScrydeckError};
use crate::models::deck::Deck;
use crate::store::backend::Storage;

/// The persisted payload: schema version plus decks by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub decks: BTreeMap<String, Deck>,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            decks: BTreeMap::new(),
        }
    }
}

/// Deck persistence interface, borrowing the application's storage.
pub struct DeckStore<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> DeckStore<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    /// Load the store, migrating from legacy keys on the way.
    pub fn load(&mut self) -> StoreData {
        for key in STORE_KEYS {
            let Some(raw) = self.storage.get(key) else {
                continue;
            };
            let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
                log::debug!("skipping unparseable deck store under {:?}", key);
                continue;
            };
            if !value.get("decks").map(|d| d.is_object()).unwrap_or(false) {
                continue;
            }
            let Ok(data) = serde_json::from_value::<StoreData>(value) else {
                continue;
            };
            if key != STORE_KEY {
                // Read-repair: promote the legacy payload to the canonical
                // key as-is.
                log::debug!("migrating deck store {:?} -> {:?}", key, STORE_KEY);
                if let Err(e) = self.storage.set(STORE_KEY, &raw) {
                    log::warn!("deck store migration write failed: {}", e);
                }
            }
            return data;
        }
        StoreData::default()
    }

    /// Persist the store under the canonical key.
    pub fn save(&mut self, data: &StoreData) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        self.storage.set(STORE_KEY, &raw)
    }

    /// Snapshot `deck` under `name`, overwriting any same-named deck.
    ///
    /// The name must be non-empty after trimming. The stored copy gets the
    /// trimmed name and a fresh timestamp; the caller's deck is untouched.
    pub fn save_deck(&mut self, name: &str, deck: &Deck) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScrydeckError::InvalidArgument(
                "deck name must not be empty".to_string(),
            ));
        }

        let mut data = self.load();
        let mut snapshot = deck.clone();
        snapshot.name = name.to_string();
        snapshot.updated_at = chrono::Utc::now().to_rfc3339();
        data.decks.insert(name.to_string(), snapshot);
        self.save(&data)
    }

    /// Load a deck by name.
    pub fn load_deck(&mut self, name: &str) -> Result<Deck> {
        let data = self.load();
        data.decks
            .get(name)
            .cloned()
            .ok_or_else(|| ScrydeckError::NotFound(format!("deck '{}'", name)))
    }

    /// Delete a deck by name.
    pub fn delete_deck(&mut self, name: &str) -> Result<()> {
        let mut data = self.load();
        if data.decks.remove(name).is_none() {
            return Err(ScrydeckError::NotFound(format!("deck '{}'", name)));
        }
        self.save(&data)
    }

    /// Saved deck names, sorted.
    pub fn deck_names(&mut self) -> Vec<String> {
        self.load().decks.keys().cloned().collect()
    }
}
