//! Saved-card favorites, independent of deck boards.

use std::collections::BTreeMap;

use crate::config::FAVORITES_KEY;
use crate::error::Result;
use crate::models::card::CardPrint;
use crate::store::backend::Storage;

/// Favorite key: oracle identity when present, else the print id, so every
/// printing of a card shares one favorite slot.
pub fn favorite_key(card: &CardPrint) -> &str {
    match card.oracle_id.as_deref() {
        Some(oracle) if !oracle.is_empty() => oracle,
        _ => &card.id,
    }
}

/// Keyed set of saved card snapshots, borrowing the application's storage.
pub struct Favorites<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> Favorites<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    /// Load the favorites map; anything unparseable reads as empty.
    pub fn all(&self) -> BTreeMap<String, CardPrint> {
        self.storage
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn is_favorite(&self, card: &CardPrint) -> bool {
        self.all().contains_key(favorite_key(card))
    }

    /// Toggle a card's favorite slot. Returns `true` when the card is a
    /// favorite afterwards.
    pub fn toggle(&mut self, card: &CardPrint) -> Result<bool> {
        let mut favorites = self.all();
        let key = favorite_key(card).to_string();
        let now_favorite = if favorites.remove(&key).is_none() {
            favorites.insert(key, card.clone());
            true
        } else {
            false
        };
        let raw = serde_json::to_string(&favorites)?;
        self.storage.set(FAVORITES_KEY, &raw)?;
        Ok(now_favorite)
    }

    /// Favorites whose display or canonical name contains the query,
    /// case-insensitively. An empty query returns everything.
    pub fn filter_by_query(&self, query: &str) -> Vec<CardPrint> {
        let needle = query.trim().to_lowercase();
        self.all()
            .into_values()
            .filter(|card| {
                needle.is_empty()
                    || card.name.to_lowercase().contains(&needle)
                    || card.en_name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
