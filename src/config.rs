use std::path::PathBuf;

pub const API_BASE: &str = "https://api.scryfall.com";
pub const SEARCH_URL: &str = "https://api.scryfall.com/cards/search";

/// Deck store keys, newest schema first. `load` scans these in order and
/// rewrites whatever it finds under the first (canonical) key.
pub const STORE_KEYS: [&str; 5] = [
    "mtg_deck_store_tabs_v2",
    "mtg_deck_store_v2",
    "mtg_deck_store_v1",
    "mtg_deck_store",
    "mtg_deck_store_v0",
];

pub const STORE_KEY: &str = STORE_KEYS[0];

pub const FAVORITES_KEY: &str = "mtg_favorites_v1";
pub const FAVORITES_ONLY_KEY: &str = "mtg_favorites_only";
pub const SEARCH_VIEW_KEY: &str = "mtg_search_view";

/// Current deck store schema version, written on every save and filled in
/// when a legacy payload omits it.
pub const STORE_VERSION: u32 = 2;

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("scrydeck")
    } else {
        PathBuf::from(".scrydeck")
    }
}
