pub mod backend;
pub mod decks;
pub mod favorites;
pub mod prefs;

pub use backend::{FileStorage, MemoryStorage, Storage};
pub use decks::{DeckStore, StoreData};
pub use favorites::{favorite_key, Favorites};
pub use prefs::ViewMode;
