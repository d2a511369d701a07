//! Single-token user preference slots.

use crate::config::{FAVORITES_ONLY_KEY, SEARCH_VIEW_KEY};
use crate::error::Result;
use crate::store::backend::Storage;

/// Result list presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Anything other than the list token normalizes to grid.
    pub fn parse(token: &str) -> Self {
        if token == "list" {
            ViewMode::List
        } else {
            ViewMode::Grid
        }
    }
}

pub fn load_view_mode(storage: &dyn Storage) -> ViewMode {
    storage
        .get(SEARCH_VIEW_KEY)
        .map(|t| ViewMode::parse(&t))
        .unwrap_or_default()
}

pub fn save_view_mode(storage: &mut dyn Storage, mode: ViewMode) -> Result<()> {
    storage.set(SEARCH_VIEW_KEY, mode.as_str())
}

pub fn load_favorites_only(storage: &dyn Storage) -> bool {
    storage
        .get(FAVORITES_ONLY_KEY)
        .map(|t| t == "1")
        .unwrap_or(false)
}

pub fn save_favorites_only(storage: &mut dyn Storage, on: bool) -> Result<()> {
    storage.set(FAVORITES_ONLY_KEY, if on { "1" } else { "0" })
}
