//! Card search and deck-building toolkit backed by the Scryfall API.
//!
//! Resolves free-text input -- including Japanese names with embedded
//! furigana annotations -- into ranked, de-duplicated card prints, and
//! maintains a two-board deck with named persistence across legacy storage
//! schema versions.
//!
//! # Quick start
//!
//! ```no_run
//! use scrydeck::{Board, Scrydeck, SearchOptions};
//!
//! let mut app = Scrydeck::builder().build().unwrap();
//!
//! let outcome = app.search("稲妻", &SearchOptions {
//!     prefer_japanese: true,
//!     collapse_same_printing: true,
//!     ..Default::default()
//! });
//!
//! if let Some(card) = outcome.cards.first().cloned() {
//!     app.add_to_board(Board::Main, &card, 4);
//!     app.save_current_deck("Mono Red").unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod search;
pub mod state;
pub mod store;

pub use error::{Result, ScrydeckError};
pub use models::{Board, CardPrint, Deck, DeckEntry, DeckSortMode};
pub use query::QueryClass;
pub use search::{
    Resolver, ScryfallClient, SearchClient, SearchOptions, SearchOutcome, SearchStatus, SortOrder,
};
pub use state::{AppState, OpenCard};
pub use store::{DeckStore, Favorites, FileStorage, MemoryStorage, Storage, ViewMode};

use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ScrydeckBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Scrydeck`] instance.
pub struct ScrydeckBuilder {
    storage_dir: Option<PathBuf>,
    storage: Option<Box<dyn Storage>>,
    client: Option<Box<dyn SearchClient>>,
    timeout: Duration,
}

impl Default for ScrydeckBuilder {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage: None,
            client: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ScrydeckBuilder {
    /// Set a custom storage directory for the file-backed store.
    ///
    /// If not set, the platform data directory is used (e.g.
    /// `~/.local/share/scrydeck` on Linux).
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the storage backend entirely (e.g. [`MemoryStorage`] for an
    /// unsaved session). Takes precedence over [`storage_dir`](Self::storage_dir).
    pub fn storage(mut self, storage: Box<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Replace the search collaborator (used by tests, or to wrap the
    /// default client with caching).
    pub fn client(mut self, client: Box<dyn SearchClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the HTTP request timeout for collaborator calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the application, opening the storage backend.
    pub fn build(self) -> Result<Scrydeck> {
        let storage: Box<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None => {
                let dir = self.storage_dir.unwrap_or_else(config::default_storage_dir);
                Box::new(FileStorage::new(dir)?)
            }
        };
        let client: Box<dyn SearchClient> = self
            .client
            .unwrap_or_else(|| Box::new(ScryfallClient::new(self.timeout)));

        Ok(Scrydeck {
            client,
            storage,
            state: AppState::default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Scrydeck
// ---------------------------------------------------------------------------

/// The top-level application controller.
///
/// Owns the search collaborator, the storage backend and the session
/// [`AppState`]; a presentation layer calls these methods and renders the
/// state -- no DOM or event types cross this boundary.
pub struct Scrydeck {
    client: Box<dyn SearchClient>,
    storage: Box<dyn Storage>,
    state: AppState,
}

impl Scrydeck {
    /// Create a new builder for configuring the application.
    pub fn builder() -> ScrydeckBuilder {
        ScrydeckBuilder::default()
    }

    /// Current session state, for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    // -- Store accessors ---------------------------------------------------

    /// Access the deck store interface.
    pub fn decks(&mut self) -> DeckStore<'_> {
        DeckStore::new(self.storage.as_mut())
    }

    /// Access the favorites interface.
    pub fn favorites(&mut self) -> Favorites<'_> {
        Favorites::new(self.storage.as_mut())
    }

    // -- Search ------------------------------------------------------------

    /// Resolve a search and stash the ranked results in the session state.
    ///
    /// In favorites-only mode the collaborator is never called; the saved
    /// favorites are filtered by the query text instead.
    pub fn search(&mut self, text: &str, options: &SearchOptions) -> SearchOutcome {
        if self.favorites_only() {
            let cards = self.favorites().filter_by_query(text);
            let outcome = SearchOutcome {
                status: SearchStatus::Favorites(cards.len()),
                cards,
            };
            self.state.results = outcome.cards.clone();
            return outcome;
        }

        let outcome = Resolver::new(self.client.as_ref()).resolve(text, options);
        self.state.results = outcome.cards.clone();
        outcome
    }

    /// Clear the result list.
    pub fn clear_results(&mut self) {
        self.state.results.clear();
    }

    // -- Deck mutation -----------------------------------------------------

    /// Add copies of a print to a board of the working deck.
    pub fn add_to_board(&mut self, board: Board, card: &CardPrint, delta: u32) {
        self.state.deck.add_to_board(board, card, delta);
    }

    /// Adjust an entry's quantity.
    ///
    /// While the entry is open in an editing context it is kept at zero
    /// instead of removed, so the context never loses its referent; the
    /// cleanup happens in [`close_card`](Self::close_card).
    pub fn change_quantity(&mut self, board: Board, id: &str, delta: i64) -> Option<u32> {
        let keep_at_zero = self
            .state
            .open_card
            .as_ref()
            .map(|open| open.board == board && open.id == id)
            .unwrap_or(false);
        self.state.deck.change_quantity(board, id, delta, keep_at_zero)
    }

    /// Move a print between boards. An open editing context referencing the
    /// print follows it to the destination board.
    pub fn move_card(&mut self, from: Board, to: Board, id: &str) -> bool {
        let moved = self.state.deck.move_card(from, to, id);
        if moved {
            if let Some(open) = self.state.open_card.as_mut() {
                if open.id == id {
                    open.board = to;
                }
            }
        }
        moved
    }

    /// Open an entry in an editing context.
    pub fn open_card(&mut self, board: Board, id: &str) {
        self.state.open_card = Some(OpenCard {
            board,
            id: id.to_string(),
        });
    }

    /// Close the editing context and drop any entries left at zero.
    pub fn close_card(&mut self) {
        self.state.open_card = None;
        self.state.deck.cleanup_zeros();
    }

    /// Empty both boards; the working deck becomes unsaved.
    pub fn clear_boards(&mut self) {
        self.state.deck.clear_boards();
        self.state.deck.name.clear();
        self.state.current_deck_name.clear();
    }

    /// Replace the working deck with a fresh unsaved one.
    pub fn new_deck(&mut self) {
        self.state.deck = Deck::new("");
        self.state.current_deck_name.clear();
        self.state.open_card = None;
    }

    // -- Deck persistence --------------------------------------------------

    /// Save the working deck under `name`.
    pub fn save_current_deck(&mut self, name: &str) -> Result<()> {
        let deck = self.state.deck.clone();
        self.decks().save_deck(name, &deck)?;
        let name = name.trim().to_string();
        self.state.deck.name = name.clone();
        self.state.current_deck_name = name;
        Ok(())
    }

    /// Load a saved deck into the session.
    pub fn load_deck(&mut self, name: &str) -> Result<()> {
        let deck = self.decks().load_deck(name)?;
        self.state.deck = deck;
        self.state.current_deck_name = name.to_string();
        self.state.open_card = None;
        Ok(())
    }

    /// Delete a saved deck. Deleting the deck the session came from resets
    /// the working deck to a fresh unsaved one.
    pub fn delete_deck(&mut self, name: &str) -> Result<()> {
        self.decks().delete_deck(name)?;
        if self.state.current_deck_name == name {
            self.new_deck();
        }
        Ok(())
    }

    /// Saved deck names, sorted.
    pub fn deck_names(&mut self) -> Vec<String> {
        self.decks().deck_names()
    }

    // -- Preferences -------------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        store::prefs::load_view_mode(self.storage.as_ref())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<()> {
        store::prefs::save_view_mode(self.storage.as_mut(), mode)
    }

    pub fn favorites_only(&self) -> bool {
        store::prefs::load_favorites_only(self.storage.as_ref())
    }

    pub fn set_favorites_only(&mut self, on: bool) -> Result<()> {
        store::prefs::save_favorites_only(self.storage.as_mut(), on)
    }

    /// Toggle a card's favorite slot. Returns `true` when the card is a
    /// favorite afterwards.
    pub fn toggle_favorite(&mut self, card: &CardPrint) -> Result<bool> {
        self.favorites().toggle(card)
    }

    // -- Display helpers ---------------------------------------------------

    /// Board entries of the working deck in display order.
    pub fn list_entries(&self, board: Board, mode: DeckSortMode) -> Vec<&DeckEntry> {
        self.state.deck.list_entries(board, mode)
    }

    /// Total copies on a board of the working deck.
    pub fn board_count(&self, board: Board) -> u32 {
        self.state.deck.count(board)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl std::fmt::Display for Scrydeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scrydeck(deck={}, main={}, side={}, results={})",
            if self.state.current_deck_name.is_empty() {
                "<unsaved>"
            } else {
                &self.state.current_deck_name
            },
            self.state.deck.count(Board::Main),
            self.state.deck.count(Board::Side),
            self.state.results.len()
        )
    }
}
