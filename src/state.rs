//! Explicit application state.
//!
//! Everything the presentation layer renders lives here, owned by the
//! top-level [`Scrydeck`](crate::Scrydeck) controller and passed by
//! reference, never as ambient globals.

use crate::models::card::CardPrint;
use crate::models::deck::{Board, Deck};

/// The deck entry currently open in an editing context. While set, that
/// entry may sit at quantity zero without being removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCard {
    pub board: Board,
    pub id: String,
}

/// Mutable session state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The last resolved, ranked result list.
    pub results: Vec<CardPrint>,
    /// The working deck.
    pub deck: Deck,
    /// Name of the saved deck the working deck came from; empty while
    /// unsaved.
    pub current_deck_name: String,
    /// Entry open in an editing context, if any.
    pub open_card: Option<OpenCard>,
}
