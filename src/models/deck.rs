//! Deck model: two board multisets keyed by print id.
//!
//! Quantities stay strictly positive while an entry is present, with one
//! exception: an entry referenced by an open editing context may sit at
//! exactly zero (`keep_at_zero`) until [`Deck::cleanup_zeros`] runs when
//! that context closes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::card::CardPrint;

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// One of the two deck partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    Main,
    Side,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Main => write!(f, "main"),
            Board::Side => write!(f, "side"),
        }
    }
}

// ---------------------------------------------------------------------------
// DeckEntry
// ---------------------------------------------------------------------------

/// A card print plus its copy count on one board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckEntry {
    #[serde(flatten)]
    pub card: CardPrint,
    #[serde(rename = "qty", default)]
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// DeckSortMode
// ---------------------------------------------------------------------------

/// Display ordering for board listings.
///
/// Each mode sorts by its primary key, then the remaining keys in the fixed
/// order name, mana value, type order, and finally the print id so two
/// entries never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckSortMode {
    #[default]
    Name,
    ManaValue,
    TypeOrder,
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// A named deck with main and side boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    #[serde(default)]
    pub main: BTreeMap<String, DeckEntry>,
    #[serde(default)]
    pub side: BTreeMap<String, DeckEntry>,
}

impl Deck {
    /// Create an empty deck stamped with the current time.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            updated_at: now(),
            main: BTreeMap::new(),
            side: BTreeMap::new(),
        }
    }

    pub fn board(&self, board: Board) -> &BTreeMap<String, DeckEntry> {
        match board {
            Board::Main => &self.main,
            Board::Side => &self.side,
        }
    }

    pub fn board_mut(&mut self, board: Board) -> &mut BTreeMap<String, DeckEntry> {
        match board {
            Board::Main => &mut self.main,
            Board::Side => &mut self.side,
        }
    }

    /// Total copies on a board.
    pub fn count(&self, board: Board) -> u32 {
        self.board(board).values().map(|e| e.quantity).sum()
    }

    /// Add `delta` copies of a print to a board, inserting the entry if the
    /// print is not there yet.
    pub fn add_to_board(&mut self, board: Board, card: &CardPrint, delta: u32) {
        let entries = self.board_mut(board);
        match entries.get_mut(&card.id) {
            Some(entry) => entry.quantity += delta,
            None => {
                entries.insert(
                    card.id.clone(),
                    DeckEntry {
                        card: card.clone(),
                        quantity: delta,
                    },
                );
            }
        }
        self.touch();
    }

    /// Adjust an entry's quantity by `delta`.
    ///
    /// A result at or below zero removes the entry, unless `keep_at_zero`
    /// is set (an editing context still references it), in which case the
    /// quantity clamps to exactly zero and the entry stays.
    ///
    /// Returns the new quantity, or `None` if the entry was absent or
    /// removed.
    pub fn change_quantity(
        &mut self,
        board: Board,
        id: &str,
        delta: i64,
        keep_at_zero: bool,
    ) -> Option<u32> {
        let entries = self.board_mut(board);
        let entry = entries.get_mut(id)?;

        let next = i64::from(entry.quantity) + delta;
        let result = if next <= 0 {
            if keep_at_zero {
                entry.quantity = 0;
                Some(0)
            } else {
                entries.remove(id);
                None
            }
        } else {
            entry.quantity = next as u32;
            Some(entry.quantity)
        };

        self.touch();
        result
    }

    /// Move a print between boards, merging quantities when the destination
    /// already holds it.
    ///
    /// No-op when source and destination are the same board, the source has
    /// no such entry, or the entry sits at zero. The print id never exists
    /// on both boards afterwards. Returns `true` if anything moved.
    pub fn move_card(&mut self, from: Board, to: Board, id: &str) -> bool {
        if from == to {
            return false;
        }
        let Some(entry) = self.board_mut(from).remove(id) else {
            return false;
        };
        if entry.quantity == 0 {
            self.board_mut(from).insert(id.to_string(), entry);
            return false;
        }

        match self.board_mut(to).get_mut(id) {
            Some(existing) => existing.quantity += entry.quantity,
            None => {
                self.board_mut(to).insert(id.to_string(), entry);
            }
        }
        self.touch();
        true
    }

    /// Drop every zero-quantity entry from both boards.
    ///
    /// Invoked when the editing context that protected such entries closes.
    pub fn cleanup_zeros(&mut self) {
        self.main.retain(|_, e| e.quantity > 0);
        self.side.retain(|_, e| e.quantity > 0);
    }

    /// Empty both boards.
    pub fn clear_boards(&mut self) {
        self.main.clear();
        self.side.clear();
        self.touch();
    }

    /// Board entries in display order for the given sort mode.
    pub fn list_entries(&self, board: Board, mode: DeckSortMode) -> Vec<&DeckEntry> {
        let mut entries: Vec<&DeckEntry> = self.board(board).values().collect();
        entries.sort_by(|a, b| compare_entries(a, b, mode));
        entries
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new("")
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Entry comparator: primary mode key, the remaining keys in the fixed
/// order name / mana value / type order, then print id as the total-order
/// fallback.
fn compare_entries(a: &DeckEntry, b: &DeckEntry, mode: DeckSortMode) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    let by_name = |a: &DeckEntry, b: &DeckEntry| a.card.sort_name.cmp(&b.card.sort_name);
    let by_cmc = |a: &DeckEntry, b: &DeckEntry| {
        a.card
            .cmc
            .partial_cmp(&b.card.cmc)
            .unwrap_or(Ordering::Equal)
    };
    let by_type = |a: &DeckEntry, b: &DeckEntry| a.card.type_rank.cmp(&b.card.type_rank);

    let chain: [&dyn Fn(&DeckEntry, &DeckEntry) -> Ordering; 3] = match mode {
        DeckSortMode::Name => [&by_name, &by_cmc, &by_type],
        DeckSortMode::ManaValue => [&by_cmc, &by_name, &by_type],
        DeckSortMode::TypeOrder => [&by_type, &by_name, &by_cmc],
    };

    for cmp in chain {
        let ord = cmp(a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.card.id.cmp(&b.card.id)
}
