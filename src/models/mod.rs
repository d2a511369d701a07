pub mod card;
pub mod deck;
pub mod raw;

pub use card::{strip_furigana, type_order_rank, CardPrint, TYPE_ORDER};
pub use deck::{Board, Deck, DeckEntry, DeckSortMode};
pub use raw::RawPrint;
