//! Tests for the deck multiset model.

mod common;

use common::card;
use scrydeck::{Board, Deck, DeckSortMode};

// ---------------------------------------------------------------------------
// add_to_board
// ---------------------------------------------------------------------------

#[test]
fn adding_inserts_then_increments() {
    let mut deck = Deck::new("");
    let bolt = card("bolt", "Lightning Bolt");

    deck.add_to_board(Board::Main, &bolt, 1);
    assert_eq!(deck.main["bolt"].quantity, 1);

    deck.add_to_board(Board::Main, &bolt, 3);
    assert_eq!(deck.main["bolt"].quantity, 4);
    assert_eq!(deck.count(Board::Main), 4);
}

#[test]
fn boards_are_independent() {
    let mut deck = Deck::new("");
    let bolt = card("bolt", "Lightning Bolt");
    deck.add_to_board(Board::Main, &bolt, 2);
    deck.add_to_board(Board::Side, &bolt, 1);
    assert_eq!(deck.count(Board::Main), 2);
    assert_eq!(deck.count(Board::Side), 1);
}

#[test]
fn mutation_stamps_updated_at() {
    let mut deck = Deck::new("");
    let before = deck.updated_at.clone();
    std::thread::sleep(std::time::Duration::from_millis(5));
    deck.add_to_board(Board::Main, &card("bolt", "Lightning Bolt"), 1);
    assert_ne!(deck.updated_at, before);
}

// ---------------------------------------------------------------------------
// change_quantity
// ---------------------------------------------------------------------------

#[test]
fn underflow_deletes_the_entry() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("card-1", "Shock"), 3);

    let result = deck.change_quantity(Board::Main, "card-1", -5, false);
    assert_eq!(result, None);
    assert!(!deck.main.contains_key("card-1"));
}

#[test]
fn keep_at_zero_clamps_and_retains() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("card-1", "Shock"), 2);

    let result = deck.change_quantity(Board::Main, "card-1", -5, true);
    assert_eq!(result, Some(0));
    assert_eq!(deck.main["card-1"].quantity, 0);
}

#[test]
fn change_on_absent_entry_is_a_no_op() {
    let mut deck = Deck::new("");
    assert_eq!(deck.change_quantity(Board::Main, "ghost", 1, false), None);
    assert!(deck.main.is_empty());
}

#[test]
fn quantities_stay_positive_across_arbitrary_mutations() {
    let mut deck = Deck::new("");
    let a = card("a", "Shock");
    let b = card("b", "Bolt");

    deck.add_to_board(Board::Main, &a, 2);
    deck.add_to_board(Board::Side, &b, 1);
    deck.change_quantity(Board::Main, "a", -1, false);
    deck.move_card(Board::Side, Board::Main, "b");
    deck.change_quantity(Board::Main, "b", 3, false);
    deck.change_quantity(Board::Main, "a", -9, false);

    for entry in deck.main.values().chain(deck.side.values()) {
        assert!(entry.quantity > 0);
    }
}

// ---------------------------------------------------------------------------
// move_card
// ---------------------------------------------------------------------------

#[test]
fn move_transfers_the_entry() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("bolt", "Lightning Bolt"), 3);

    assert!(deck.move_card(Board::Main, Board::Side, "bolt"));
    assert!(!deck.main.contains_key("bolt"));
    assert_eq!(deck.side["bolt"].quantity, 3);
}

#[test]
fn move_merges_into_existing_destination_entry() {
    let mut deck = Deck::new("");
    let bolt = card("bolt", "Lightning Bolt");
    deck.add_to_board(Board::Main, &bolt, 2);
    deck.add_to_board(Board::Side, &bolt, 3);

    assert!(deck.move_card(Board::Main, Board::Side, "bolt"));
    assert!(!deck.main.contains_key("bolt"));
    assert_eq!(deck.side["bolt"].quantity, 5);
}

#[test]
fn move_to_same_board_is_a_no_op() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("bolt", "Lightning Bolt"), 2);
    assert!(!deck.move_card(Board::Main, Board::Main, "bolt"));
    assert_eq!(deck.main["bolt"].quantity, 2);
}

#[test]
fn zero_quantity_entries_do_not_move() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("bolt", "Lightning Bolt"), 1);
    deck.change_quantity(Board::Main, "bolt", -1, true);

    assert!(!deck.move_card(Board::Main, Board::Side, "bolt"));
    assert!(deck.main.contains_key("bolt"));
    assert!(!deck.side.contains_key("bolt"));
}

// ---------------------------------------------------------------------------
// cleanup / clear
// ---------------------------------------------------------------------------

#[test]
fn cleanup_drops_zero_entries_on_both_boards() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("a", "Shock"), 1);
    deck.add_to_board(Board::Side, &card("b", "Bolt"), 1);
    deck.change_quantity(Board::Main, "a", -1, true);
    deck.change_quantity(Board::Side, "b", -1, true);

    deck.cleanup_zeros();
    assert!(deck.main.is_empty());
    assert!(deck.side.is_empty());
}

#[test]
fn clear_boards_empties_everything() {
    let mut deck = Deck::new("");
    deck.add_to_board(Board::Main, &card("a", "Shock"), 4);
    deck.add_to_board(Board::Side, &card("b", "Bolt"), 2);

    deck.clear_boards();
    assert!(deck.main.is_empty());
    assert!(deck.side.is_empty());
}

// ---------------------------------------------------------------------------
// list_entries ordering
// ---------------------------------------------------------------------------

fn sample_deck() -> Deck {
    let mut deck = Deck::new("");

    let mut land = card("land", "Mountain");
    land.cmc = 0.0;
    land.type_rank = 0;
    land.sort_name = "Mountain".to_string();

    let mut creature = card("creature", "Goblin Guide");
    creature.cmc = 1.0;
    creature.type_rank = 1;
    creature.sort_name = "Goblin Guide".to_string();

    let mut spell = card("spell", "Lightning Bolt");
    spell.cmc = 1.0;
    spell.type_rank = 2;
    spell.sort_name = "Lightning Bolt".to_string();

    deck.add_to_board(Board::Main, &spell, 4);
    deck.add_to_board(Board::Main, &land, 20);
    deck.add_to_board(Board::Main, &creature, 4);
    deck
}

#[test]
fn name_mode_sorts_alphabetically() {
    let deck = sample_deck();
    let ids: Vec<&str> = deck
        .list_entries(Board::Main, DeckSortMode::Name)
        .iter()
        .map(|e| e.card.id.as_str())
        .collect();
    assert_eq!(ids, vec!["creature", "spell", "land"]);
}

#[test]
fn mana_value_mode_sorts_by_cost_then_name() {
    let deck = sample_deck();
    let ids: Vec<&str> = deck
        .list_entries(Board::Main, DeckSortMode::ManaValue)
        .iter()
        .map(|e| e.card.id.as_str())
        .collect();
    assert_eq!(ids, vec!["land", "creature", "spell"]);
}

#[test]
fn type_order_mode_puts_lands_before_creatures_before_spells() {
    let deck = sample_deck();
    let ids: Vec<&str> = deck
        .list_entries(Board::Main, DeckSortMode::TypeOrder)
        .iter()
        .map(|e| e.card.id.as_str())
        .collect();
    assert_eq!(ids, vec!["land", "creature", "spell"]);
}

#[test]
fn identical_semantic_keys_fall_back_to_id_order() {
    let mut deck = Deck::new("");
    let mut first = card("aaa", "Twin");
    first.sort_name = "Twin".to_string();
    let mut second = card("zzz", "Twin");
    second.sort_name = "Twin".to_string();
    deck.add_to_board(Board::Main, &second, 1);
    deck.add_to_board(Board::Main, &first, 1);

    let ids: Vec<&str> = deck
        .list_entries(Board::Main, DeckSortMode::Name)
        .iter()
        .map(|e| e.card.id.as_str())
        .collect();
    assert_eq!(ids, vec!["aaa", "zzz"]);
}
