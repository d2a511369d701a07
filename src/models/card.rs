//! Normalized card print model.
//!
//! Raw collaborator records are converted eagerly at the boundary into
//! [`CardPrint`], the shape every downstream component (ranking, deck,
//! favorites, persistence) works with. `sort_name` and `type_order_rank`
//! are derived once here and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::models::raw::RawPrint;

/// Card type priority used for deck ordering. Types not listed rank after
/// all of these.
pub const TYPE_ORDER: [&str; 7] = [
    "Land",
    "Creature",
    "Instant",
    "Sorcery",
    "Artifact",
    "Enchantment",
    "Planeswalker",
];

/// One normalized card print.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPrint {
    pub id: String,
    #[serde(default)]
    pub oracle_id: Option<String>,
    /// Localized name when the printing has one, else the canonical name.
    #[serde(default)]
    pub name: String,
    /// Canonical (English) name, kept for favorites filtering.
    #[serde(default)]
    pub en_name: String,
    /// `name` with parenthetical furigana stripped, for stable ordering.
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub collector: String,
    #[serde(default)]
    pub released_at: String,
    #[serde(default)]
    pub scryfall_uri: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cmc: f64,
    /// Localized type line when the printing has one.
    #[serde(default)]
    pub type_line: String,
    /// Index into [`TYPE_ORDER`] (or its length when unranked), derived from
    /// the canonical type line.
    #[serde(default = "unranked")]
    pub type_rank: usize,
}

fn unranked() -> usize {
    TYPE_ORDER.len()
}

impl CardPrint {
    /// Normalize a raw collaborator record.
    pub fn from_raw(raw: &RawPrint) -> Self {
        let name = raw.display_name().to_string();
        Self {
            id: raw.id.clone(),
            oracle_id: raw.oracle_id.clone(),
            sort_name: strip_furigana(&name),
            name,
            en_name: raw.name.clone(),
            lang: raw.lang.clone(),
            set: raw.set.to_uppercase(),
            collector: raw.collector_number.clone(),
            released_at: raw.released_at.clone(),
            scryfall_uri: raw.scryfall_uri.clone(),
            image: raw.image().unwrap_or_default().to_string(),
            cmc: raw.cmc.unwrap_or(0.0).max(0.0),
            type_line: raw.display_type().to_string(),
            // Printed type lines are localized; rank off the canonical one.
            type_rank: type_order_rank(&raw.type_line),
        }
    }
}

/// Rank a canonical type line against [`TYPE_ORDER`].
///
/// The first priority type appearing in the line wins; a line matching none
/// gets the trailing unranked value.
pub fn type_order_rank(type_line: &str) -> usize {
    TYPE_ORDER
        .iter()
        .position(|t| type_line.contains(t))
        .unwrap_or(TYPE_ORDER.len())
}

/// Remove parenthetical furigana annotations from a printed name.
///
/// Japanese printings embed readings as `漢字（かんじ）`; both fullwidth and
/// ASCII parentheses occur in the wild. Groups never nest.
pub fn strip_furigana(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for ch in name.chars() {
        match ch {
            '（' | '(' => depth += 1,
            '）' | ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_furigana_handles_fullwidth_groups() {
        assert_eq!(
            strip_furigana("量（りょう）子（し）の謎（なぞ）かけ屋（や）"),
            "量子の謎かけ屋"
        );
    }

    #[test]
    fn strip_furigana_handles_ascii_groups() {
        assert_eq!(strip_furigana("稲妻(いなずま)"), "稲妻");
    }

    #[test]
    fn strip_furigana_leaves_plain_names_alone() {
        assert_eq!(strip_furigana("Lightning Bolt"), "Lightning Bolt");
    }

    #[test]
    fn type_rank_prefers_earlier_types() {
        assert_eq!(type_order_rank("Legendary Creature — Human Wizard"), 1);
        assert_eq!(type_order_rank("Artifact Creature — Golem"), 1);
        assert_eq!(type_order_rank("Basic Land — Island"), 0);
        assert_eq!(type_order_rank("Battle — Siege"), TYPE_ORDER.len());
    }
}
