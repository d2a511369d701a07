//! Display ordering of resolved results.

use std::cmp::Ordering;

use crate::models::card::CardPrint;

/// Order cards for display.
///
/// Comparator keys, each applied only when the prior ones tie: exact
/// case-insensitive name match against the query, Japanese language when
/// preferred, case-insensitive name ascending, release date descending,
/// set code ascending. The sort is stable, so otherwise-tied prints keep
/// their merged order.
pub fn rank_results(cards: &mut [CardPrint], query: &str, prefer_japanese: bool) {
    let query_lower = query.trim().to_lowercase();

    cards.sort_by(|a, b| {
        let a_name = a.name.to_lowercase();
        let b_name = b.name.to_lowercase();

        let a_exact = usize::from(a_name != query_lower);
        let b_exact = usize::from(b_name != query_lower);
        if a_exact != b_exact {
            return a_exact.cmp(&b_exact);
        }

        if prefer_japanese {
            let a_ja = usize::from(a.lang != "ja");
            let b_ja = usize::from(b.lang != "ja");
            if a_ja != b_ja {
                return a_ja.cmp(&b_ja);
            }
        }

        if a_name != b_name {
            return a_name.cmp(&b_name);
        }

        match b.released_at.cmp(&a.released_at) {
            Ordering::Equal => {}
            ord => return ord,
        }

        a.set.cmp(&b.set)
    });
}
