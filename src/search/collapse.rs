//! Best-print selection across printings of the same card.
//!
//! Grouping is by oracle identity; a print without one is its own group,
//! so collapsing an already-collapsed list is the identity. The tie-break
//! chain is a strict total order, making the pick independent of input
//! iteration order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::raw::RawPrint;

/// Reduce a raw result set to one print per oracle identity.
///
/// First-seen group order is preserved.
pub fn collapse_same_printing(
    raw: Vec<RawPrint>,
    query: &str,
    prefer_japanese: bool,
) -> Vec<RawPrint> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<RawPrint>> = HashMap::new();

    for print in raw {
        let key = print
            .oracle_id
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| print.id.clone());
        let group = groups.entry(key.clone()).or_default();
        if group.is_empty() {
            order.push(key);
        }
        group.push(print);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let group = groups.remove(&key)?;
            pick_best_print(group, query, prefer_japanese)
        })
        .collect()
}

/// Select the best print of one oracle group.
///
/// Tie-break chain: Japanese language when preferred, later release date,
/// exact match against the trimmed case-folded query, then the greater
/// case-folded `set|collector|id` composite key. The last key is arbitrary
/// but total, so the result is stable.
pub fn pick_best_print(
    group: Vec<RawPrint>,
    query: &str,
    prefer_japanese: bool,
) -> Option<RawPrint> {
    let mut best: Option<RawPrint> = None;
    for candidate in group {
        best = Some(match best {
            None => candidate,
            Some(current) => {
                if beats(&candidate, &current, query, prefer_japanese) {
                    candidate
                } else {
                    current
                }
            }
        });
    }
    best
}

/// True when `a` should replace `b` as the group representative.
fn beats(a: &RawPrint, b: &RawPrint, query: &str, prefer_japanese: bool) -> bool {
    if prefer_japanese {
        let a_ja = usize::from(a.lang != "ja");
        let b_ja = usize::from(b.lang != "ja");
        if a_ja != b_ja {
            return a_ja < b_ja;
        }
    }

    // ISO dates compare correctly as strings; empty sorts earliest.
    match a.released_at.cmp(&b.released_at) {
        Ordering::Greater => return true,
        Ordering::Less => return false,
        Ordering::Equal => {}
    }

    let a_exact = exact_rank(a.display_name(), query);
    let b_exact = exact_rank(b.display_name(), query);
    if a_exact != b_exact {
        return a_exact < b_exact;
    }

    composite_key(a) > composite_key(b)
}

/// 0 when the name equals the trimmed, case-folded query; 1 otherwise.
pub fn exact_rank(name: &str, query: &str) -> usize {
    usize::from(name.trim().to_lowercase() != query.trim().to_lowercase())
}

fn composite_key(print: &RawPrint) -> String {
    format!("{}|{}|{}", print.set, print.collector_number, print.id).to_lowercase()
}
