//! Tiered search resolution.
//!
//! Turns free-form user input into a ranked, optionally collapsed list of
//! normalized prints. Fallback strategies are explicit ordered query lists
//! evaluated one at a time with early exit; later tiers only run when the
//! earlier ones came back empty, so calls are always sequential.
//!
//! The Japanese free-text path never widens beyond the printed name field:
//! a whole-card-text query would surface unrelated cards whose Japanese
//! rules text merely mentions the input, so all three tiers stay
//! name-scoped and an all-empty outcome is final.

use std::collections::HashSet;

use crate::models::card::CardPrint;
use crate::models::raw::RawPrint;
use crate::query::{
    classify, furigana_pattern, has_lang_filter, loose_furigana_pattern, looks_japanese,
    QueryClass,
};
use crate::search::client::{SearchClient, SortOrder};
use crate::search::collapse::collapse_same_printing;
use crate::search::rank::rank_results;

// ---------------------------------------------------------------------------
// Options and outcome
// ---------------------------------------------------------------------------

/// Caller-selected search behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Prefer Japanese printings: adds the `lang:ja` tiers and biases
    /// collapsing and ranking toward Japanese-language prints.
    pub prefer_japanese: bool,
    /// Reduce printings sharing an oracle identity to one best print.
    pub collapse_same_printing: bool,
    /// Sort order requested from the collaborator.
    pub order: SortOrder,
}

/// Terminal status of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// At least one card matched.
    Hits(usize),
    /// Every applicable tier came back empty.
    NotFound,
    /// The trimmed input was empty; no collaborator call was issued.
    EmptyQuery,
    /// Favorites-only mode answered from local storage. Produced by the
    /// application controller, never by the resolver itself.
    Favorites(usize),
}

/// What a resolution produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub cards: Vec<CardPrint>,
}

impl SearchOutcome {
    fn not_found() -> Self {
        Self {
            status: SearchStatus::NotFound,
            cards: Vec::new(),
        }
    }

    fn empty_query() -> Self {
        Self {
            status: SearchStatus::EmptyQuery,
            cards: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Orchestrates collaborator calls, merging, collapsing and ranking.
pub struct Resolver<'a> {
    client: &'a dyn SearchClient,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a dyn SearchClient) -> Self {
        Self { client }
    }

    /// Resolve raw input text into a ranked card list.
    pub fn resolve(&self, text: &str, options: &SearchOptions) -> SearchOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SearchOutcome::empty_query();
        }

        match classify(text) {
            QueryClass::Advanced => self.resolve_advanced(text, options),
            QueryClass::JapaneseFree => self.resolve_japanese(text, options),
            QueryClass::PlainFree => self.resolve_plain(text, options),
        }
    }

    /// Advanced path: pass-through queries tried in order, first hit wins.
    fn resolve_advanced(&self, text: &str, options: &SearchOptions) -> SearchOutcome {
        let mut queries: Vec<String> = Vec::with_capacity(2);
        if options.prefer_japanese && looks_japanese(text) && !has_lang_filter(text) {
            queries.push(format!("lang:ja {}", text));
        }
        queries.push(text.to_string());

        for query in &queries {
            let raw = self.fetch(query, options.order);
            if !raw.is_empty() {
                return self.finish(raw, text, options);
            }
        }
        SearchOutcome::not_found()
    }

    /// Japanese free-text path: three name-scoped tiers, no broader
    /// fallback afterwards.
    fn resolve_japanese(&self, text: &str, options: &SearchOptions) -> SearchOutcome {
        let tiers = [
            format!("lang:ja name:\"{}\"", text),
            format!("lang:ja name:/{}/", furigana_pattern(text)),
            format!("lang:ja name:/{}/", loose_furigana_pattern(text)),
        ];

        for query in &tiers {
            let raw = self.fetch(query, options.order);
            if !raw.is_empty() {
                return self.finish(raw, text, options);
            }
        }
        SearchOutcome::not_found()
    }

    /// Plain free-text path: language-preferred queries merged with the
    /// unrestricted query, keyed by print id.
    fn resolve_plain(&self, text: &str, options: &SearchOptions) -> SearchOutcome {
        let mut merged: Vec<RawPrint> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut push_all = |prints: Vec<RawPrint>, merged: &mut Vec<RawPrint>| {
            for print in prints {
                if seen.insert(print.id.clone()) {
                    merged.push(print);
                }
            }
        };

        if options.prefer_japanese {
            let ja_hits = self.fetch(&format!("lang:ja {}", text), options.order);
            let ja_empty = ja_hits.is_empty();
            push_all(ja_hits, &mut merged);

            // Furigana fallback only when the literal Japanese query missed.
            if ja_empty && looks_japanese(text) {
                let pattern = format!("lang:ja name:/{}/", furigana_pattern(text));
                push_all(self.fetch(&pattern, options.order), &mut merged);
            }
        }

        push_all(self.fetch(text, options.order), &mut merged);

        if merged.is_empty() {
            return SearchOutcome::not_found();
        }
        self.finish(merged, text, options)
    }

    /// Collapse, normalize and rank a non-empty raw result set.
    fn finish(&self, raw: Vec<RawPrint>, query: &str, options: &SearchOptions) -> SearchOutcome {
        let raw = if options.collapse_same_printing {
            collapse_same_printing(raw, query, options.prefer_japanese)
        } else {
            raw
        };

        let mut cards: Vec<CardPrint> = raw.iter().map(CardPrint::from_raw).collect();
        rank_results(&mut cards, query, options.prefer_japanese);

        SearchOutcome {
            status: SearchStatus::Hits(cards.len()),
            cards,
        }
    }

    /// One collaborator call; failures degrade to an empty result so the
    /// next tier can still run.
    fn fetch(&self, query: &str, order: SortOrder) -> Vec<RawPrint> {
        match self.client.search(query, order) {
            Ok(prints) => prints,
            Err(e) => {
                log::warn!("search tier failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}
