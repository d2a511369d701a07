//! Shared test fixtures for the scrydeck integration tests.
//!
//! Provides `MockClient`, a canned-response search collaborator that records
//! every query it receives, plus builders for raw and normalized prints.

#![allow(dead_code)]

use std::cell::RefCell;

use scrydeck::models::raw::RawPrint;
use scrydeck::models::CardPrint;
use scrydeck::{Result, SearchClient, SortOrder};

/// Canned-response search collaborator.
///
/// Rules are checked in insertion order; the first rule whose needle occurs
/// in the query string answers it. Unmatched queries return no prints, like
/// a miss against the real API.
pub struct MockClient {
    rules: Vec<(String, Vec<RawPrint>)>,
    calls: RefCell<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answer queries containing `needle` with `prints`.
    pub fn when(mut self, needle: &str, prints: Vec<RawPrint>) -> Self {
        self.rules.push((needle.to_string(), prints));
        self
    }

    /// Every query issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SearchClient for MockClient {
    fn search(&self, query: &str, _order: SortOrder) -> Result<Vec<RawPrint>> {
        self.calls.borrow_mut().push(query.to_string());
        for (needle, prints) in &self.rules {
            if query.contains(needle.as_str()) {
                return Ok(prints.clone());
            }
        }
        Ok(Vec::new())
    }
}

/// Build a raw print with the fields most tests care about.
pub fn raw_print(id: &str, oracle: &str, name: &str, lang: &str, released: &str) -> RawPrint {
    RawPrint {
        id: id.to_string(),
        oracle_id: if oracle.is_empty() {
            None
        } else {
            Some(oracle.to_string())
        },
        name: name.to_string(),
        lang: lang.to_string(),
        set: "tst".to_string(),
        collector_number: "1".to_string(),
        released_at: released.to_string(),
        type_line: "Instant".to_string(),
        cmc: Some(1.0),
        ..Default::default()
    }
}

/// Same as [`raw_print`] but with a localized printed name.
pub fn raw_print_ja(
    id: &str,
    oracle: &str,
    name: &str,
    printed: &str,
    released: &str,
) -> RawPrint {
    let mut print = raw_print(id, oracle, name, "ja", released);
    print.printed_name = Some(printed.to_string());
    print
}

/// Build a normalized print directly, for deck and store tests.
pub fn card(id: &str, name: &str) -> CardPrint {
    CardPrint {
        id: id.to_string(),
        name: name.to_string(),
        en_name: name.to_string(),
        sort_name: name.to_string(),
        lang: "en".to_string(),
        set: "TST".to_string(),
        collector: "1".to_string(),
        cmc: 1.0,
        type_line: "Instant".to_string(),
        type_rank: 2,
        ..Default::default()
    }
}
