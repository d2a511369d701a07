//! Search collaborator boundary.
//!
//! The resolver only sees [`SearchClient`]; the production implementation
//! talks to the Scryfall `/cards/search` endpoint with a blocking reqwest
//! client built lazily on first use. Transport failures and no-match
//! responses both come back as an empty list so fallback tiers can proceed.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::Result;
use crate::models::raw::RawPrint;

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Caller-selected collaborator sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Name,
    Released,
    Set,
    Cmc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Released => "released",
            SortOrder::Set => "set",
            SortOrder::Cmc => "cmc",
        }
    }
}

// ---------------------------------------------------------------------------
// SearchClient
// ---------------------------------------------------------------------------

/// External card search collaborator.
///
/// Implementations must request all printings (`unique=prints` semantics)
/// and honor the caller's sort order. An empty vector means "no match";
/// implementations should swallow transport errors into empty results
/// rather than propagate them, so a flaky network degrades to a miss.
pub trait SearchClient {
    fn search(&self, query: &str, order: SortOrder) -> Result<Vec<RawPrint>>;
}

// ---------------------------------------------------------------------------
// ScryfallClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the Scryfall search API.
pub struct ScryfallClient {
    timeout: Duration,
    client: RefCell<Option<Client>>,
}

impl ScryfallClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            client: RefCell::new(None),
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<Client> {
        let mut slot = self.client.borrow_mut();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let built = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        *slot = Some(built.clone());
        Ok(built)
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl SearchClient for ScryfallClient {
    fn search(&self, query: &str, order: SortOrder) -> Result<Vec<RawPrint>> {
        let client = self.client()?;
        log::debug!("scryfall search: q={:?} order={}", query, order.as_str());

        let response = client
            .get(config::SEARCH_URL)
            .query(&[
                ("q", query),
                ("unique", "prints"),
                ("order", order.as_str()),
            ])
            .header("Accept", "application/json")
            .send();

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                log::warn!("scryfall request failed, treating as no match: {}", e);
                return Ok(Vec::new());
            }
        };

        // Scryfall answers 404 for zero hits; any non-success is a miss.
        if !response.status().is_success() {
            log::debug!("scryfall returned {}, no results", response.status());
            return Ok(Vec::new());
        }

        let body: serde_json::Value = match response.json() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("scryfall response was not JSON, treating as no match: {}", e);
                return Ok(Vec::new());
            }
        };

        let prints = body
            .get("data")
            .and_then(|d| d.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Ok(prints)
    }
}
