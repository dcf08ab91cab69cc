pub use super::value_objects::{Holdings, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Token picked by the user, before it becomes a watchlist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewToken {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
}

impl NewToken {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: TokenId::new(id),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Domain entity - one tracked token with the user's holdings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
    pub holdings: Holdings,
}

impl From<NewToken> for WatchlistEntry {
    fn from(token: NewToken) -> Self {
        Self {
            id: token.id,
            name: token.name,
            symbol: token.symbol,
            holdings: Holdings::ZERO,
        }
    }
}

/// Domain entity - ordered watchlist with unique ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from untrusted entries: later duplicates are dropped and
    /// invalid holdings reset to zero.
    pub fn from_entries(entries: Vec<WatchlistEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .map(|mut entry| {
                entry.holdings = Holdings::new(entry.holdings.value());
                entry
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &TokenId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    pub fn get(&self, id: &TokenId) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn position(&self, id: &TokenId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    /// Ids in watchlist order, as sent to the market-data endpoint.
    pub fn ids(&self) -> Vec<TokenId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn id_set(&self) -> BTreeSet<TokenId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    pub(super) fn push(&mut self, entry: WatchlistEntry) {
        self.entries.push(entry);
    }

    pub(super) fn get_mut(&mut self, id: &TokenId) -> Option<&mut WatchlistEntry> {
        self.entries.iter_mut().find(|entry| &entry.id == id)
    }

    pub(super) fn retain(&mut self, keep: impl FnMut(&WatchlistEntry) -> bool) {
        self.entries.retain(keep);
    }
}

/// True when the two watchlists track different sets of ids.
///
/// Order and holdings are ignored.
pub fn identifiers_changed(previous: &Watchlist, next: &Watchlist) -> bool {
    previous.len() != next.len() || previous.id_set() != next.id_set()
}
