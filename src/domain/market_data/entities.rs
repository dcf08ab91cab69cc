use crate::domain::portfolio::TokenId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest market snapshot of one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub price: f64,
    pub change_24h_percent: f64,
    /// 7-day price series, oldest first
    pub sparkline: Vec<f64>,
    pub image: String,
    pub symbol: String,
    pub name: String,
}

impl PriceSnapshot {
    pub fn is_rising(&self) -> bool {
        self.change_24h_percent > 0.0
    }
}

/// Domain entity - id -> snapshot map, replaced wholesale on every successful fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCache {
    snapshots: HashMap<TokenId, PriceSnapshot>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TokenId, snapshot: PriceSnapshot) {
        self.snapshots.insert(id, snapshot);
    }

    pub fn get(&self, id: &TokenId) -> Option<&PriceSnapshot> {
        self.snapshots.get(id)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl FromIterator<(TokenId, PriceSnapshot)> for PriceCache {
    fn from_iter<I: IntoIterator<Item = (TokenId, PriceSnapshot)>>(iter: I) -> Self {
        Self {
            snapshots: iter.into_iter().collect(),
        }
    }
}

/// Search or trending result the user can pick from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCandidate {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

impl TokenCandidate {
    pub fn image(&self) -> Option<&str> {
        self.thumb.as_deref().or(self.large.as_deref())
    }
}
