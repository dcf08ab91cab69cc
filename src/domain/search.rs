//! Token search modal state: query, results, trending list and the pending selection.

use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{SyncOutcome, TokenCandidate};
use crate::domain::portfolio::{NewToken, TokenId};

pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Search request waiting for a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenSearch {
    min_query_len: usize,
    query: String,
    results: Vec<TokenCandidate>,
    trending: Vec<TokenCandidate>,
    selected: Vec<TokenCandidate>,
    error: Option<String>,
    issued: u64,
    settled: u64,
}

impl Default for TokenSearch {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUERY_LEN)
    }
}

impl TokenSearch {
    pub const SEARCH_ERROR: &'static str = "Search failed";
    pub const TRENDING_ERROR: &'static str = "Failed to load trending";

    pub fn new(min_query_len: usize) -> Self {
        Self {
            min_query_len: min_query_len.max(1),
            query: String::new(),
            results: Vec::new(),
            trending: Vec::new(),
            selected: Vec::new(),
            error: None,
            issued: 0,
            settled: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[TokenCandidate] {
        &self.results
    }

    pub fn trending(&self) -> &[TokenCandidate] {
        &self.trending
    }

    pub fn selected(&self) -> &[TokenCandidate] {
        &self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.issued > self.settled
    }

    /// Trending while the query box is empty, search results otherwise.
    pub fn visible(&self) -> &[TokenCandidate] {
        if self.query.is_empty() {
            &self.trending
        } else {
            &self.results
        }
    }

    /// Record a new query. Returns a ticket only when the query is long enough
    /// to hit the search endpoint; shorter queries clear the results and any
    /// search error.
    pub fn set_query(&mut self, query: &str) -> Option<SearchTicket> {
        self.query = query.to_string();
        self.issued += 1;
        if query.chars().count() < self.min_query_len {
            self.results.clear();
            self.error = None;
            self.settled = self.issued;
            return None;
        }
        self.error = None;
        Some(SearchTicket {
            seq: self.issued,
            query: self.query.clone(),
        })
    }

    pub fn complete_search(&mut self, ticket: &SearchTicket, result: AppResult<Vec<TokenCandidate>>) -> SyncOutcome {
        if ticket.seq <= self.settled {
            return SyncOutcome::Stale;
        }
        self.settled = ticket.seq;
        match result {
            Ok(results) => {
                self.results = results;
                SyncOutcome::Applied
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Domain("TokenSearch"),
                    &format!("Search for '{}' failed: {}", ticket.query, e),
                );
                self.error = Some(Self::SEARCH_ERROR.to_string());
                SyncOutcome::Failed
            }
        }
    }

    pub fn complete_trending(&mut self, result: AppResult<Vec<TokenCandidate>>) -> SyncOutcome {
        match result {
            Ok(trending) => {
                self.trending = trending;
                SyncOutcome::Applied
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Domain("TokenSearch"),
                    &format!("Trending lookup failed: {}", e),
                );
                self.error = Some(Self::TRENDING_ERROR.to_string());
                SyncOutcome::Failed
            }
        }
    }

    pub fn is_selected(&self, id: &TokenId) -> bool {
        self.selected.iter().any(|candidate| &candidate.id == id)
    }

    /// Add the candidate to the selection, or remove it if already selected.
    pub fn toggle(&mut self, candidate: &TokenCandidate) {
        if self.is_selected(&candidate.id) {
            self.selected.retain(|selected| selected.id != candidate.id);
        } else {
            self.selected.push(candidate.clone());
        }
    }

    /// Hand over the selection and reset the transient search state.
    /// The trending list is kept for the next time the modal opens.
    pub fn confirm(&mut self) -> Vec<NewToken> {
        let tokens = self
            .selected
            .drain(..)
            .map(|candidate| NewToken {
                id: candidate.id,
                name: candidate.name,
                symbol: candidate.symbol,
            })
            .collect();
        self.reset();
        tokens
    }

    /// Drop query, results, selection and error; in-flight searches become stale.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected.clear();
        self.error = None;
        self.settled = self.issued;
    }
}
