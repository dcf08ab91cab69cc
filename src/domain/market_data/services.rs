use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::PriceCache;
use crate::domain::portfolio::TokenId;

/// Result of handing a response back to a sequenced state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    Failed,
    /// A newer request already settled; the response was dropped.
    Stale,
    /// Nothing to request; the cache was left as it is.
    Skipped,
}

/// A price request that has been issued but not settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub ids: Vec<TokenId>,
}

/// Price cache plus the bookkeeping that decides which response wins.
///
/// Each request gets a monotonically increasing sequence number. A response
/// is applied only if its number is above the last settled one, so an older
/// request finishing late never overwrites a newer result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSync {
    cache: PriceCache,
    last_updated: Option<u64>,
    error: Option<String>,
    issued: u64,
    settled: u64,
}

impl PriceSync {
    pub const FETCH_ERROR: &'static str = "Failed to fetch prices";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    pub fn last_updated(&self) -> Option<u64> {
        self.last_updated
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sequence number of the most recently issued request.
    pub fn last_issued(&self) -> u64 {
        self.issued
    }

    /// True while the newest issued request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.issued > self.settled
    }

    /// Start a fetch cycle. An empty id list settles immediately, clears any
    /// previous error and returns `None`, leaving the cache as it is.
    pub fn begin(&mut self, ids: Vec<TokenId>) -> Option<FetchTicket> {
        self.issued += 1;
        if ids.is_empty() {
            self.settled = self.issued;
            self.error = None;
            return None;
        }
        self.error = None;
        Some(FetchTicket { seq: self.issued, ids })
    }

    /// Settle a ticket. `now` is the wall-clock time of the response.
    pub fn complete(&mut self, ticket: &FetchTicket, result: AppResult<PriceCache>, now: u64) -> SyncOutcome {
        if ticket.seq <= self.settled {
            get_logger().debug(
                LogComponent::Domain("PriceSync"),
                &format!("Dropping stale price response #{} (settled #{})", ticket.seq, self.settled),
            );
            return SyncOutcome::Stale;
        }
        self.settled = ticket.seq;

        match result {
            Ok(cache) => {
                self.cache = cache;
                self.last_updated = Some(now);
                self.error = None;
                SyncOutcome::Applied
            }
            Err(e) => {
                get_logger().warn(
                    LogComponent::Domain("PriceSync"),
                    &format!("Price fetch #{} failed: {}", ticket.seq, e),
                );
                self.error = Some(Self::FETCH_ERROR.to_string());
                SyncOutcome::Failed
            }
        }
    }
}
