use crate::domain::errors::AppResult;
use crate::domain::market_data::{PriceCache, TokenCandidate};
use crate::domain::portfolio::TokenId;

/// Source of quotes and token lookups
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// One batched quote request for every id.
    async fn fetch_markets(&self, ids: &[TokenId]) -> AppResult<PriceCache>;

    /// Free-text token search.
    async fn search(&self, query: &str) -> AppResult<Vec<TokenCandidate>>;

    /// Default list shown before the user types anything.
    async fn trending(&self) -> AppResult<Vec<TokenCandidate>>;
}
