#![allow(dead_code)]

use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use token_portfolio_wasm::config::AppConfig;
use token_portfolio_wasm::domain::errors::{AppError, AppResult, NetworkError};
use token_portfolio_wasm::domain::market_data::{
    MarketDataRepository, PriceCache, PriceSnapshot, TokenCandidate,
};
use token_portfolio_wasm::domain::portfolio::{NewToken, TokenId};

type Pending<T> = RefCell<Vec<(String, Option<oneshot::Sender<AppResult<T>>>)>>;

/// Market double whose responses are released by the test, in any order.
#[derive(Default)]
pub struct ManualMarket {
    markets: Pending<PriceCache>,
    searches: Pending<Vec<TokenCandidate>>,
    pub trending: RefCell<Vec<TokenCandidate>>,
    pub trending_fails: Cell<bool>,
}

impl ManualMarket {
    pub fn market_calls(&self) -> Vec<String> {
        self.markets.borrow().iter().map(|(ids, _)| ids.clone()).collect()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.searches.borrow().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn resolve_market(&self, index: usize, result: AppResult<PriceCache>) {
        let sender = self.markets.borrow_mut()[index].1.take().expect("already resolved");
        let _ = sender.send(result);
    }

    pub fn resolve_search(&self, index: usize, result: AppResult<Vec<TokenCandidate>>) {
        let sender = self.searches.borrow_mut()[index].1.take().expect("already resolved");
        let _ = sender.send(result);
    }
}

fn dropped() -> AppError {
    NetworkError::RequestFailed("dropped".to_string()).into()
}

impl MarketDataRepository for ManualMarket {
    async fn fetch_markets(&self, ids: &[TokenId]) -> AppResult<PriceCache> {
        let (tx, rx) = oneshot::channel();
        let joined = ids.iter().map(|id| id.value()).collect::<Vec<_>>().join(",");
        self.markets.borrow_mut().push((joined, Some(tx)));
        rx.await.unwrap_or_else(|_| Err(dropped()))
    }

    async fn search(&self, query: &str) -> AppResult<Vec<TokenCandidate>> {
        let (tx, rx) = oneshot::channel();
        self.searches.borrow_mut().push((query.to_string(), Some(tx)));
        rx.await.unwrap_or_else(|_| Err(dropped()))
    }

    async fn trending(&self) -> AppResult<Vec<TokenCandidate>> {
        if self.trending_fails.get() {
            return Err(NetworkError::HttpStatus { status: 500, status_text: "Internal Server Error".into() }.into());
        }
        Ok(self.trending.borrow().clone())
    }
}

pub fn config() -> AppConfig {
    AppConfig::default()
}

pub fn snapshot(name: &str, symbol: &str, price: f64) -> PriceSnapshot {
    PriceSnapshot {
        price,
        change_24h_percent: 1.0,
        sparkline: vec![price * 0.9, price],
        image: String::new(),
        symbol: symbol.to_string(),
        name: name.to_string(),
    }
}

pub fn cache(prices: &[(&str, f64)]) -> PriceCache {
    prices
        .iter()
        .map(|(id, price)| (TokenId::from(*id), snapshot(id, &id.to_uppercase(), *price)))
        .collect()
}

pub fn token(id: &str) -> NewToken {
    NewToken::new(id, id, id.to_uppercase())
}

pub fn candidate(id: &str) -> TokenCandidate {
    TokenCandidate {
        id: TokenId::from(id),
        name: id.to_string(),
        symbol: id.to_uppercase(),
        thumb: None,
        large: None,
    }
}
