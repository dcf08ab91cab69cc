use super::GlooHttpClient;
use super::dto::{MarketCoinDto, SearchResponseDto, TrendingResponseDto, markets_to_cache};
use crate::config::AppConfig;
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{MarketDataRepository, PriceCache, TokenCandidate};
use crate::domain::portfolio::TokenId;

/// The markets endpoint returns at most this many coins per page.
pub const MAX_IDS_PER_REQUEST: usize = 250;

/// Market data from the CoinGecko public API
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    vs_currency: String,
    http: GlooHttpClient,
}

impl CoinGeckoClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            vs_currency: config.vs_currency.clone(),
            http: GlooHttpClient::new(config.request_timeout_ms, config.retry.clone()),
        }
    }

    pub fn markets_url(&self, ids: &[TokenId]) -> String {
        let ids = ids
            .iter()
            .map(|id| urlencoding::encode(id.value()).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/coins/markets?vs_currency={}&ids={}&order=market_cap_desc&per_page={}&page=1&sparkline=true&price_change_percentage=24h",
            self.base_url, self.vs_currency, ids, MAX_IDS_PER_REQUEST
        )
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?query={}", self.base_url, urlencoding::encode(query))
    }

    pub fn trending_url(&self) -> String {
        format!("{}/search/trending", self.base_url)
    }
}

impl MarketDataRepository for CoinGeckoClient {
    async fn fetch_markets(&self, ids: &[TokenId]) -> AppResult<PriceCache> {
        if ids.len() > MAX_IDS_PER_REQUEST {
            get_logger().warn(
                LogComponent::Infrastructure("CoinGecko"),
                &format!("{} ids requested, only {} fit in one page", ids.len(), MAX_IDS_PER_REQUEST),
            );
        }
        let coins: Vec<MarketCoinDto> = self.http.get_json(&self.markets_url(ids)).await?;
        let cache = markets_to_cache(coins);
        get_logger().info(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("✅ Loaded {} of {} quotes", cache.len(), ids.len()),
        );
        Ok(cache)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<TokenCandidate>> {
        let response: SearchResponseDto = self.http.get_json(&self.search_url(query)).await?;
        Ok(response.into_candidates())
    }

    async fn trending(&self) -> AppResult<Vec<TokenCandidate>> {
        let response: TrendingResponseDto = self.http.get_json(&self.trending_url()).await?;
        Ok(response.into_candidates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markets_url() {
        let client = CoinGeckoClient::new(&AppConfig::default());
        let url = client.markets_url(&[TokenId::from("bitcoin"), TokenId::from("ethereum")]);
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&ids=bitcoin,ethereum&order=market_cap_desc&per_page=250&page=1&sparkline=true&price_change_percentage=24h"
        );
    }

    #[test]
    fn test_search_url_is_encoded() {
        let client = CoinGeckoClient::new(&AppConfig::default());
        assert_eq!(
            client.search_url("shiba inu&x"),
            "https://api.coingecko.com/api/v3/search?query=shiba%20inu%26x"
        );
        assert_eq!(client.trending_url(), "https://api.coingecko.com/api/v3/search/trending");
    }
}
