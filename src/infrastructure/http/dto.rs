use crate::domain::market_data::{PriceCache, PriceSnapshot, TokenCandidate};
use crate::domain::portfolio::TokenId;
use serde::Deserialize;

/// One row of `/coins/markets`
#[derive(Debug, Deserialize)]
pub struct MarketCoinDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<SparklineDto>,
}

#[derive(Debug, Deserialize)]
pub struct SparklineDto {
    #[serde(default)]
    pub price: Vec<f64>,
}

impl MarketCoinDto {
    /// Coins without a current price have nothing to show and are skipped.
    pub fn to_domain_snapshot(self) -> Option<(TokenId, PriceSnapshot)> {
        let price = self.current_price.filter(|p| p.is_finite())?;
        Some((
            TokenId::new(self.id),
            PriceSnapshot {
                price,
                change_24h_percent: self.price_change_percentage_24h.unwrap_or(0.0),
                sparkline: self.sparkline_in_7d.map(|s| s.price).unwrap_or_default(),
                image: self.image.unwrap_or_default(),
                symbol: self.symbol.to_uppercase(),
                name: self.name,
            },
        ))
    }
}

pub fn markets_to_cache(coins: Vec<MarketCoinDto>) -> PriceCache {
    coins
        .into_iter()
        .filter_map(MarketCoinDto::to_domain_snapshot)
        .collect()
}

/// Coin shape shared by `/search` and `/search/trending`
#[derive(Debug, Deserialize)]
pub struct SearchCoinDto {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

impl From<SearchCoinDto> for TokenCandidate {
    fn from(dto: SearchCoinDto) -> Self {
        Self {
            id: TokenId::new(dto.id),
            name: dto.name,
            symbol: dto.symbol,
            thumb: dto.thumb,
            large: dto.large,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    pub coins: Vec<SearchCoinDto>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingResponseDto {
    pub coins: Vec<TrendingItemDto>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingItemDto {
    pub item: SearchCoinDto,
}

impl SearchResponseDto {
    pub fn into_candidates(self) -> Vec<TokenCandidate> {
        self.coins.into_iter().map(TokenCandidate::from).collect()
    }
}

impl TrendingResponseDto {
    pub fn into_candidates(self) -> Vec<TokenCandidate> {
        self.coins
            .into_iter()
            .map(|coin| TokenCandidate::from(coin.item))
            .collect()
    }
}
