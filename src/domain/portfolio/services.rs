use super::entities::{TokenId, Watchlist, WatchlistEntry};
use super::value_objects::PaletteColor;
use crate::domain::market_data::PriceCache;

/// One slice of the allocation chart
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
    pub value: f64,
    pub color: PaletteColor,
    pub percent: f64,
}

/// `price * holdings`, or zero while the token has no snapshot or the
/// product is not finite.
pub fn entry_value(entry: &WatchlistEntry, prices: &PriceCache) -> f64 {
    prices
        .get(&entry.id)
        .map(|snapshot| snapshot.price * entry.holdings.value())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Saturates at `f64::MAX` instead of overflowing to infinity.
pub fn total_value(watchlist: &Watchlist, prices: &PriceCache) -> f64 {
    watchlist
        .entries()
        .iter()
        .map(|entry| entry_value(entry, prices))
        .sum::<f64>()
        .min(f64::MAX)
}

/// Share of the total in percent; zero when the total is zero.
pub fn allocation_percent(value: f64, total: f64) -> f64 {
    if total > 0.0 && total.is_finite() {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Allocations with a positive value, in watchlist order.
///
/// Colors follow the entry's current index, so removing an earlier token
/// recolors the ones after it.
pub fn allocations(watchlist: &Watchlist, prices: &PriceCache) -> Vec<Allocation> {
    let total = total_value(watchlist, prices);
    watchlist
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let value = entry_value(entry, prices);
            if value <= 0.0 {
                return None;
            }
            let snapshot = prices.get(&entry.id);
            Some(Allocation {
                id: entry.id.clone(),
                name: snapshot.map_or_else(|| entry.name.clone(), |s| s.name.clone()),
                symbol: snapshot.map_or_else(|| entry.symbol.clone(), |s| s.symbol.clone()),
                value,
                color: PaletteColor::for_index(index),
                percent: allocation_percent(value, total),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_guards_zero_total() {
        assert_eq!(allocation_percent(10.0, 0.0), 0.0);
        assert_eq!(allocation_percent(0.0, 0.0), 0.0);
        assert!((allocation_percent(25.0, 100.0) - 25.0).abs() < 1e-9);
    }
}
