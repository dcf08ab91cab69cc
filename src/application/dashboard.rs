//! Everything the dashboard renders, derived from (watchlist, prices, page).
//!
//! Nothing is cached between calls; the view is recomputed after every store
//! change.

use crate::domain::chart::{DonutGeometry, DonutSlice, Sparkline, SparklineBox, donut_slices, sparkline};
use crate::domain::market_data::{PriceCache, PriceSnapshot};
use crate::domain::portfolio::{Allocation, Watchlist, WatchlistEntry, allocations, entry_value, total_value};
use crate::view_state::PageState;

/// One row of the watchlist table
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub entry: WatchlistEntry,
    pub snapshot: Option<PriceSnapshot>,
    pub value: f64,
    pub sparkline: Sparkline,
}

impl TokenRow {
    fn new(entry: &WatchlistEntry, prices: &PriceCache, bounds: SparklineBox) -> Self {
        let snapshot = prices.get(&entry.id).cloned();
        let sparkline = match &snapshot {
            Some(s) => sparkline(&s.sparkline, s.change_24h_percent, bounds),
            None => sparkline(&[], 0.0, bounds),
        };
        Self {
            value: entry_value(entry, prices),
            entry: entry.clone(),
            snapshot,
            sparkline,
        }
    }

    /// Symbol from the latest quote, falling back to the one stored at add time.
    pub fn symbol(&self) -> &str {
        self.snapshot
            .as_ref()
            .map_or(self.entry.symbol.as_str(), |s| s.symbol.as_str())
    }

    pub fn image(&self) -> Option<&str> {
        self.snapshot
            .as_ref()
            .map(|s| s.image.as_str())
            .filter(|image| !image.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub total: f64,
    pub allocations: Vec<Allocation>,
    pub slices: Vec<DonutSlice>,
    pub rows: Vec<TokenRow>,
    /// Page after clamping to the current watchlist length
    pub page: PageState,
    pub total_pages: usize,
    pub range_label: String,
    pub pages_label: String,
}

impl DashboardView {
    /// No watchlist entries, so the table gives way to the empty message.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn compute(watchlist: &Watchlist, prices: &PriceCache, page: PageState) -> Self {
        let len = watchlist.len();
        let page = page.clamped(len);
        let allocations = allocations(watchlist, prices);
        let slices = donut_slices(&allocations, &DonutGeometry::default());
        let bounds = SparklineBox::default();
        let rows = watchlist.entries()[page.range(len)]
            .iter()
            .map(|entry| TokenRow::new(entry, prices, bounds))
            .collect();

        Self {
            total: total_value(watchlist, prices),
            allocations,
            slices,
            rows,
            total_pages: page.total_pages(len),
            range_label: page.range_label(len),
            pages_label: page.pages_label(len),
            page,
        }
    }
}
