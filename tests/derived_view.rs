mod common;

use common::{ManualMarket, cache, config, token};
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use std::rc::Rc;
use token_portfolio_wasm::application::{DashboardView, PortfolioCoordinator};
use token_portfolio_wasm::domain::market_data::PriceCache;
use token_portfolio_wasm::domain::portfolio::{
    Holdings, PaletteColor, TokenId, Watchlist, WatchlistAction, allocations, reduce, total_value,
};
use token_portfolio_wasm::infrastructure::MemoryStore;
use token_portfolio_wasm::presentation::{format_percent, format_usd};
use token_portfolio_wasm::view_state::PageState;

#[test]
fn bitcoin_and_ethereum_end_to_end() {
    let mut pool = LocalPool::new();
    let coordinator = Rc::new(PortfolioCoordinator::new(config(), MemoryStore::new(), ManualMarket::default()));

    coordinator.dispatch(WatchlistAction::AddTokens(vec![token("bitcoin"), token("ethereum")]));
    let task = coordinator.clone();
    pool.spawner()
        .spawn_local(async move {
            task.refresh_prices().await;
        })
        .unwrap();
    pool.run_until_stalled();
    coordinator
        .market()
        .resolve_market(0, Ok(cache(&[("bitcoin", 50_000.0), ("ethereum", 3_000.0)])));
    pool.run_until_stalled();

    coordinator.update_holdings(TokenId::from("bitcoin"), "0.5");
    coordinator.update_holdings(TokenId::from("ethereum"), "2");

    let view = DashboardView::compute(
        &coordinator.watchlist(),
        coordinator.price_sync().cache(),
        PageState::default(),
    );
    assert_eq!(view.total, 31_000.0);

    let shares: Vec<(String, String)> = view
        .allocations
        .iter()
        .map(|a| (a.id.value().to_string(), format_percent(a.percent)))
        .collect();
    assert_eq!(
        shares,
        vec![
            ("bitcoin".to_string(), "80.6%".to_string()),
            ("ethereum".to_string(), "19.4%".to_string()),
        ]
    );
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].value, 25_000.0);
    assert_eq!(view.slices.len(), 2);
}

#[test]
fn missing_prices_contribute_zero() {
    let watchlist = reduce(
        Watchlist::new(),
        &WatchlistAction::AddTokens(vec![token("bitcoin"), token("unknown")]),
    );
    let watchlist = reduce(
        watchlist,
        &WatchlistAction::UpdateHoldings { id: TokenId::from("unknown"), holdings: 5.0.into() },
    );
    let watchlist = reduce(
        watchlist,
        &WatchlistAction::UpdateHoldings { id: TokenId::from("bitcoin"), holdings: 1.0.into() },
    );
    let prices = cache(&[("bitcoin", 10.0)]);

    assert_eq!(total_value(&watchlist, &prices), 10.0);
    let allocs = allocations(&watchlist, &prices);
    assert_eq!(allocs.len(), 1);
    assert_eq!(allocs[0].percent, 100.0);
}

#[test]
fn zero_total_renders_zero_percent() {
    let watchlist = reduce(Watchlist::new(), &WatchlistAction::AddTokens(vec![token("bitcoin")]));
    let view = DashboardView::compute(&watchlist, &PriceCache::new(), PageState::default());

    assert_eq!(view.total, 0.0);
    assert!(view.allocations.is_empty());
    assert!(view.slices.is_empty());
    assert!(view.rows[0].snapshot.is_none());
    assert!(view.rows[0].sparkline.is_empty());
}

#[test]
fn colors_shift_when_an_earlier_token_is_removed() {
    let watchlist = reduce(
        Watchlist::new(),
        &WatchlistAction::AddTokens(vec![token("bitcoin"), token("ethereum"), token("solana")]),
    );
    let watchlist = ["bitcoin", "ethereum", "solana"].iter().fold(watchlist, |w, id| {
        reduce(w, &WatchlistAction::UpdateHoldings { id: TokenId::from(*id), holdings: 1.0.into() })
    });
    let prices = cache(&[("bitcoin", 1.0), ("ethereum", 1.0), ("solana", 1.0)]);

    let before = allocations(&watchlist, &prices);
    assert_eq!(before[1].color, PaletteColor::MediumPurple);
    assert_eq!(before[1].color.hex(), "#9370db");

    let watchlist = reduce(watchlist, &WatchlistAction::RemoveToken(TokenId::from("bitcoin")));
    let after = allocations(&watchlist, &prices);
    assert_eq!(after[0].id, TokenId::from("ethereum"));
    assert_eq!(after[0].color, PaletteColor::Coral);
    assert_eq!(after[0].color.hex(), "#ff7f50");
}

#[test]
fn palette_cycles_after_five() {
    assert_eq!(PaletteColor::for_index(5), PaletteColor::Coral);
    assert_eq!(PaletteColor::for_index(9).hex(), "#4169e1");
}

#[test]
fn huge_holdings_stay_finite() {
    let watchlist = reduce(
        Watchlist::new(),
        &WatchlistAction::AddTokens(vec![token("bitcoin"), token("ethereum")]),
    );
    let watchlist = reduce(
        watchlist,
        &WatchlistAction::UpdateHoldings { id: TokenId::from("bitcoin"), holdings: Holdings::parse("1e308") },
    );
    let watchlist = reduce(
        watchlist,
        &WatchlistAction::UpdateHoldings { id: TokenId::from("ethereum"), holdings: 1.0.into() },
    );
    let prices = cache(&[("bitcoin", 50_000.0), ("ethereum", 3_000.0)]);

    let view = DashboardView::compute(&watchlist, &prices, PageState::default());
    assert!(view.total.is_finite());
    assert_eq!(format_usd(view.total), "$50,000,000,000,000,000,000.00");

    let percents: Vec<f64> = view.allocations.iter().map(|a| a.percent).collect();
    assert!(percents.iter().all(|p| p.is_finite()));
    assert!((percents[0] - 100.0).abs() < 1e-6);
    assert!((percents.iter().sum::<f64>() - 100.0).abs() < 1e-6);

    assert_eq!(view.slices.len(), 2);
    assert!(view.slices.iter().all(|s| !s.path.contains("NaN")));
}
