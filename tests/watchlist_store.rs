mod common;

use common::{ManualMarket, config, token};
use std::cell::RefCell;
use std::rc::Rc;
use token_portfolio_wasm::application::PortfolioCoordinator;
use token_portfolio_wasm::domain::events::PortfolioEvent;
use token_portfolio_wasm::domain::portfolio::{
    Holdings, KeyValueStore, TokenId, Watchlist, WatchlistAction, reduce,
};
use token_portfolio_wasm::infrastructure::MemoryStore;

fn seeded() -> Watchlist {
    reduce(
        Watchlist::new(),
        &WatchlistAction::AddTokens(vec![token("bitcoin"), token("ethereum"), token("solana")]),
    )
}

#[test]
fn adding_an_existing_id_is_a_noop() {
    let state = reduce(
        seeded(),
        &WatchlistAction::UpdateHoldings { id: TokenId::from("bitcoin"), holdings: Holdings::new(0.5) },
    );
    let next = reduce(state.clone(), &WatchlistAction::AddTokens(vec![token("bitcoin")]));

    assert_eq!(next, state);
    assert_eq!(next.get(&TokenId::from("bitcoin")).unwrap().holdings.value(), 0.5);
}

#[test]
fn removing_unknown_id_is_a_noop() {
    let state = seeded();
    let next = reduce(state.clone(), &WatchlistAction::RemoveToken(TokenId::from("dogecoin")));
    assert_eq!(next, state);
}

#[test]
fn update_touches_only_the_target() {
    let state = seeded();
    let next = reduce(
        state.clone(),
        &WatchlistAction::UpdateHoldings { id: TokenId::from("ethereum"), holdings: Holdings::new(2.0) },
    );

    for (before, after) in state.entries().iter().zip(next.entries()) {
        if after.id == TokenId::from("ethereum") {
            assert_eq!(after.holdings.value(), 2.0);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn new_tokens_start_with_zero_holdings_in_order() {
    let state = seeded();
    let ids: Vec<&str> = state.entries().iter().map(|e| e.id.value()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum", "solana"]);
    assert!(state.entries().iter().all(|e| e.holdings.value() == 0.0));
}

#[test]
fn unparsable_holdings_become_zero() {
    assert_eq!(Holdings::parse("abc").value(), 0.0);
    assert_eq!(Holdings::parse(" 1.25 ").value(), 1.25);
    assert_eq!(Holdings::parse("-3").value(), 0.0);
}

#[test]
fn holdings_edit_does_not_change_identifiers() {
    let coordinator = PortfolioCoordinator::new(config(), MemoryStore::new(), ManualMarket::default());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    coordinator.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let added = coordinator.dispatch(WatchlistAction::AddTokens(vec![token("bitcoin")]));
    let edited = coordinator.update_holdings(TokenId::from("bitcoin"), "0.5");
    let duplicate = coordinator.dispatch(WatchlistAction::AddTokens(vec![token("bitcoin")]));
    let removed = coordinator.remove_token(TokenId::from("bitcoin"));

    assert!(added.ids_changed);
    assert!(!edited.ids_changed);
    assert!(!duplicate.ids_changed);
    assert!(removed.ids_changed);

    let events = events.borrow();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[1],
        PortfolioEvent::WatchlistChanged { action: "UpdateHoldings", token_count: 1, ids_changed: false }
    );
}

#[test]
fn every_mutation_is_persisted() {
    let store = MemoryStore::new();
    let coordinator = PortfolioCoordinator::new(config(), &store, ManualMarket::default());
    coordinator.dispatch(WatchlistAction::AddTokens(vec![token("bitcoin"), token("ethereum")]));
    coordinator.update_holdings(TokenId::from("ethereum"), "2");

    let blob = store.get("persist:root").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["watchlist"][1]["id"], "ethereum");
    assert_eq!(json["watchlist"][1]["holdings"], 2.0);

    drop(coordinator);
    let reopened = PortfolioCoordinator::new(config(), &store, ManualMarket::default());
    assert_eq!(reopened.watchlist().len(), 2);
    assert_eq!(reopened.watchlist().get(&TokenId::from("ethereum")).unwrap().holdings.value(), 2.0);
}
