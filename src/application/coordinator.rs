use crate::config::AppConfig;
use crate::domain::{
    events::{DomainEvent, EventDispatcher, InMemoryEventDispatcher, PortfolioEvent},
    logging::{LogComponent, get_logger, get_time_provider},
    market_data::{MarketDataRepository, PriceSync, SyncOutcome, TokenCandidate},
    portfolio::{
        Holdings, KeyValueStore, TokenId, Watchlist, WatchlistAction, WatchlistRepository,
        identifiers_changed, reduce,
    },
    search::TokenSearch,
};
use std::cell::RefCell;
use std::rc::Rc;

/// What a watchlist action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchlistChange {
    /// The set of token ids differs from before, so prices need a refetch.
    pub ids_changed: bool,
}

/// Owns the watchlist, the price cache and the search state.
///
/// State lives in `RefCell`s that are never borrowed across an `.await`, so
/// several refreshes or searches can be in flight at once; the sequence
/// numbers in [`PriceSync`] and [`TokenSearch`] decide which response lands.
pub struct PortfolioCoordinator<S: KeyValueStore, M: MarketDataRepository> {
    config: AppConfig,
    repository: WatchlistRepository<S>,
    market: M,
    watchlist: RefCell<Watchlist>,
    prices: RefCell<PriceSync>,
    search: RefCell<TokenSearch>,
    events: RefCell<InMemoryEventDispatcher>,
    on_ids_changed: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<S: KeyValueStore, M: MarketDataRepository> PortfolioCoordinator<S, M> {
    /// Build the coordinator and rehydrate the persisted watchlist.
    pub fn new(config: AppConfig, store: S, market: M) -> Self {
        let repository = WatchlistRepository::new(store, config.storage_key.clone());
        let watchlist = repository.load();
        get_logger().info(
            LogComponent::Application("PortfolioCoordinator"),
            &format!("🚀 Starting with {} tokens", watchlist.len()),
        );

        Self {
            search: RefCell::new(TokenSearch::new(config.min_query_len)),
            config,
            repository,
            market,
            watchlist: RefCell::new(watchlist),
            prices: RefCell::new(PriceSync::new()),
            events: RefCell::new(InMemoryEventDispatcher::new()),
            on_ids_changed: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn market(&self) -> &M {
        &self.market
    }

    pub fn watchlist(&self) -> Watchlist {
        self.watchlist.borrow().clone()
    }

    pub fn price_sync(&self) -> PriceSync {
        self.prices.borrow().clone()
    }

    pub fn search_state(&self) -> TokenSearch {
        self.search.borrow().clone()
    }

    /// Handlers run synchronously after each change and must not subscribe
    /// from inside a handler.
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&PortfolioEvent) + 'static,
    {
        self.events.borrow_mut().subscribe(handler);
    }

    /// Hook run after any action that changes the set of token ids, i.e.
    /// whenever prices need a refetch. Holdings edits never run it.
    pub fn on_identifiers_changed<F>(&self, hook: F)
    where
        F: Fn() + 'static,
    {
        *self.on_ids_changed.borrow_mut() = Some(Rc::new(hook));
    }

    fn publish(&self, event: PortfolioEvent) {
        crate::log_trace!(LogComponent::Application("PortfolioCoordinator"), "📣 {}", event.event_type());
        self.events.borrow().publish(event);
    }

    /// Apply an action, persist the result and notify subscribers.
    pub fn dispatch(&self, action: WatchlistAction) -> WatchlistChange {
        let current = self.watchlist.borrow().clone();
        let next = reduce(current.clone(), &action);
        let ids_changed = identifiers_changed(&current, &next);

        if let Err(e) = self.repository.save(&next) {
            get_logger().error(
                LogComponent::Application("PortfolioCoordinator"),
                &format!("Failed to persist watchlist: {}", e),
            );
        }

        let token_count = next.len();
        *self.watchlist.borrow_mut() = next;

        crate::log_debug!(
            LogComponent::Application("PortfolioCoordinator"),
            "{} -> {} tokens (ids changed: {})",
            action.name(),
            token_count,
            ids_changed
        );
        self.publish(PortfolioEvent::WatchlistChanged {
            action: action.name(),
            token_count,
            ids_changed,
        });
        if ids_changed {
            let hook = self.on_ids_changed.borrow().clone();
            if let Some(hook) = hook {
                hook();
            }
        }
        WatchlistChange { ids_changed }
    }

    pub fn update_holdings(&self, id: TokenId, raw: &str) -> WatchlistChange {
        self.dispatch(WatchlistAction::UpdateHoldings {
            id,
            holdings: Holdings::parse(raw),
        })
    }

    pub fn remove_token(&self, id: TokenId) -> WatchlistChange {
        self.dispatch(WatchlistAction::RemoveToken(id))
    }

    /// Fetch quotes for every watchlist token in one request.
    ///
    /// Returns `None` when the watchlist is empty and nothing was requested.
    pub async fn refresh_prices(&self) -> Option<SyncOutcome> {
        let ids = self.watchlist.borrow().ids();
        let ticket = self.prices.borrow_mut().begin(ids);
        let Some(ticket) = ticket else {
            let seq = self.prices.borrow().last_issued();
            self.publish(PortfolioEvent::PriceFetchSettled {
                seq,
                outcome: SyncOutcome::Skipped,
            });
            return None;
        };

        self.publish(PortfolioEvent::PriceFetchStarted {
            seq: ticket.seq,
            token_count: ticket.ids.len(),
        });

        let result = self.market.fetch_markets(&ticket.ids).await;
        let now = get_time_provider().current_timestamp();
        let outcome = self.prices.borrow_mut().complete(&ticket, result, now);

        self.publish(PortfolioEvent::PriceFetchSettled {
            seq: ticket.seq,
            outcome,
        });
        Some(outcome)
    }

    /// Update the query and, if it is long enough, run the search.
    ///
    /// Returns `None` when no request was made.
    pub async fn search(&self, query: &str) -> Option<SyncOutcome> {
        let ticket = self.search.borrow_mut().set_query(query);
        self.publish(PortfolioEvent::SearchUpdated);
        let ticket = ticket?;

        let result = self.market.search(&ticket.query).await;
        let outcome = self.search.borrow_mut().complete_search(&ticket, result);
        if outcome != SyncOutcome::Stale {
            self.publish(PortfolioEvent::SearchUpdated);
        }
        Some(outcome)
    }

    pub async fn load_trending(&self) -> SyncOutcome {
        let result = self.market.trending().await;
        let outcome = self.search.borrow_mut().complete_trending(result);
        self.publish(PortfolioEvent::SearchUpdated);
        outcome
    }

    pub fn toggle_candidate(&self, candidate: &TokenCandidate) {
        self.search.borrow_mut().toggle(candidate);
        self.publish(PortfolioEvent::SearchUpdated);
    }

    /// Add the selected candidates to the watchlist and clear the search.
    /// An empty selection changes nothing.
    pub fn confirm_selection(&self) -> WatchlistChange {
        if self.search.borrow().selected().is_empty() {
            return WatchlistChange { ids_changed: false };
        }
        let tokens = self.search.borrow_mut().confirm();
        self.publish(PortfolioEvent::SearchUpdated);
        self.dispatch(WatchlistAction::AddTokens(tokens))
    }

    pub fn reset_search(&self) {
        self.search.borrow_mut().reset();
        self.publish(PortfolioEvent::SearchUpdated);
    }
}
