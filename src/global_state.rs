use crate::application::PortfolioCoordinator;
use crate::domain::{
    events::PortfolioEvent,
    market_data::PriceSync,
    portfolio::Watchlist,
    search::TokenSearch,
    wallet::WalletSession,
};
use crate::infrastructure::{CoinGeckoClient, LocalStorageStore};
use crate::view_state::PageState;
use leptos::*;
use once_cell::sync::OnceCell;
use std::cell::RefCell;
use std::rc::Rc;

pub type AppCoordinator = PortfolioCoordinator<LocalStorageStore, CoinGeckoClient>;

/// Reactive mirrors of the coordinator state, read by the views
pub struct Globals {
    pub watchlist: RwSignal<Watchlist>,
    pub prices: RwSignal<PriceSync>,
    pub search: RwSignal<TokenSearch>,
    pub page: RwSignal<PageState>,
    pub modal_open: RwSignal<bool>,
    pub wallet: RwSignal<WalletSession>,
    pub wallet_error: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        watchlist: create_rw_signal(Watchlist::new()),
        prices: create_rw_signal(PriceSync::new()),
        search: create_rw_signal(TokenSearch::default()),
        page: create_rw_signal(PageState::default()),
        modal_open: create_rw_signal(false),
        wallet: create_rw_signal(WalletSession::default()),
        wallet_error: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub watchlist_signal => watchlist: Watchlist,
    pub prices_signal => prices: PriceSync,
    pub search_signal => search: TokenSearch,
    pub page_signal => page: PageState,
    pub modal_open_signal => modal_open: bool,
    pub wallet_signal => wallet: WalletSession,
    pub wallet_error_signal => wallet_error: Option<String>,
}

thread_local! {
    static COORDINATOR: RefCell<Option<Rc<AppCoordinator>>> = const { RefCell::new(None) };
}

pub fn coordinator() -> Option<Rc<AppCoordinator>> {
    COORDINATOR.with(|slot| slot.borrow().clone())
}

/// Make `coordinator` the app-wide instance and mirror its state into the
/// global signals from now on.
pub fn install_coordinator(coordinator: Rc<AppCoordinator>) {
    let g = globals();
    g.page.set(PageState::new(coordinator.config().page_size));
    g.watchlist.set(coordinator.watchlist());
    g.prices.set(coordinator.price_sync());
    g.search.set(coordinator.search_state());

    let weak = Rc::downgrade(&coordinator);
    coordinator.subscribe(move |event| {
        let Some(coordinator) = weak.upgrade() else {
            return;
        };
        match event {
            PortfolioEvent::WatchlistChanged { .. } => {
                let watchlist = coordinator.watchlist();
                let len = watchlist.len();
                watchlist_signal().set(watchlist);
                page_signal().update(|page| *page = page.clamped(len));
            }
            PortfolioEvent::PriceFetchStarted { .. } | PortfolioEvent::PriceFetchSettled { .. } => {
                prices_signal().set(coordinator.price_sync());
            }
            PortfolioEvent::SearchUpdated => {
                search_signal().set(coordinator.search_state());
            }
        }
    });
    coordinator.on_identifiers_changed(spawn_price_refresh);

    COORDINATOR.with(|slot| *slot.borrow_mut() = Some(coordinator));
}

/// Start a price refresh in the background; a no-op before installation.
pub fn spawn_price_refresh() {
    if let Some(coordinator) = coordinator() {
        spawn_local(async move {
            coordinator.refresh_prices().await;
        });
    }
}
