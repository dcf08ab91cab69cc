use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    application::{DashboardView, TokenRow},
    domain::{
        chart::{DonutGeometry, SparklineBox},
        logging::{LogComponent, get_logger},
        market_data::TokenCandidate,
        portfolio::TokenId,
        wallet::{WalletConnector, WalletStatus},
    },
    global_state::{
        coordinator, modal_open_signal, page_signal, prices_signal, search_signal,
        spawn_price_refresh, wallet_error_signal, wallet_signal, watchlist_signal,
    },
    infrastructure::InjectedWallet,
    presentation::{format_change, format_holdings, format_percent, format_price, format_usd},
    time_utils::format_last_updated,
};

const STYLES: &str = r#"
.portfolio-app {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #212124;
    min-height: 100vh;
    padding: 24px;
    color: white;
}
.container { max-width: 1200px; margin: 0 auto; }
.header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.brand { font-size: 20px; font-weight: 700; display: flex; align-items: center; gap: 8px; }
.brand-mark { width: 16px; height: 16px; background: #a9e851; border-radius: 4px; }
.card { background: #27272a; border-radius: 12px; padding: 24px; box-shadow: 0 4px 16px rgba(0,0,0,0.6); }
.summary { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 24px; }
.caption { color: #a1a1aa; text-transform: uppercase; font-size: 12px; }
.total { font-size: 36px; font-weight: 700; margin: 8px 0 4px; }
.muted { color: #71717a; font-size: 12px; }
.donut { width: 160px; height: 160px; }
.allocations { list-style: none; padding: 0; margin: 0; font-size: 14px; }
.allocations li { display: flex; align-items: center; gap: 8px; margin: 4px 0; }
.swatch { width: 12px; height: 12px; border-radius: 50%; display: inline-block; }
.section-header { display: flex; justify-content: space-between; align-items: center; margin: 32px 0 16px; }
.actions { display: flex; gap: 8px; }
.btn { border: none; border-radius: 6px; padding: 8px 16px; cursor: pointer; font-size: 14px; }
.btn.accent { background: #a9e851; color: black; }
.btn.plain { background: #27272a; color: white; }
.btn.danger { background: #ef4444; color: white; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.status { font-size: 14px; margin: 8px 0; }
.status.error { color: #ef4444; }
table { width: 100%; border-collapse: collapse; font-size: 14px; }
th { color: #a1a1aa; text-align: left; padding: 8px 0; border-bottom: 1px solid #3f3f46; }
td { padding: 8px 0; border-bottom: 1px solid #3f3f46; }
.token-cell { display: flex; align-items: center; gap: 8px; }
.token-icon { width: 24px; height: 24px; border-radius: 50%; }
.up { color: #22c55e; }
.down { color: #ef4444; }
.holdings { cursor: pointer; }
.holdings:hover { text-decoration: underline; }
.holdings-input { width: 90px; background: #27272a; color: white; border: 1px solid #71717a; border-radius: 4px; padding: 4px 8px; }
.footer { display: flex; justify-content: space-between; color: #a1a1aa; font-size: 14px; margin-top: 16px; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 50; }
.modal { background: #1a1a1a; border: 1px solid #333; border-radius: 12px; width: 100%; max-width: 440px; max-height: 80vh; display: flex; flex-direction: column; overflow: hidden; }
.modal-section { padding: 16px; border-bottom: 1px solid #3f3f46; }
.modal-title { display: flex; justify-content: space-between; align-items: center; }
.search-input { width: 100%; box-sizing: border-box; background: #27272a; color: white; border: 1px solid #52525b; border-radius: 6px; padding: 10px 12px; }
.candidates { overflow-y: auto; max-height: 20rem; }
.candidate { display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; cursor: pointer; border-bottom: 1px solid #27272a; }
.candidate:hover { background: #27272a; }
.candidate.selected .marker { background: #a9e851; }
.marker { width: 12px; height: 12px; border-radius: 50%; border: 2px solid #52525b; }
.modal-footer { padding: 16px; display: flex; justify-content: space-between; align-items: center; }
"#;

/// Dashboard root
#[component]
pub fn App() -> impl IntoView {
    let dashboard = create_memo(move |_| {
        let page = page_signal().get();
        watchlist_signal().with(|watchlist| {
            prices_signal().with(|prices| DashboardView::compute(watchlist, prices.cache(), page))
        })
    });

    // Initial load; later refreshes follow identifier changes.
    spawn_price_refresh();

    view! {
        <style>{STYLES}</style>
        <div class="portfolio-app">
            <div class="container">
                <Header/>
                <PortfolioTotal dashboard=dashboard/>
                <WatchlistSection dashboard=dashboard/>
            </div>
            <Show when=move || modal_open_signal().get() fallback=|| ()>
                <AddTokenModal/>
            </Show>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="brand">
                <div class="brand-mark"></div>
                "Token Portfolio"
            </span>
            <WalletButton/>
        </header>
    }
}

#[derive(Clone, Copy)]
enum WalletCall {
    Connect,
    Restore,
    SwitchChain,
}

fn spawn_wallet_call(wallet: InjectedWallet, call: WalletCall) {
    spawn_local(async move {
        let result = match call {
            WalletCall::Connect => wallet.connect().await,
            WalletCall::Restore => wallet.restore().await,
            WalletCall::SwitchChain => wallet.switch_to_supported_chain().await,
        };
        match result {
            Ok(session) => {
                wallet_error_signal().set(None);
                wallet_signal().set(session);
            }
            Err(e) => {
                get_logger().warn(LogComponent::Presentation("WalletButton"), &e.to_string());
                wallet_error_signal().set(Some(e.to_string()));
                wallet_signal().update(|session| session.mounted = true);
            }
        }
    });
}

/// Mirrors the injected wallet provider; hidden until it has been probed.
#[component]
fn WalletButton() -> impl IntoView {
    let chain_ids = coordinator()
        .map(|c| c.config().supported_chain_ids.clone())
        .unwrap_or_default();
    let wallet = store_value(InjectedWallet::new(chain_ids));

    spawn_wallet_call(wallet.get_value(), WalletCall::Restore);

    view! {
        <div title=move || wallet_error_signal().get()>
            {move || match wallet_signal().with(|session| session.status()) {
                WalletStatus::NotReady => view! {
                    <button
                        class="btn accent"
                        aria-hidden="true"
                        style="opacity: 0; pointer-events: none; user-select: none;"
                    >
                        "Connect Wallet"
                    </button>
                }
                .into_view(),
                WalletStatus::Disconnected => view! {
                    <button
                        class="btn accent"
                        on:click=move |_| spawn_wallet_call(wallet.get_value(), WalletCall::Connect)
                    >
                        "Connect Wallet"
                    </button>
                }
                .into_view(),
                WalletStatus::WrongNetwork { .. } => view! {
                    <button
                        class="btn danger"
                        on:click=move |_| spawn_wallet_call(wallet.get_value(), WalletCall::SwitchChain)
                    >
                        "Wrong network"
                    </button>
                }
                .into_view(),
                WalletStatus::Connected { display_name } => view! {
                    <button class="btn accent">{display_name}</button>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn PortfolioTotal(dashboard: Memo<DashboardView>) -> impl IntoView {
    let geometry = DonutGeometry::default();

    view! {
        <div class="card summary">
            <div>
                <div class="caption">"Portfolio Total"</div>
                <div class="total">{move || dashboard.with(|d| format_usd(d.total))}</div>
                <div class="muted">
                    "Last updated: "
                    {move || prices_signal().with(|p| format_last_updated(p.last_updated()))}
                </div>
            </div>
            <svg class="donut" viewBox=geometry.view_box()>
                {move || {
                    dashboard.with(|d| {
                        d.slices
                            .iter()
                            .map(|slice| {
                                view! { <path d=slice.path.clone() fill=slice.color.hex().to_string() fill-rule="evenodd"/> }
                            })
                            .collect_view()
                    })
                }}
            </svg>
            <div>
                <div class="caption">"Allocations"</div>
                <ul class="allocations">
                    {move || {
                        dashboard.with(|d| {
                            d.allocations
                                .iter()
                                .map(|a| {
                                    let swatch = format!("background-color: {}", a.color.hex());
                                    view! {
                                        <li>
                                            <span class="swatch" style=swatch></span>
                                            {format!("{} ({})", a.name, a.symbol)}
                                            <span class="muted">{format_percent(a.percent)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn WatchlistSection(dashboard: Memo<DashboardView>) -> impl IntoView {
    let editing = create_rw_signal::<Option<TokenId>>(None);
    let draft = create_rw_signal(String::new());

    let open_modal = move |_| {
        modal_open_signal().set(true);
        if let Some(c) = coordinator() {
            if c.search_state().trending().is_empty() {
                spawn_local(async move {
                    c.load_trending().await;
                });
            }
        }
    };

    let len = move || watchlist_signal().with(|w| w.len());

    view! {
        <div class="section-header">
            <h2>"★ Watchlist"</h2>
            <div class="actions">
                <button class="btn plain" on:click=move |_| spawn_price_refresh()>
                    "Refresh Prices"
                </button>
                <button class="btn accent" on:click=open_modal>
                    "+ Add Token"
                </button>
            </div>
        </div>
        <Show when=move || prices_signal().with(|p| p.is_loading()) fallback=|| ()>
            <p class="status">"Loading..."</p>
        </Show>
        {move || {
            prices_signal()
                .with(|p| p.error().map(str::to_string))
                .map(|error| view! { <p class="status error">{error}</p> })
        }}
        <Show
            when=move || !dashboard.with(DashboardView::is_empty)
            fallback=|| view! { <p class="muted">"Watchlist is empty. Add tokens to get started."</p> }
        >
            <table>
                <thead>
                    <tr>
                        <th>"Token"</th>
                        <th>"Price"</th>
                        <th>"24h %"</th>
                        <th>"Sparkline"</th>
                        <th>"Holdings"</th>
                        <th>"Value"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        dashboard
                            .with(|d| d.rows.clone())
                            .into_iter()
                            .map(|row| view! { <TokenRowView row=row editing=editing draft=draft/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
        <div class="footer">
            <span>{move || dashboard.with(|d| d.range_label.clone())}</span>
            <div class="actions">
                <span>{move || dashboard.with(|d| d.pages_label.clone())}</span>
                <button
                    class="btn plain"
                    disabled=move || !page_signal().with(|p| p.has_prev())
                    on:click=move |_| page_signal().update(|p| *p = p.prev(len()))
                >
                    "Prev"
                </button>
                <button
                    class="btn plain"
                    disabled=move || !page_signal().with(|p| p.has_next(len()))
                    on:click=move |_| page_signal().update(|p| *p = p.next(len()))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TokenRowView(
    row: TokenRow,
    editing: RwSignal<Option<TokenId>>,
    draft: RwSignal<String>,
) -> impl IntoView {
    let id = row.entry.id.clone();
    let holdings = row.entry.holdings.value();
    let bounds = SparklineBox::default();
    let change = row.snapshot.as_ref().map(|s| s.change_24h_percent);
    let change_class = if row.snapshot.as_ref().is_some_and(|s| s.is_rising()) { "up" } else { "down" };
    let price = row.snapshot.as_ref().map(|s| s.price);

    let start_edit = {
        let id = id.clone();
        move |_| {
            draft.set(holdings.to_string());
            editing.set(Some(id.clone()));
        }
    };
    let save = {
        let id = id.clone();
        move |_| {
            if let Some(c) = coordinator() {
                c.update_holdings(id.clone(), &draft.get_untracked());
            }
            editing.set(None);
        }
    };
    let remove = {
        let id = id.clone();
        move |_| {
            if let Some(c) = coordinator() {
                c.remove_token(id.clone());
            }
        }
    };
    let is_editing = {
        let id = id.clone();
        move || editing.with(|current| current.as_ref() == Some(&id))
    };

    view! {
        <tr>
            <td>
                <div class="token-cell">
                    <img class="token-icon" src=row.image().map(str::to_string) alt=""/>
                    {row.entry.name.clone()}
                    <span class="muted">{format!("({})", row.symbol())}</span>
                </div>
            </td>
            <td>{format_price(price)}</td>
            <td class=change_class>{format_change(change)}</td>
            <td>
                <svg width=bounds.width height=bounds.height viewBox=bounds.view_box()>
                    <polyline
                        points=row.sparkline.points.clone()
                        fill="none"
                        stroke=row.sparkline.trend.stroke().to_string()
                        stroke-width="1"
                    />
                </svg>
            </td>
            <td>
                <Show
                    when=is_editing
                    fallback=move || {
                        view! {
                            <span class="holdings" on:click=start_edit.clone()>
                                {format_holdings(holdings)}
                            </span>
                        }
                    }
                >
                    <input
                        class="holdings-input"
                        type="number"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn plain" on:click=save.clone()>"Save"</button>
                </Show>
            </td>
            <td>{format_usd(row.value)}</td>
            <td>
                <button class="btn plain" title="Remove" on:click=remove>"🗑"</button>
            </td>
        </tr>
    }
}

#[component]
fn AddTokenModal() -> impl IntoView {
    let close = move |_| {
        if let Some(c) = coordinator() {
            c.reset_search();
        }
        modal_open_signal().set(false);
    };

    let confirm = move |_| {
        if let Some(c) = coordinator() {
            c.confirm_selection();
        }
        modal_open_signal().set(false);
    };

    let on_query = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        if let Some(c) = coordinator() {
            spawn_local(async move {
                c.search(&query).await;
            });
        }
    };

    let selected_count = move || search_signal().with(|s| s.selected().len());

    // Escape closes the modal
    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "keydown", move |event| {
            let escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                if let Some(c) = coordinator() {
                    c.reset_search();
                }
                modal_open_signal().set(false);
            }
        });
        on_cleanup(move || drop(listener));
    }

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-section modal-title">
                    <h2>"Search + Add Token"</h2>
                    <button class="btn plain" on:click=close>"✕"</button>
                </div>
                <div class="modal-section">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search tokens (e.g., ETH, SOL)..."
                        prop:value=move || search_signal().with(|s| s.query().to_string())
                        on:input=on_query
                    />
                </div>
                <div class="modal-section caption">
                    {move || if search_signal().with(|s| s.query().is_empty()) { "Trending" } else { "Results" }}
                </div>
                <div class="candidates">
                    {move || {
                        search_signal()
                            .with(|s| s.error().map(str::to_string))
                            .map(|error| view! { <p class="status error">{error}</p> })
                    }}
                    <Show when=move || search_signal().with(|s| s.is_loading()) fallback=|| ()>
                        <p class="status muted">"Loading..."</p>
                    </Show>
                    {move || {
                        search_signal()
                            .with(|s| s.visible().to_vec())
                            .into_iter()
                            .map(|candidate| view! { <CandidateRow candidate=candidate/> })
                            .collect_view()
                    }}
                </div>
                <div class="modal-footer">
                    <span class="muted">
                        {move || match selected_count() {
                            0 => String::new(),
                            n => format!("{} selected", n),
                        }}
                    </span>
                    <div class="actions">
                        <button class="btn plain" on:click=close>"Cancel"</button>
                        <button
                            class="btn accent"
                            disabled=move || selected_count() == 0
                            on:click=confirm
                        >
                            "Add to Watchlist"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CandidateRow(candidate: TokenCandidate) -> impl IntoView {
    let id = candidate.id.clone();
    let selected = move || search_signal().with(|s| s.is_selected(&id));
    let image = candidate.image().map(str::to_string);
    let name = candidate.name.clone();
    let symbol = candidate.symbol.to_uppercase();

    view! {
        <div
            class="candidate"
            class:selected=selected
            on:click=move |_| {
                if let Some(c) = coordinator() {
                    c.toggle_candidate(&candidate);
                }
            }
        >
            <div class="token-cell">
                <img class="token-icon" src=image alt=name.clone()/>
                <div>
                    <div>{name}</div>
                    <div class="muted">{symbol}</div>
                </div>
            </div>
            <div class="marker"></div>
        </div>
    }
}
