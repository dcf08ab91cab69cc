use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::application::PortfolioCoordinator;
use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::{CoinGeckoClient, LocalStorageStore};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Install logging, build the coordinator from stored state and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    let store = LocalStorageStore::new();
    let config = AppConfig::load(&store);
    let market = CoinGeckoClient::new(&config);
    global_state::install_coordinator(Rc::new(PortfolioCoordinator::new(config, store, market)));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Token portfolio initialized");

    leptos::mount_to_body(app::App);
}
