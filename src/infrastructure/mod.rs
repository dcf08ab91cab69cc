pub mod http;
pub mod services;
pub mod storage;
pub mod wallet;

pub use http::{CoinGeckoClient, GlooHttpClient};
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use storage::{LocalStorageStore, MemoryStore};
pub use wallet::InjectedWallet;
