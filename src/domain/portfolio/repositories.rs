use super::entities::{Watchlist, WatchlistEntry};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, get_logger};
use serde::{Deserialize, Serialize};

/// Durable string slot (browser `localStorage` in production)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

const PERSIST_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedPortfolio {
    version: u32,
    watchlist: Vec<WatchlistEntry>,
}

/// Reads and writes the watchlist blob under one fixed key
pub struct WatchlistRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WatchlistRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Rehydrate the watchlist. Missing, unreadable or corrupt data yields
    /// an empty watchlist.
    pub fn load(&self) -> Watchlist {
        match self.try_load() {
            Ok(Some(watchlist)) => {
                get_logger().info(
                    LogComponent::Domain("WatchlistRepository"),
                    &format!("Rehydrated {} tokens from '{}'", watchlist.len(), self.key),
                );
                watchlist
            }
            Ok(None) => Watchlist::new(),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Domain("WatchlistRepository"),
                    &format!("Discarding persisted watchlist: {}", e),
                );
                Watchlist::new()
            }
        }
    }

    fn try_load(&self) -> AppResult<Option<Watchlist>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let persisted: PersistedPortfolio = serde_json::from_str(&raw)?;
        if persisted.version != PERSIST_VERSION {
            return Err(AppError::Storage(format!(
                "unsupported version {}",
                persisted.version
            )));
        }
        Ok(Some(Watchlist::from_entries(persisted.watchlist)))
    }

    pub fn save(&self, watchlist: &Watchlist) -> AppResult<()> {
        let blob = serde_json::to_string(&PersistedPortfolio {
            version: PERSIST_VERSION,
            watchlist: watchlist.entries().to_vec(),
        })?;
        self.store.set(&self.key, &blob)
    }
}
