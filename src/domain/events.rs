use crate::domain::market_data::SyncOutcome;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Events published after every state change
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioEvent {
    WatchlistChanged {
        action: &'static str,
        token_count: usize,
        ids_changed: bool,
    },
    PriceFetchStarted {
        seq: u64,
        token_count: usize,
    },
    PriceFetchSettled {
        seq: u64,
        outcome: SyncOutcome,
    },
    /// Query, results, trending or selection changed.
    SearchUpdated,
}

impl DomainEvent for PortfolioEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PortfolioEvent::WatchlistChanged { .. } => "WatchlistChanged",
            PortfolioEvent::PriceFetchStarted { .. } => "PriceFetchStarted",
            PortfolioEvent::PriceFetchSettled { .. } => "PriceFetchSettled",
            PortfolioEvent::SearchUpdated => "SearchUpdated",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: PortfolioEvent);
}

/// Synchronous in-memory dispatcher; handlers run in subscription order.
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&PortfolioEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&PortfolioEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: PortfolioEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}
