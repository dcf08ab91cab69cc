use super::entities::{NewToken, Watchlist, WatchlistEntry};
use super::value_objects::{Holdings, TokenId};

/// Every mutation the watchlist accepts
#[derive(Debug, Clone, PartialEq)]
pub enum WatchlistAction {
    AddTokens(Vec<NewToken>),
    UpdateHoldings { id: TokenId, holdings: Holdings },
    RemoveToken(TokenId),
}

impl WatchlistAction {
    pub fn name(&self) -> &'static str {
        match self {
            WatchlistAction::AddTokens(_) => "AddTokens",
            WatchlistAction::UpdateHoldings { .. } => "UpdateHoldings",
            WatchlistAction::RemoveToken(_) => "RemoveToken",
        }
    }
}

/// Apply an action and return the next watchlist.
///
/// Unknown ids and duplicate additions are silent no-ops.
pub fn reduce(mut state: Watchlist, action: &WatchlistAction) -> Watchlist {
    match action {
        WatchlistAction::AddTokens(tokens) => {
            for token in tokens {
                if !state.contains(&token.id) {
                    state.push(WatchlistEntry::from(token.clone()));
                }
            }
        }
        WatchlistAction::UpdateHoldings { id, holdings } => {
            if let Some(entry) = state.get_mut(id) {
                entry.holdings = Holdings::new(holdings.value());
            }
        }
        WatchlistAction::RemoveToken(id) => {
            state.retain(|entry| &entry.id != id);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_inside_one_batch_are_dropped() {
        let state = reduce(
            Watchlist::new(),
            &WatchlistAction::AddTokens(vec![
                NewToken::new("bitcoin", "Bitcoin", "BTC"),
                NewToken::new("bitcoin", "Bitcoin again", "BTC"),
            ]),
        );
        assert_eq!(state.len(), 1);
        assert_eq!(state.entries()[0].name, "Bitcoin");
    }

    #[test]
    fn added_tokens_start_with_zero_holdings() {
        let state = reduce(
            Watchlist::new(),
            &WatchlistAction::AddTokens(vec![NewToken::new("solana", "Solana", "SOL")]),
        );
        assert_eq!(state.entries()[0].holdings, Holdings::ZERO);
    }
}
