//! Wallet connection states as reported by the external wallet provider.
//!
//! Nothing here signs or verifies anything; the button only mirrors what the
//! provider says.

use crate::domain::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
    pub display_name: String,
}

impl WalletAccount {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            display_name: short_address(&address),
            address,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: u64,
    pub unsupported: bool,
}

impl ChainInfo {
    pub fn new(id: u64, supported_chain_ids: &[u64]) -> Self {
        Self {
            id,
            unsupported: !supported_chain_ids.contains(&id),
        }
    }
}

/// Everything the provider exposes about the current connection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletSession {
    pub mounted: bool,
    /// `None` when the provider does not do sign-in authentication
    pub authentication: Option<AuthenticationStatus>,
    pub account: Option<WalletAccount>,
    pub chain: Option<ChainInfo>,
}

impl WalletSession {
    /// Mounted session with no account.
    pub fn disconnected() -> Self {
        Self {
            mounted: true,
            ..Self::default()
        }
    }

    pub fn connected(address: impl Into<String>, chain_id: u64, supported_chain_ids: &[u64]) -> Self {
        Self {
            mounted: true,
            authentication: None,
            account: Some(WalletAccount::new(address)),
            chain: Some(ChainInfo::new(chain_id, supported_chain_ids)),
        }
    }

    pub fn status(&self) -> WalletStatus {
        let ready = self.mounted && self.authentication != Some(AuthenticationStatus::Loading);
        if !ready {
            return WalletStatus::NotReady;
        }
        let authenticated = matches!(
            self.authentication,
            None | Some(AuthenticationStatus::Authenticated)
        );
        match (&self.account, &self.chain) {
            (Some(account), Some(chain)) if authenticated => {
                if chain.unsupported {
                    WalletStatus::WrongNetwork { chain_id: chain.id }
                } else {
                    WalletStatus::Connected {
                        display_name: account.display_name.clone(),
                    }
                }
            }
            _ => WalletStatus::Disconnected,
        }
    }
}

/// What the wallet button renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletStatus {
    /// Hidden and inert until the provider has mounted.
    NotReady,
    Disconnected,
    WrongNetwork { chain_id: u64 },
    Connected { display_name: String },
}

/// `0x1234…cdef` style label; short inputs are returned as-is.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// External wallet provider
#[allow(async_fn_in_trait)]
pub trait WalletConnector {
    /// Prompt the user to connect.
    async fn connect(&self) -> AppResult<WalletSession>;

    /// Look up an already-authorized account without prompting.
    async fn restore(&self) -> AppResult<WalletSession>;

    /// Ask the provider to move to a supported chain.
    async fn switch_to_supported_chain(&self) -> AppResult<WalletSession>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address_keeps_prefix_and_suffix() {
        assert_eq!(
            short_address("0x52908400098527886E0F7030069857D2E4169EE7"),
            "0x5290…9EE7"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
