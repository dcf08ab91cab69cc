//! EIP-1193 adapter over the injected `window.ethereum` provider.

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::wallet::{WalletConnector, WalletSession};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Parse a provider chain id (`"0x89"`, or a plain decimal string).
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

pub fn chain_id_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}

fn wallet_err(context: &str, e: JsValue) -> AppError {
    let detail = Reflect::get(&e, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    AppError::Wallet(format!("{}: {}", context, detail))
}

#[derive(Debug, Clone)]
pub struct InjectedWallet {
    supported_chain_ids: Vec<u64>,
}

impl InjectedWallet {
    pub fn new(supported_chain_ids: Vec<u64>) -> Self {
        Self { supported_chain_ids }
    }

    /// Whether a provider is injected at all.
    pub fn is_available() -> bool {
        Self::provider().is_ok()
    }

    fn provider() -> AppResult<JsValue> {
        let provider = Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum"))
            .map_err(|e| wallet_err("provider lookup", e))?;
        if provider.is_undefined() || provider.is_null() {
            return Err(AppError::Wallet("no injected wallet found".to_string()));
        }
        Ok(provider)
    }

    async fn request(&self, method: &str, params: Option<Array>) -> AppResult<JsValue> {
        let provider = Self::provider()?;
        let request: Function = Reflect::get(&provider, &JsValue::from_str("request"))
            .map_err(|e| wallet_err(method, e))?
            .dyn_into()
            .map_err(|_| AppError::Wallet("provider has no request()".to_string()))?;

        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(|e| wallet_err(method, e))?;
        if let Some(params) = params {
            Reflect::set(&args, &JsValue::from_str("params"), &params)
                .map_err(|e| wallet_err(method, e))?;
        }

        let promise: Promise = request
            .call1(&provider, &args)
            .map_err(|e| wallet_err(method, e))?
            .dyn_into()
            .map_err(|_| AppError::Wallet(format!("{} did not return a promise", method)))?;
        JsFuture::from(promise).await.map_err(|e| wallet_err(method, e))
    }

    async fn session_for(&self, accounts_method: &str) -> AppResult<WalletSession> {
        let accounts = Array::from(&self.request(accounts_method, None).await?);
        let Some(address) = accounts.get(0).as_string() else {
            return Ok(WalletSession::disconnected());
        };

        let raw_chain = self.request("eth_chainId", None).await?;
        let chain_id = raw_chain
            .as_string()
            .as_deref()
            .and_then(parse_chain_id)
            .ok_or_else(|| AppError::Wallet(format!("unexpected chain id {:?}", raw_chain)))?;

        get_logger().info(
            LogComponent::Infrastructure("Wallet"),
            &format!("Account on chain {}", chain_id),
        );
        Ok(WalletSession::connected(address, chain_id, &self.supported_chain_ids))
    }
}

impl WalletConnector for InjectedWallet {
    async fn connect(&self) -> AppResult<WalletSession> {
        self.session_for("eth_requestAccounts").await
    }

    async fn restore(&self) -> AppResult<WalletSession> {
        if !Self::is_available() {
            return Ok(WalletSession::disconnected());
        }
        self.session_for("eth_accounts").await
    }

    async fn switch_to_supported_chain(&self) -> AppResult<WalletSession> {
        let target = self
            .supported_chain_ids
            .first()
            .copied()
            .ok_or_else(|| AppError::Wallet("no supported chains configured".to_string()))?;

        let param = Object::new();
        Reflect::set(
            &param,
            &JsValue::from_str("chainId"),
            &JsValue::from_str(&chain_id_hex(target)),
        )
        .map_err(|e| wallet_err("wallet_switchEthereumChain", e))?;
        self.request("wallet_switchEthereumChain", Some(Array::of1(&param)))
            .await?;
        self.session_for("eth_accounts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ids_parse_hex_and_decimal() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0x89"), Some(137));
        assert_eq!(parse_chain_id("8453"), Some(8453));
        assert_eq!(parse_chain_id("0xzz"), None);
        assert_eq!(chain_id_hex(42161), "0xa4b1");
    }
}
