use token_portfolio_wasm::domain::wallet::{
    AuthenticationStatus, WalletSession, WalletStatus, short_address,
};

const SUPPORTED: &[u64] = &[1, 10, 137];
const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

#[test]
fn hidden_until_mounted() {
    assert_eq!(WalletSession::default().status(), WalletStatus::NotReady);

    let loading = WalletSession {
        authentication: Some(AuthenticationStatus::Loading),
        ..WalletSession::connected(ADDRESS, 1, SUPPORTED)
    };
    assert_eq!(loading.status(), WalletStatus::NotReady);
}

#[test]
fn mounted_without_account_is_disconnected() {
    assert_eq!(WalletSession::disconnected().status(), WalletStatus::Disconnected);

    let unauthenticated = WalletSession {
        authentication: Some(AuthenticationStatus::Unauthenticated),
        ..WalletSession::connected(ADDRESS, 1, SUPPORTED)
    };
    assert_eq!(unauthenticated.status(), WalletStatus::Disconnected);
}

#[test]
fn unsupported_chain_is_wrong_network() {
    assert_eq!(
        WalletSession::connected(ADDRESS, 56, SUPPORTED).status(),
        WalletStatus::WrongNetwork { chain_id: 56 }
    );
}

#[test]
fn connected_shows_short_address() {
    assert_eq!(
        WalletSession::connected(ADDRESS, 137, SUPPORTED).status(),
        WalletStatus::Connected { display_name: "0x5290…9EE7".to_string() }
    );

    let authenticated = WalletSession {
        authentication: Some(AuthenticationStatus::Authenticated),
        ..WalletSession::connected(ADDRESS, 1, SUPPORTED)
    };
    assert!(matches!(authenticated.status(), WalletStatus::Connected { .. }));
}

#[test]
fn short_address_boundaries() {
    assert_eq!(short_address(""), "");
    assert_eq!(short_address("0x12345678"), "0x12345678");
    assert_eq!(short_address("0x123456789"), "0x1234…6789");
}
