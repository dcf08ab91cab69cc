use insta::assert_snapshot;
use token_portfolio_wasm::presentation::{
    format_change, format_holdings, format_percent, format_price, format_usd,
};
use token_portfolio_wasm::time_utils::format_clock;

#[test]
fn usd_amounts() {
    assert_snapshot!(format_usd(31_000.0), @"$31,000.00");
    assert_snapshot!(format_usd(0.0), @"$0.00");
    assert_snapshot!(format_usd(1_234_567.891), @"$1,234,567.89");
    assert_snapshot!(format_usd(f64::NAN), @"$0.00");
}

#[test]
fn quote_prices() {
    assert_snapshot!(format_price(Some(50_000.0)), @"$50,000.00");
    assert_snapshot!(format_price(Some(0.5)), @"$0.50");
    assert_snapshot!(format_price(Some(0.00001234)), @"$0.000012");
    assert_snapshot!(format_price(None), @"--");
}

#[test]
fn changes_holdings_and_shares() {
    assert_snapshot!(format_change(Some(-1.5)), @"-1.50%");
    assert_snapshot!(format_change(Some(2.346)), @"2.35%");
    assert_snapshot!(format_change(None), @"--");
    assert_snapshot!(format_holdings(0.5), @"0.5000");
    assert_snapshot!(format_percent(80.645), @"80.6%");
}

#[test]
fn last_updated_clock() {
    assert_snapshot!(format_clock(14, 3, 7), @"2:03:07 PM");
}
