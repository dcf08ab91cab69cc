use token_portfolio_wasm::domain::chart::{
    DonutGeometry, SparklineBox, SparklineTrend, donut_slices, sparkline, sparkline_points,
};
use token_portfolio_wasm::domain::portfolio::{Allocation, PaletteColor, TokenId};

fn allocation(id: &str, value: f64, index: usize) -> Allocation {
    Allocation {
        id: TokenId::from(id),
        name: id.to_string(),
        symbol: id.to_uppercase(),
        value,
        color: PaletteColor::for_index(index),
        percent: 0.0,
    }
}

#[test]
fn sparkline_spans_the_box() {
    let points = sparkline_points(&[1.0, 3.0, 2.0], SparklineBox::new(100.0, 40.0));
    assert_eq!(points, "0.00,40.00 50.00,0.00 100.00,20.00");
}

#[test]
fn sparkline_color_follows_change_sign() {
    let rising = sparkline(&[1.0, 2.0], 3.2, SparklineBox::default());
    let falling = sparkline(&[2.0, 1.0], -0.4, SparklineBox::default());
    let flat = sparkline(&[1.0, 1.0], 0.0, SparklineBox::default());

    assert_eq!(rising.trend, SparklineTrend::Up);
    assert_eq!(rising.trend.stroke(), "#00ff00");
    assert_eq!(falling.trend.stroke(), "#ff0000");
    assert_eq!(flat.trend, SparklineTrend::Down);
}

#[test]
fn non_finite_prices_are_skipped() {
    let points = sparkline_points(&[f64::NAN, 1.0, 2.0], SparklineBox::new(10.0, 10.0));
    assert_eq!(points, "0.00,10.00 10.00,0.00");
}

#[test]
fn slices_cover_the_ring_minus_padding() {
    let geometry = DonutGeometry::default();
    let slices = donut_slices(
        &[allocation("bitcoin", 75.0, 0), allocation("ethereum", 25.0, 1)],
        &geometry,
    );

    assert_eq!(slices.len(), 2);
    let swept: f64 = slices.iter().map(|s| s.sweep()).sum();
    assert!((swept - (360.0 - 2.0 * geometry.padding_angle)).abs() < 1e-9);
    assert!((slices[0].sweep() - 3.0 * slices[1].sweep()).abs() < 1e-9);
    assert_eq!(slices[1].start_angle, slices[0].end_angle + geometry.padding_angle);
    assert_eq!(slices[1].color, PaletteColor::MediumPurple);
    assert!(slices[0].path.starts_with("M 64.00,4.00 A 60 60 0 1 1"));
}

#[test]
fn single_allocation_is_a_full_ring() {
    let slices = donut_slices(&[allocation("bitcoin", 10.0, 0)], &DonutGeometry::default());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].sweep(), 360.0);
}

#[test]
fn no_value_no_slices() {
    assert!(donut_slices(&[allocation("bitcoin", 0.0, 0)], &DonutGeometry::default()).is_empty());
    assert!(donut_slices(&[], &DonutGeometry::default()).is_empty());
}

#[test]
fn twelve_o_clock_is_angle_zero() {
    let geometry = DonutGeometry::default();
    assert_eq!(geometry.point(60.0, 0.0).to_string(), "64.00,4.00");
    assert_eq!(geometry.point(60.0, 90.0).to_string(), "124.00,64.00");
    assert_eq!(geometry.view_box(), "0 0 128 128");
}

#[test]
fn overflowing_total_draws_nothing() {
    let slices = donut_slices(
        &[allocation("a", f64::MAX, 0), allocation("b", f64::MAX, 1)],
        &DonutGeometry::default(),
    );
    assert!(slices.is_empty());

    let infinite = donut_slices(
        &[allocation("a", f64::INFINITY, 0), allocation("b", 2.0, 1)],
        &DonutGeometry::default(),
    );
    assert_eq!(infinite.len(), 1);
    assert!(!infinite[0].path.contains("NaN"));
}
