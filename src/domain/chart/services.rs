use super::entities::{DonutSlice, Sparkline};
use super::value_objects::{DonutGeometry, Point, SparklineBox, SparklineTrend};
use crate::domain::portfolio::Allocation;

/// Scale a price series into `bounds`, oldest point on the left.
///
/// A flat series is drawn along the vertical middle.
pub fn sparkline_points(prices: &[f64], bounds: SparklineBox) -> String {
    let finite: Vec<f64> = prices.iter().copied().filter(|p| p.is_finite()).collect();
    if finite.is_empty() {
        return String::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let step = if finite.len() > 1 {
        bounds.width / (finite.len() - 1) as f64
    } else {
        0.0
    };

    finite
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let y = if range > 0.0 {
                bounds.height - (price - min) / range * bounds.height
            } else {
                bounds.height / 2.0
            };
            Point { x: i as f64 * step, y }.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sparkline(prices: &[f64], change_24h_percent: f64, bounds: SparklineBox) -> Sparkline {
    Sparkline {
        points: sparkline_points(prices, bounds),
        trend: SparklineTrend::from_change(change_24h_percent),
    }
}

/// Ring segments for the allocation donut, clockwise from 12 o'clock.
///
/// Slices are separated by the geometry's padding angle. A single allocation
/// is drawn as a full ring.
pub fn donut_slices(allocations: &[Allocation], geometry: &DonutGeometry) -> Vec<DonutSlice> {
    let positive: Vec<&Allocation> = allocations
        .iter()
        .filter(|a| a.value.is_finite() && a.value > 0.0)
        .collect();
    let total: f64 = positive.iter().map(|a| a.value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    if let [only] = positive.as_slice() {
        return vec![DonutSlice {
            path: full_ring_path(geometry),
            color: only.color,
            start_angle: 0.0,
            end_angle: 360.0,
        }];
    }

    let padding = geometry.padding_angle.max(0.0);
    let available = (360.0 - padding * positive.len() as f64).max(0.0);
    let mut angle = 0.0;
    positive
        .into_iter()
        .map(|allocation| {
            let sweep = allocation.value / total * available;
            let slice = DonutSlice {
                path: ring_segment_path(geometry, angle, angle + sweep),
                color: allocation.color,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep + padding;
            slice
        })
        .collect()
}

fn ring_segment_path(geometry: &DonutGeometry, start: f64, end: f64) -> String {
    let large_arc = if end - start > 180.0 { 1 } else { 0 };
    let outer_start = geometry.point(geometry.outer_radius, start);
    let outer_end = geometry.point(geometry.outer_radius, end);
    let inner_end = geometry.point(geometry.inner_radius, end);
    let inner_start = geometry.point(geometry.inner_radius, start);
    format!(
        "M {} A {r} {r} 0 {large} 1 {} L {} A {ir} {ir} 0 {large} 0 {} Z",
        outer_start,
        outer_end,
        inner_end,
        inner_start,
        r = geometry.outer_radius,
        ir = geometry.inner_radius,
        large = large_arc,
    )
}

/// Two half-circle arcs per radius; rendered with `fill-rule="evenodd"`.
fn full_ring_path(geometry: &DonutGeometry) -> String {
    let ring = |radius: f64, sweep: u8| {
        let top = geometry.point(radius, 0.0);
        let bottom = geometry.point(radius, 180.0);
        format!(
            "M {top} A {radius} {radius} 0 1 {sweep} {bottom} A {radius} {radius} 0 1 {sweep} {top}",
        )
    };
    format!(
        "{} {} Z",
        ring(geometry.outer_radius, 1),
        ring(geometry.inner_radius, 0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_sits_in_the_middle() {
        let points = sparkline_points(&[5.0, 5.0, 5.0], SparklineBox::new(10.0, 20.0));
        assert_eq!(points, "0.00,10.00 5.00,10.00 10.00,10.00");
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(sparkline(&[], 1.0, SparklineBox::default()).is_empty());
    }
}
