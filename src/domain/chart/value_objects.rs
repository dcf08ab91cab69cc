use derive_more::{Constructor, Display};
use strum::AsRefStr;

/// Value Object - SVG viewBox the sparkline is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct SparklineBox {
    pub width: f64,
    pub height: f64,
}

impl Default for SparklineBox {
    fn default() -> Self {
        Self { width: 96.0, height: 32.0 }
    }
}

impl SparklineBox {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Value Object - donut chart dimensions, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct DonutGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding_angle: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            center_x: 64.0,
            center_y: 64.0,
            inner_radius: 40.0,
            outer_radius: 60.0,
            padding_angle: 5.0,
        }
    }
}

impl DonutGeometry {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.center_x * 2.0, self.center_y * 2.0)
    }

    /// Point on a circle; 0 degrees is 12 o'clock, angles grow clockwise.
    pub fn point(&self, radius: f64, angle_deg: f64) -> Point {
        let radians = (angle_deg - 90.0).to_radians();
        Point {
            x: self.center_x + radius * radians.cos(),
            y: self.center_y + radius * radians.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "{:.2},{:.2}", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Value Object - sparkline stroke, picked from the 24h change sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum SparklineTrend {
    #[strum(serialize = "#00ff00")]
    Up,
    #[strum(serialize = "#ff0000")]
    Down,
}

impl SparklineTrend {
    pub fn from_change(change_24h_percent: f64) -> Self {
        if change_24h_percent > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn stroke(&self) -> &str {
        self.as_ref()
    }
}
