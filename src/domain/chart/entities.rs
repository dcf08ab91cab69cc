use super::value_objects::SparklineTrend;
use crate::domain::portfolio::PaletteColor;

/// Ready-to-render 7-day trend line
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    /// SVG `points` attribute, `"x,y x,y ..."`
    pub points: String,
    pub trend: SparklineTrend,
}

impl Sparkline {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One ring segment of the allocation donut
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    /// SVG path data
    pub path: String,
    pub color: PaletteColor,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl DonutSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}
