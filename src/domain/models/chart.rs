use serde::Deserialize;

/// One period of the dashboard's historical trend series.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub period: String,
    pub rdv_count: u32,
    pub feedback_count: u32,
}

/// Pixel-space drawing area for the trend chart. `axis_max` is the scaled
/// upper bound the y axis is drawn against, normally the output of
/// `chart::nice_axis_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    pub axis_max: f64,
}

/// A projected point on the chart canvas. Larger metric values plot higher,
/// so y shrinks as the value grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}
