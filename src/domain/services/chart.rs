use crate::domain::models::chart::{ChartGeometry, ChartPoint};

/// Rounds a raw series maximum up to a readable axis bound.
///
/// Values of five or less always get a 0..5 axis. Above that the bound is a
/// rung of {1, 2, 2.5, 5, 10} times the decade of the value, the smallest
/// rung that still covers the residual; a residual sitting exactly on a rung
/// stays there (87 -> 100, 23 -> 25, 12 -> 20, 20 -> 20).
pub fn nice_axis_max(raw_max: f64) -> f64 {
    if raw_max <= 5.0 {
        return 5.0;
    }

    let magnitude = 10f64.powf(raw_max.log10().floor());
    let residual = raw_max / magnitude;

    let multiplier = if residual > 5.0 {
        10.0
    } else if residual > 2.5 {
        5.0
    } else if residual > 2.0 {
        2.5
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };

    multiplier * magnitude
}

/// Evenly spaced axis labels from `max` down to 0, `tick_count + 1` entries,
/// each rounded to the nearest integer.
pub fn axis_labels(max: f64, tick_count: usize) -> Vec<i64> {
    if tick_count == 0 {
        return vec![max.round() as i64];
    }

    let step = max / tick_count as f64;
    (0..=tick_count)
        .map(|i| (max - step * i as f64).round() as i64)
        .collect()
}

/// Projects a bounded numeric series onto the chart canvas. Points are spread
/// evenly across the width (`width / max(n - 1, 1)`) and the y axis is
/// inverted so larger values plot higher. Callers pass `nice_axis_max` output
/// as the geometry's `axis_max`, which is never below 5.
pub fn project_series_points<T>(
    points: &[T],
    metric: impl Fn(&T) -> f64,
    geometry: &ChartGeometry,
) -> Vec<ChartPoint> {
    let step = geometry.width / points.len().saturating_sub(1).max(1) as f64;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let value = metric(point);
            ChartPoint {
                x: geometry.origin_x + step * i as f64,
                y: geometry.origin_y + geometry.height
                    - (value / geometry.axis_max) * geometry.height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_axis_max_literal_outputs() {
        assert_eq!(nice_axis_max(0.0), 5.0);
        assert_eq!(nice_axis_max(3.0), 5.0);
        assert_eq!(nice_axis_max(5.0), 5.0);
        assert_eq!(nice_axis_max(12.0), 20.0, "residual 1.2 rounds to the 2 rung");
        assert_eq!(nice_axis_max(23.0), 25.0, "residual 2.3 rounds to the 2.5 rung");
        assert_eq!(nice_axis_max(87.0), 100.0);
        assert_eq!(nice_axis_max(156.0), 200.0);
    }

    #[test]
    fn test_nice_axis_max_rung_boundaries_stay_put() {
        assert_eq!(nice_axis_max(10.0), 10.0);
        assert_eq!(nice_axis_max(20.0), 20.0);
        assert_eq!(nice_axis_max(25.0), 25.0);
        assert_eq!(nice_axis_max(50.0), 50.0);
        assert_eq!(nice_axis_max(100.0), 100.0);
    }
}
