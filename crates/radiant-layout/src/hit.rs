use crate::model::{SunburstLayout, Wedge};
use std::f64::consts::TAU;

/// Finds the wedge containing a polar point, if any.
///
/// Intervals are half-open (`x0 <= a < x1`, `y0 <= r < y1`), so zero-width
/// wedges are addressable in the layout but never hit. Angle convention
/// matches the layout: zero at 12 o'clock, increasing clockwise.
pub fn wedge_at_polar(layout: &SunburstLayout, angle: f64, radius: f64) -> Option<&Wedge> {
    if !angle.is_finite() || !radius.is_finite() || radius < 0.0 {
        return None;
    }
    let a = angle.rem_euclid(TAU);
    layout
        .wedges
        .iter()
        .find(|w| a >= w.x0 && a < w.x1 && radius >= w.y0 && radius < w.y1)
}

/// Cartesian wrapper over `wedge_at_polar`: origin at the chart center,
/// y increasing downwards (screen coordinates), 12 o'clock straight up.
pub fn wedge_at_point(layout: &SunburstLayout, x: f64, y: f64) -> Option<&Wedge> {
    let radius = x.hypot(y);
    let angle = x.atan2(-y);
    wedge_at_polar(layout, angle, radius)
}
