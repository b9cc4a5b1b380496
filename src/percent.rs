//! Percentage math for the slider track
//!
//! All position state is normalized to a percentage in `[0, 100]` before being
//! mapped onto the configured domain range. Every function here clamps, so
//! out-of-bounds or non-finite intermediate values never reach visual state.

use ratatui::layout::Rect;

/// Clamp a raw percentage into `[0, 100]`, rounded to two decimal places.
///
/// Non-finite inputs (NaN, infinities from degenerate geometry) collapse to
/// the lower bound instead of propagating.
pub fn clamp_percent(percentage: f64) -> f64 {
    if !percentage.is_finite() {
        return 0.0;
    }
    let clamped = percentage.clamp(0.0, 100.0);
    (clamped * 100.0).round() / 100.0
}

/// Horizontal position of `x` within `area`, as a percentage of its width.
///
/// Positions left of the area clamp to 0, right of it to 100. A zero-width
/// area (not yet laid out) yields 0 rather than dividing by zero.
pub fn percent_from_x(x: u16, area: Rect) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    clamp_percent((f64::from(x) - f64::from(area.x)) * 100.0 / f64::from(area.width))
}

/// Map a percentage onto the domain range: `round(min + p * (max - min) / 100)`.
pub fn percent_to_value(percentage: f64, min: f64, max: f64) -> i64 {
    (min + percentage * (max - min) / 100.0).round() as i64
}

/// Inverse of [`percent_to_value`]: where `value` sits within `[min, max]`.
///
/// A degenerate span (`max <= min`) yields 0 instead of a non-finite result.
pub fn value_to_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    clamp_percent((value - min) * 100.0 / span)
}

#[cfg(test)]
#[path = "percent_tests.rs"]
mod percent_tests;
