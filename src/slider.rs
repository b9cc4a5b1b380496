//! The slider control
//!
//! Tracks a single position as a percentage of the track, maps it onto the
//! configured domain range, and reports the derived value to its owner
//! through a change callback.

mod slider_render;
mod slider_state;

// Re-export public types
pub use slider_render::render_track;
pub use slider_state::{DEFAULT_STEP, RangeSemantics, Slider};
