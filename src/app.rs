//! The host container
//!
//! Owns a single slider, wires its change callback to application state, and
//! routes terminal input events to it.

mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

// Re-export public types
pub use app_state::App;
