//! slidr library - Interactive terminal range slider
//!
//! This library exposes the slider control and its host container for
//! embedding and testing purposes.

pub mod app;
pub mod config;
pub mod drag;
pub mod error;
pub mod layout;
pub mod percent;
pub mod pointer;
pub mod slider;
#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use pointer::PointerInput;
pub use slider::Slider;
