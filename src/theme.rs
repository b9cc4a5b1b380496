//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(110, 112, 139);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
}

/// Slider track and thumb styles
pub mod slider {
    use super::*;

    pub const TRACK_FILL: Style = Style::new().fg(palette::PURPLE);
    pub const TRACK_EMPTY: Style = Style::new().fg(palette::TEXT_DIM);
    pub const THUMB: Style = Style::new().fg(palette::TEXT_DIM);
    pub const THUMB_FOCUSED: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
}

/// Value readout line styles
pub mod readout {
    use super::*;

    pub const LABEL: Style = Style::new().fg(palette::TEXT_DIM);
    pub const VALUE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
}

/// Container frame styles
pub mod container {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new().fg(palette::TEXT);
}
