//! Slider track rendering
//!
//! The track fill boundary and the thumb offset are both driven directly by
//! the percentage, so visuals stay in lockstep with state on every redraw.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

use crate::theme;

use super::Slider;

const FILL_GLYPH: &str = "━";
const EMPTY_GLYPH: &str = "─";
const THUMB_GLYPH: &str = "●";

/// Render the horizontal track with its fill and thumb into `area`.
///
/// Only the first row of `area` is used. Zero-sized areas render nothing.
pub fn render_track(frame: &mut Frame, area: Rect, slider: &Slider) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let thumb = thumb_offset(slider.percentage(), area.width);
    let boundary = fill_boundary(slider.percentage(), area.width);
    let thumb_style = if slider.is_focused() {
        theme::slider::THUMB_FOCUSED
    } else {
        theme::slider::THUMB
    };

    let cells: Vec<Span> = (0..area.width)
        .map(|column| {
            if column == thumb {
                Span::styled(THUMB_GLYPH, thumb_style)
            } else if column < boundary {
                Span::styled(FILL_GLYPH, theme::slider::TRACK_FILL)
            } else {
                Span::styled(EMPTY_GLYPH, theme::slider::TRACK_EMPTY)
            }
        })
        .collect();

    frame.render_widget(Line::from(cells), area);
}

/// Thumb cell within a track of `width` cells: `percentage%` of the way along.
pub(crate) fn thumb_offset(percentage: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    ((percentage / 100.0) * f64::from(width - 1)).round() as u16
}

/// First unfilled cell: the fill boundary sits at `percentage%` of the width.
pub(crate) fn fill_boundary(percentage: f64, width: u16) -> u16 {
    ((percentage / 100.0) * f64::from(width)).round() as u16
}

#[cfg(test)]
#[path = "slider_render_tests.rs"]
mod slider_render_tests;
