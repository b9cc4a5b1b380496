//! Container rendering
//!
//! Draws the bordered frame, the range readout, and the slider track, and
//! records the track rect for mouse hit testing.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Block,
};

use super::app_state::App;
use crate::slider;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let border_color = if self.slider.is_focused() {
            theme::container::BORDER_FOCUSED
        } else {
            theme::container::BORDER_UNFOCUSED
        };
        let block = Block::bordered()
            .title(Span::styled(" slidr ", theme::container::TITLE))
            .border_style(Style::new().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Too small to place the readout and the track
        if inner.height < 3 || inner.width < 4 {
            self.layout_regions.slider_track = None;
            return;
        }

        let [readout_row, _, track_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.render_readout(frame, readout_row);

        let track = track_row.inner(Margin::new(1, 0));
        self.layout_regions.slider_track = (track.width > 0).then_some(track);
        slider::render_track(frame, track, &self.slider);
    }

    /// Range readout: role, orientation, and min/max/current value, mirroring
    /// the control's accessible-range semantics.
    fn render_readout(&self, frame: &mut Frame, area: Rect) {
        let semantics = self.slider.semantics();
        let line = Line::from(vec![
            Span::styled(semantics.role, theme::readout::LABEL),
            Span::styled(" · ", theme::readout::LABEL),
            Span::styled(semantics.orientation, theme::readout::LABEL),
            Span::styled(format!(" · min {}", semantics.min), theme::readout::LABEL),
            Span::styled(format!(" · max {}", semantics.max), theme::readout::LABEL),
            Span::styled(format!("  {}", semantics.now), theme::readout::VALUE),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
