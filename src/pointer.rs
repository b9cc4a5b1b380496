//! Pointer-like input events
//!
//! Mouse and touch interactions differ only in where the horizontal coordinate
//! comes from, so they are modeled as a tagged variant with a single accessor
//! instead of separate code paths per source.

use ratatui::crossterm::event::MouseEvent;

/// A press or move event from any pointer-like source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// Mouse press/move at the given column.
    Mouse { x: u16 },
    /// First changed touch point of a touch-start/move at the given column.
    Touch { x: u16 },
}

impl PointerInput {
    /// Horizontal coordinate, regardless of source.
    pub fn x(self) -> u16 {
        match self {
            Self::Mouse { x } | Self::Touch { x } => x,
        }
    }
}

impl From<&MouseEvent> for PointerInput {
    fn from(event: &MouseEvent) -> Self {
        Self::Mouse { x: event.column }
    }
}
