//! Mouse event dispatcher
//!
//! Routes mouse events to the slider. Presses are position-aware; moves
//! during an active drag are routed no matter where on the screen they land,
//! so a drag keeps tracking the pointer after it leaves the track.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};
use crate::pointer::PointerInput;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_press(app, mouse),
        MouseEventKind::Drag(MouseButton::Left) => handle_move(app, mouse),
        // Release anywhere ends the drag, including outside the control
        MouseEventKind::Up(MouseButton::Left) => app.slider.end_drag(),
        _ => {}
    }
}

/// Press inside the track focuses the slider and starts a drag; press
/// anywhere else blurs it.
fn handle_press(app: &mut App, mouse: MouseEvent) {
    match region_at(&app.layout_regions, mouse.column, mouse.row) {
        Some(Region::SliderTrack) => {
            app.slider.set_focused(true);
            if let Some(track) = app.layout_regions.slider_track {
                app.slider.begin_drag(PointerInput::from(&mouse), track);
            }
        }
        None => app.slider.set_focused(false),
    }
}

fn handle_move(app: &mut App, mouse: MouseEvent) {
    let Some(track) = app.layout_regions.slider_track else {
        return;
    };
    // drag_to ignores the move unless a drag is active
    app.slider.drag_to(PointerInput::from(&mouse), track);
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
