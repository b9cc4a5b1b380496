//! Tests for mouse event routing

use ratatui::crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::test_utils::test_helpers::{left_down, left_drag, left_up, mouse, test_app};

use super::handle_mouse_event;

/// App with a 20-column track recorded at (10, 3), as if it had rendered.
fn laid_out_app() -> App {
    let mut app = test_app();
    app.layout_regions.slider_track = Some(Rect::new(10, 3, 20, 1));
    app
}

#[test]
fn test_press_on_track_starts_drag_and_jumps() {
    let mut app = laid_out_app();

    // Midpoint of the 20-column track
    handle_mouse_event(&mut app, left_down(20, 3));

    assert!(app.slider.is_dragging());
    assert!(app.slider.is_focused());
    assert_eq!(app.value(), 50);
}

#[test]
fn test_press_outside_track_blurs_the_slider() {
    let mut app = laid_out_app();

    handle_mouse_event(&mut app, left_down(0, 0));

    assert!(!app.slider.is_focused());
    assert!(!app.slider.is_dragging());
    assert_eq!(app.value(), 0);
}

#[test]
fn test_drag_follows_pointer_until_release() {
    let mut app = laid_out_app();

    handle_mouse_event(&mut app, left_down(10, 3));
    assert_eq!(app.value(), 0);

    handle_mouse_event(&mut app, left_drag(15, 3));
    assert_eq!(app.value(), 25);

    handle_mouse_event(&mut app, left_drag(30, 3));
    assert_eq!(app.value(), 100);

    handle_mouse_event(&mut app, left_up(30, 3));
    assert!(!app.slider.is_dragging());
}

#[test]
fn test_drag_tracks_pointer_off_the_track_row() {
    let mut app = laid_out_app();
    handle_mouse_event(&mut app, left_down(20, 3));

    // Pointer wanders above the track mid-drag; x still drives the value
    handle_mouse_event(&mut app, left_drag(25, 0));

    assert_eq!(app.value(), 75);
}

#[test]
fn test_release_outside_track_still_ends_drag() {
    let mut app = laid_out_app();
    handle_mouse_event(&mut app, left_down(20, 3));

    handle_mouse_event(&mut app, left_up(0, 0));

    assert!(!app.slider.is_dragging());
}

#[test]
fn test_moves_without_a_press_are_ignored() {
    let mut app = laid_out_app();

    handle_mouse_event(&mut app, left_drag(25, 3));

    assert_eq!(app.value(), 0);
    assert!(!app.slider.is_dragging());
}

#[test]
fn test_moves_after_release_are_ignored() {
    let mut app = laid_out_app();

    handle_mouse_event(&mut app, left_down(20, 3));
    handle_mouse_event(&mut app, left_up(20, 3));
    handle_mouse_event(&mut app, left_drag(10, 3));
    handle_mouse_event(&mut app, left_drag(29, 3));

    assert_eq!(app.value(), 50);
}

#[test]
fn test_press_before_first_render_is_ignored() {
    let mut app = test_app();

    handle_mouse_event(&mut app, left_down(20, 3));

    assert_eq!(app.value(), 0);
    assert!(!app.slider.is_dragging());
}

#[test]
fn test_non_left_buttons_and_scroll_are_ignored() {
    let mut app = laid_out_app();

    handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Right), 20, 3));
    handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 20, 3));
    handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 25, 3));

    assert_eq!(app.value(), 0);
    assert!(!app.slider.is_dragging());
}
