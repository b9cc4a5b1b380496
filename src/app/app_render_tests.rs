//! Tests for container rendering

use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use crate::test_utils::test_helpers::{test_app, test_app_with_range};

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol())
        .collect()
}

#[test]
fn test_render_records_track_rect() {
    let mut app = test_app();
    let mut terminal = create_test_terminal(40, 7);

    terminal.draw(|frame| app.render(frame)).unwrap();

    // Border eats one cell per side, the track row sits two below the
    // readout, and the track itself is inset one more column per side
    assert_eq!(app.layout_regions.slider_track, Some(Rect::new(2, 3, 36, 1)));
}

#[test]
fn test_readout_shows_range_semantics() {
    let mut app = test_app_with_range(13.0, 23.0, 14.0);
    let mut terminal = create_test_terminal(50, 7);

    terminal.draw(|frame| app.render(frame)).unwrap();

    let readout = row_text(&terminal, 1);
    assert!(readout.contains("slider · horizontal"));
    assert!(readout.contains("min 13"));
    assert!(readout.contains("max 23"));
    assert!(readout.contains("14"));
}

#[test]
fn test_track_thumb_sits_at_current_percentage() {
    let mut app = test_app();
    app.slider.set_percentage(100.0);
    let mut terminal = create_test_terminal(40, 7);

    terminal.draw(|frame| app.render(frame)).unwrap();

    let track = app.layout_regions.slider_track.unwrap();
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(track.right() - 1, track.y)].symbol(), "●");
    assert_eq!(buffer[(track.x, track.y)].symbol(), "━");
}

#[test]
fn test_readout_tracks_value_changes() {
    let mut app = test_app();
    let mut terminal = create_test_terminal(40, 7);

    app.slider.set_percentage(50.0);
    terminal.draw(|frame| app.render(frame)).unwrap();

    assert!(row_text(&terminal, 1).contains("50"));
}

#[test]
fn test_tiny_terminal_renders_without_track() {
    let mut app = test_app();
    let mut terminal = create_test_terminal(10, 2);

    terminal.draw(|frame| app.render(frame)).unwrap();

    assert_eq!(app.layout_regions.slider_track, None);
}
