//! Slider state and input handling
//!
//! The percentage is held privately; every mutation goes through
//! `set_percentage`, which clamps, marks the control dirty for the next
//! render, and reports the derived domain value through the change callback
//! when (and only when) it differs from the last reported value.

use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::drag::DragTracker;
use crate::percent;
use crate::pointer::PointerInput;

/// Default keyboard step, in percentage points per arrow-key press.
pub const DEFAULT_STEP: f64 = 5.0;

/// Accessible-range snapshot of the control, mirrored into the rendered
/// readout and available to automation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSemantics {
    pub role: &'static str,
    pub orientation: &'static str,
    pub min: f64,
    pub max: f64,
    pub now: i64,
}

/// Interactive horizontal range control.
pub struct Slider {
    percentage: f64,
    min: f64,
    max: f64,
    step: f64,
    drag: DragTracker,
    focused: bool,
    dirty: bool,
    last_reported: Option<i64>,
    on_change: Option<Box<dyn FnMut(i64)>>,
}

impl Slider {
    /// Create a slider over `[min, max]` positioned at `initial_value`.
    ///
    /// Out-of-range initial values clamp to the nearest bound.
    pub fn new(min: f64, max: f64, initial_value: f64) -> Self {
        Self {
            percentage: percent::value_to_percent(initial_value, min, max),
            min,
            max,
            step: DEFAULT_STEP,
            drag: DragTracker::new(),
            focused: false,
            dirty: true,
            last_reported: None,
            on_change: None,
        }
    }

    /// Override the keyboard step (percentage points per press).
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Attach the change callback. The current value is reported immediately,
    /// so owners observe the initial state without a synthetic input event.
    pub fn on_change(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self.notify();
        self
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Derived domain value: `round(min + percentage * (max - min) / 100)`.
    pub fn value(&self) -> i64 {
        percent::percent_to_value(self.percentage, self.min, self.max)
    }

    pub fn semantics(&self) -> RangeSemantics {
        RangeSemantics {
            role: "slider",
            orientation: "horizontal",
            min: self.min,
            max: self.max,
            now: self.value(),
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Whether visual state changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Pointer/touch press on the track: acquire the drag and jump to the
    /// pressed position.
    pub fn begin_drag(&mut self, pointer: PointerInput, track: Rect) {
        self.drag.begin();
        self.set_percentage(percent::percent_from_x(pointer.x(), track));
    }

    /// Pointer/touch move. Ignored unless a drag is active, so movement after
    /// release never changes the value.
    pub fn drag_to(&mut self, pointer: PointerInput, track: Rect) {
        if !self.drag.is_active() {
            return;
        }
        self.set_percentage(percent::percent_from_x(pointer.x(), track));
    }

    /// Release the drag. Unconditional and idempotent; valid even when the
    /// pointer went up outside the control.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Arrow-key step while focused. Left/Down decrease, Right/Up increase.
    /// Operates regardless of drag state. Returns whether the key was
    /// consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if !self.focused {
            return false;
        }

        match code {
            KeyCode::Left | KeyCode::Down => {
                self.set_percentage(self.percentage - self.step);
                true
            }
            KeyCode::Right | KeyCode::Up => {
                self.set_percentage(self.percentage + self.step);
                true
            }
            _ => false,
        }
    }

    /// Move the track position. Clamps into `[0, 100]`, marks the control
    /// dirty when the position changed, and reports the derived value.
    pub fn set_percentage(&mut self, percentage: f64) {
        let clamped = percent::clamp_percent(percentage);
        if clamped != self.percentage {
            self.percentage = clamped;
            self.dirty = true;
        }
        self.notify();
    }

    /// Invoke the change callback iff the derived value differs from the last
    /// reported one, so each input event reports at most once and idempotent
    /// repeats report nothing.
    fn notify(&mut self) {
        let value = self.value();
        if self.last_reported == Some(value) {
            return;
        }
        self.last_reported = Some(value);
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}

#[cfg(test)]
#[path = "slider_state_tests.rs"]
mod slider_state_tests;
