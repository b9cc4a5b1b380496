//! Drag state tracking
//!
//! Attaching move tracking for an in-progress drag is a resource acquisition
//! that must be matched by a release when the pointer goes up, even when the
//! release happens outside the control. `DragTracker` models that contract as
//! an explicit acquire/release pair: at most one drag is active at a time, and
//! release is idempotent so a stray button-up never leaves stale tracking
//! behind.

/// Two-state machine for an in-progress pointer/touch drag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragTracker {
    active: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the drag. Returns `true` if this call started a fresh drag,
    /// `false` if one was already active.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Release the drag. Returns `true` if a drag was actually released.
    /// Safe to call repeatedly; only the first call after `begin` releases.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
