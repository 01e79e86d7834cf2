//! Ongoing pointer-interaction state.
//!
//! Owns the gesture machine instance, the listener-registration handle it
//! drives through commands, and any in-progress grip drag.

use rlens::{Grip, SelectionGesture, TimeRange};

/// Marker for the installed global move/release listeners.
///
/// At most one gesture owns the listeners at a time. `install` and
/// `uninstall` on [`InteractionState`] are the only mutators; uninstalling
/// when nothing is installed is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct InstalledListeners;

/// An in-progress grip drag over an existing selection.
#[derive(Debug, Clone, Copy)]
pub struct GripDrag {
    /// Which grip is being dragged
    pub grip: Grip,
    /// The selection bounds at drag start
    pub original: TimeRange,
    /// Total pixel delta accumulated since drag start
    pub accumulated_px: f32,
}

/// State related to ongoing pointer interactions.
#[derive(Default)]
pub struct InteractionState {
    /// The range-selection gesture machine
    gesture: SelectionGesture,
    /// Listener registration handle, present while a gesture tracks moves
    listeners: Option<InstalledListeners>,
    /// In-progress grip drag, if any
    grip_drag: Option<GripDrag>,
}

impl InteractionState {
    /// Creates a new interaction state with no active interactions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all interaction state, abandoning any in-progress gesture.
    pub fn reset(&mut self) {
        self.gesture.reset();
        self.listeners = None;
        self.grip_drag = None;
    }

    // ===== Gesture Machine =====

    /// Returns the gesture machine.
    pub fn gesture(&self) -> &SelectionGesture {
        &self.gesture
    }

    /// Returns the gesture machine for event delivery.
    pub fn gesture_mut(&mut self) -> &mut SelectionGesture {
        &mut self.gesture
    }

    // ===== Listener Handle =====

    /// Returns true while the gesture's global listeners are installed.
    pub fn listeners_installed(&self) -> bool {
        self.listeners.is_some()
    }

    /// Installs the global listener handle.
    pub fn install_listeners(&mut self) {
        self.listeners = Some(InstalledListeners);
    }

    /// Uninstalls the listener handle. No-op when already uninstalled.
    pub fn uninstall_listeners(&mut self) {
        self.listeners = None;
    }

    // ===== Grip Drags =====

    /// Returns the in-progress grip drag, if any.
    pub fn grip_drag(&self) -> Option<GripDrag> {
        self.grip_drag
    }

    /// Begins a grip drag from the given selection bounds.
    pub fn begin_grip_drag(&mut self, grip: Grip, original: TimeRange) {
        self.grip_drag = Some(GripDrag {
            grip,
            original,
            accumulated_px: 0.0,
        });
    }

    /// Adds a pixel delta to the in-progress grip drag and returns the
    /// updated session.
    pub fn advance_grip_drag(&mut self, dx: f32) -> Option<GripDrag> {
        if let Some(drag) = self.grip_drag.as_mut() {
            drag.accumulated_px += dx;
        }
        self.grip_drag
    }

    /// Ends the grip drag, returning its final session.
    pub fn end_grip_drag(&mut self) -> Option<GripDrag> {
        self.grip_drag.take()
    }
}
