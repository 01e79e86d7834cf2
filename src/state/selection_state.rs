//! Preview selection, track selection, and hover state management.

use rlens::PreviewSelection;

/// State related to user selection and hover.
///
/// Responsibilities:
/// - Owning the preview selection published by the gesture machine
/// - Tracking the selected track
/// - Managing hover position and time value for the cursor readout
pub struct SelectionState {
    /// The current preview selection within the committed range
    preview: PreviewSelection,
    /// Currently selected track ID
    selected_track_id: Option<u64>,
    /// Cursor hover position for the vertical cursor line
    cursor_hover_pos: Option<egui::Pos2>,
    /// Time value at the cursor hover position
    cursor_hover_time: Option<f64>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            preview: PreviewSelection::None,
            selected_track_id: None,
            cursor_hover_pos: None,
            cursor_hover_time: None,
        }
    }

    /// Clears all selection and hover state.
    pub fn clear(&mut self) {
        self.preview = PreviewSelection::None;
        self.selected_track_id = None;
        self.cursor_hover_pos = None;
        self.cursor_hover_time = None;
    }

    // ===== Preview Selection =====

    /// Returns the current preview selection.
    pub fn preview(&self) -> PreviewSelection {
        self.preview
    }

    /// Replaces the preview selection.
    ///
    /// Used for in-progress drags, finalized drags, and clearing alike.
    pub fn update_preview(&mut self, selection: PreviewSelection) {
        self.preview = selection;
    }

    /// Clears the preview selection.
    pub fn clear_preview(&mut self) {
        self.preview = PreviewSelection::None;
    }

    // ===== Track Selection =====

    /// Returns the currently selected track ID, if any.
    pub fn selected_track_id(&self) -> Option<u64> {
        self.selected_track_id
    }

    /// Selects a track, or deselects when given the current selection.
    pub fn toggle_track(&mut self, track_id: u64) {
        if self.selected_track_id == Some(track_id) {
            self.selected_track_id = None;
        } else {
            self.selected_track_id = Some(track_id);
        }
    }

    // ===== Hover =====

    /// Returns the current cursor hover position, if any.
    pub fn hover_pos(&self) -> Option<egui::Pos2> {
        self.cursor_hover_pos
    }

    /// Returns the time value at the cursor hover position, if any.
    pub fn hover_time(&self) -> Option<f64> {
        self.cursor_hover_time
    }

    /// Updates the hover readout.
    pub fn set_hover(&mut self, pos: Option<egui::Pos2>, time: Option<f64>) {
        self.cursor_hover_pos = pos;
        self.cursor_hover_time = time;
    }
}
