//! Centralized application state for the Lens viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! application's state, keeping invariants local and borrow-checker
//! friendly.

use crate::state::{InteractionState, ProfileState, RangeState, SelectionState, ThemeState};
use std::path::PathBuf;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Profile data and file state
    pub profile: ProfileState,

    /// Shared time origin, committed range, and zoom history
    pub range: RangeState,

    /// Preview selection, track selection, and hover state
    pub selection: SelectionState,

    /// Gesture machine, listener handle, and grip drags
    pub interaction: InteractionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Directory the file dialog opens in, persisted across sessions
    pub last_profile_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            profile: ProfileState::new(),
            range: RangeState::new(),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            theme: ThemeState::new(),
            error_message: None,
            last_profile_dir: None,
        }
    }

    /// Creates a new state with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    /// Resets profile-related state when loading a new profile.
    pub fn reset_profile_state(&mut self) {
        self.profile.clear();
        self.range.reset();
        self.selection.clear();
        self.interaction.reset();
        self.error_message = None;
    }
}
