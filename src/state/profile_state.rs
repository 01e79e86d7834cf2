//! Profile data and file state management.

use rlens::{ProfileData, TimeRange};
use std::path::PathBuf;

/// State related to the loaded profile and its time extent.
///
/// Responsibilities:
/// - Managing profile data lifetime
/// - Tracking source file path
/// - Maintaining the profile time extent
#[derive(Default)]
pub struct ProfileState {
    /// The currently loaded profile (if any)
    profile_data: Option<ProfileData>,
    /// Path to the currently loaded file (None for demo profiles)
    file_path: Option<PathBuf>,
    /// Full time extent of the loaded profile
    extent: Option<TimeRange>,
}

impl ProfileState {
    /// Creates a new profile state with no loaded profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads new profile data and caches its extent.
    ///
    /// # Arguments
    /// * `data` - The profile to load
    /// * `path` - Optional file path (None for demo profiles)
    pub fn load_profile(&mut self, data: ProfileData, path: Option<PathBuf>) {
        self.extent = Some(data.extent());
        self.profile_data = Some(data);
        self.file_path = path;
    }

    /// Clears all profile state.
    pub fn clear(&mut self) {
        self.profile_data = None;
        self.file_path = None;
        self.extent = None;
    }

    /// Returns a reference to the loaded profile, if any.
    pub fn profile_data(&self) -> Option<&ProfileData> {
        self.profile_data.as_ref()
    }

    /// Returns the file path of the loaded profile, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the full time extent of the loaded profile.
    pub fn extent(&self) -> TimeRange {
        self.extent.unwrap_or(TimeRange {
            start: 0.0,
            end: 0.0,
        })
    }
}
