//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: file loading workflows, applying gesture
//! commands to the store, and zoom history navigation.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use rlens::Command;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately clears previous profile data to show the loading
    /// indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_profile_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to the state.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                let zero_at = data.metadata.start_time();
                let extent = data.extent();

                state.profile.load_profile(data, path);
                state.range.init(zero_at, extent);
                state.selection.clear();
                state.interaction.reset();
                state.error_message = None;
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading profile: {}", error_msg));
                state.profile.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads the in-memory demo profile.
    pub fn open_demo_profile(state: &mut AppState, loader: &AsyncLoader) {
        let data = loader.load_demo_profile();
        let zero_at = data.metadata.start_time();
        let extent = data.extent();

        state.profile.load_profile(data, None);
        state.range.init(zero_at, extent);
        state.selection.clear();
        state.interaction.reset();
        state.error_message = None;
    }

    /// Applies gesture machine commands to the store, in order.
    ///
    /// Returns true if any command suppressed propagation, in which case
    /// the triggering event must not reach downstream click targets.
    pub fn apply_gesture_commands(state: &mut AppState, commands: &[Command]) -> bool {
        let mut suppressed = false;
        for command in commands {
            match *command {
                Command::Publish(selection) => state.selection.update_preview(selection),
                Command::Commit { start, end } => {
                    state.range.commit_range(start, end);
                    state.selection.clear_preview();
                }
                Command::InstallListeners => state.interaction.install_listeners(),
                Command::UninstallListeners => state.interaction.uninstall_listeners(),
                Command::StopPropagation => suppressed = true,
            }
        }
        suppressed
    }

    /// Handles a plain click on a track row (only reached when the gesture
    /// did not suppress propagation).
    pub fn handle_track_click(state: &mut AppState, track_id: u64) {
        state.selection.toggle_track(track_id);
    }

    /// Pops one committed range off the zoom history.
    pub fn zoom_out(state: &mut AppState) {
        if state.range.pop_committed() {
            state.selection.clear_preview();
        }
    }

    /// Restores the full profile extent.
    pub fn reset_view(state: &mut AppState) {
        state.range.reset_to_full();
        state.selection.clear_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlens::{PreviewSelection, TimeRange};

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let loader = AsyncLoader::new();
        ApplicationCoordinator::open_demo_profile(&mut state, &loader);
        state
    }

    #[test]
    fn test_demo_profile_initializes_range() {
        let state = loaded_state();
        let extent = state.profile.extent();
        assert_eq!(state.range.committed(), extent);
        assert!(extent.duration() > 0.0);
    }

    #[test]
    fn test_publish_and_commit_commands() {
        let mut state = loaded_state();
        let zero_at = state.range.zero_at();

        let suppressed = ApplicationCoordinator::apply_gesture_commands(
            &mut state,
            &[Command::Publish(PreviewSelection::Active {
                start: zero_at + 10.0,
                end: zero_at + 20.0,
                is_modifying: true,
            })],
        );
        assert!(!suppressed);
        assert!(matches!(
            state.selection.preview(),
            PreviewSelection::Active { .. }
        ));

        let suppressed = ApplicationCoordinator::apply_gesture_commands(
            &mut state,
            &[
                Command::Commit {
                    start: 10.0,
                    end: 20.0,
                },
                Command::StopPropagation,
            ],
        );
        assert!(suppressed);
        assert_eq!(
            state.range.committed(),
            TimeRange::new(zero_at + 10.0, zero_at + 20.0)
        );
        assert_eq!(state.selection.preview(), PreviewSelection::None);
    }

    #[test]
    fn test_listener_commands_toggle_handle() {
        let mut state = loaded_state();
        ApplicationCoordinator::apply_gesture_commands(&mut state, &[Command::InstallListeners]);
        assert!(state.interaction.listeners_installed());
        ApplicationCoordinator::apply_gesture_commands(&mut state, &[Command::UninstallListeners]);
        assert!(!state.interaction.listeners_installed());
        // Idempotent uninstall
        ApplicationCoordinator::apply_gesture_commands(&mut state, &[Command::UninstallListeners]);
        assert!(!state.interaction.listeners_installed());
    }

    #[test]
    fn test_zoom_out_restores_previous_window() {
        let mut state = loaded_state();
        let full = state.range.committed();
        ApplicationCoordinator::apply_gesture_commands(
            &mut state,
            &[Command::Commit {
                start: 10.0,
                end: 20.0,
            }],
        );
        assert_ne!(state.range.committed(), full);
        ApplicationCoordinator::zoom_out(&mut state);
        assert_eq!(state.range.committed(), full);
    }

    #[test]
    fn test_track_click_toggles_selection() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_track_click(&mut state, 1);
        assert_eq!(state.selection.selected_track_id(), Some(1));
        ApplicationCoordinator::handle_track_click(&mut state, 1);
        assert_eq!(state.selection.selected_track_id(), None);
    }
}
