//! Asynchronous profile file loading.
//!
//! Parses profile files in a background thread, keeping the GUI responsive
//! while large captures are read and decompressed.

use crate::io::LoadingState;
use eframe::egui;
use rlens::{generate_demo_profile, parse_profile, ProfileData};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Seed used for the in-memory demo profile.
const DEMO_SEED: u64 = 42;
const DEMO_SPANS_PER_TRACK: usize = 400;

/// Result of a completed profile loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded profile
        data: ProfileData,
        /// Path to the file that was loaded (None for demo profiles)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of profile files.
///
/// Coordinates a background parsing thread with the main GUI thread. Call
/// `check_completion()` once per frame to pick up results.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,
    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<ProfileData, String>>>,
    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a profile file asynchronously from the specified path.
    ///
    /// # Arguments
    /// * `path` - Path to the profile file to load
    /// * `ctx` - egui context for requesting repaints when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = parse_profile(&path).map_err(|e| format!("{:#}", e));

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Receiver may be gone if a newer load superseded this one
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Checks for loading completion and returns the result if available.
    ///
    /// Called once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = self.loading_receiver.as_ref() else {
            return LoadResult::None;
        };

        match receiver.try_recv() {
            Ok(Ok(data)) => {
                self.loading_receiver = None;
                let path = self.pending_load_path.take();
                LoadResult::Success { data, path }
            }
            Ok(Err(error)) => {
                self.loading_receiver = None;
                self.pending_load_path = None;
                LoadResult::Error(error)
            }
            Err(_) => LoadResult::None,
        }
    }

    /// Generates the in-memory demo profile.
    pub fn load_demo_profile(&self) -> ProfileData {
        generate_demo_profile(DEMO_SEED, DEMO_SPANS_PER_TRACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_starts_idle() {
        let mut loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_demo_profile_loads() {
        let loader = AsyncLoader::new();
        let data = loader.load_demo_profile();
        assert!(data.span_count() > 0);
        assert!(data.extent().duration() > 0.0);
    }
}
