//! Lens Profile Viewer GUI Application
//!
//! This module provides an interactive graphical viewer for Lens profile files using the egui framework.
//! The viewer features:
//! - Timeline visualization with per-track span bars
//! - Drag-based range selection with adjustable grips and zoom-to-selection

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Asynchronous file loading with loading indicators
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling and color mapping (separated from domain logic)
//! - `io/` - File loading and demo profile generation
//! - `utils/` - Utility functions for formatting and geometry
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level rendering for the ruler, tracks, and overlays
//! - `state/` - State management for ranges, selection, and interactions

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const LAST_DIR_KEY: &str = "last_profile_dir";

/// Main application entry point that initializes and launches the Lens profile viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Lens Profile Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Lens Profile Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(LensViewerApp::new(cc, initial_file)))),
    )
}

/// The main Lens Profile Viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles file loading, gesture commands, and zoom history
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct LensViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for LensViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl LensViewerApp {
    /// Creates a new viewer instance with theme and dialog settings loaded from persistent storage.
    /// Optionally accepts an initial file path to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let mut state = AppState::with_theme(current_theme_name);
        state.last_profile_dir = SettingsCoordinator::try_load_setting::<PathBuf>(cc.storage, LAST_DIR_KEY);

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_profile(&mut self.state, &self.loader);
            }
            ui::panel_manager::PanelInteraction::TrackClicked { track_id } => {
                ApplicationCoordinator::handle_track_click(&mut self.state, track_id);
            }
        }
    }
}

impl eframe::App for LensViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        if let Some(dir) = &self.state.last_profile_dir {
            SettingsCoordinator::save_setting(storage, LAST_DIR_KEY, dir);
        }
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Render all panels and get interaction result
        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
