//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, zoom history navigation,
//! and the theme selector.

use crate::app::{AppState, ApplicationCoordinator};
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Open Profile" button
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Profile" button
    OpenDemoRequested,
}

/// Renders the application header with file controls and zoom history
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Profile").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Lens Profiles", &["lprof", "jsonl", "br"])
                .add_filter("All Files", &["*"]);

            if let Some(dir) = &state.last_profile_dir {
                dialog = dialog.set_directory(dir);
            } else if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                state.last_profile_dir = path.parent().map(|p| p.to_path_buf());
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🎲 Demo Profile").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        if state.profile.profile_data().is_some() {
            let depth = state.range.history_depth();
            if ui
                .add_enabled(depth > 0, egui::Button::new("⬅ Back"))
                .clicked()
            {
                ApplicationCoordinator::zoom_out(state);
            }

            if ui
                .add_enabled(state.range.is_zoomed(), egui::Button::new("⛶ Full Range"))
                .clicked()
            {
                ApplicationCoordinator::reset_view(state);
            }

            if depth > 0 {
                ui.label(format!("Zoom depth: {}", depth));
            }
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
