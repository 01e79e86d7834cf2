//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying profile metadata and the
//! current range readout.

use crate::app::AppState;
use crate::utils::{format_memory_mb, format_time, get_current_memory_mb};
use eframe::egui;
use egui::RichText;
use rlens::PreviewSelection;

/// Renders the status panel at the bottom of the window with profile
/// metadata and range information
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(data) = state.profile.profile_data() {
            ui.label(RichText::new("|").strong());

            let product = data.metadata.product().unwrap_or("Unknown");
            let track_count = data.tracks.len();
            let span_count = data.span_count();
            let source = state
                .profile
                .file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "demo".to_string());

            ui.label(RichText::new(format!(
                "{} | {} | Tracks: {} | Spans: {}",
                product, source, track_count, span_count
            )).strong());

            let zero_at = state.range.zero_at();
            let committed = state.range.committed();
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!(
                "View: {} .. {}",
                format_time(committed.start - zero_at),
                format_time(committed.end - zero_at)
            )).strong());

            if let PreviewSelection::Active { start, end, .. } = state.selection.preview() {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!(
                        "Selection: {} .. {} ({})",
                        format_time(start - zero_at),
                        format_time(end - zero_at),
                        format_time(end - start)
                    ))
                    .strong()
                    .color(egui::Color32::YELLOW),
                );
            }
        } else {
            ui.label(RichText::new("| No profile loaded").strong());
        }
    });
}
