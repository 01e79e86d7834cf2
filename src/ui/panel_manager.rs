//! Panel orchestration and layout management.
//!
//! Coordinates the header, timeline, and status panels and forwards their
//! interactions to the application coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{header, status_bar, timeline_panel};
use eframe::egui;
use egui::Color32;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a profile file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the in-memory demo profile
    OpenDemoRequested,
    /// A track row was clicked
    TrackClicked { track_id: u64 },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: Timeline
        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                let get_span_color = |category: &str| -> Color32 {
                    color_mapping::get_category_color(category, &theme_colors)
                };

                if let Some(timeline_interaction) = timeline_panel::render_timeline_panel(
                    ui,
                    ctx,
                    state,
                    loader,
                    &theme_colors,
                    get_span_color,
                ) {
                    interaction = Some(match timeline_interaction {
                        timeline_panel::TimelinePanelInteraction::TrackClicked { track_id } => {
                            PanelInteraction::TrackClicked { track_id }
                        }
                    });
                }
            });

        interaction
    }
}
