//! Timeline panel UI rendering
//!
//! Draws the ruler, the track rows, and the selection and cursor overlays,
//! and routes pointer input through the gesture machine.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::selection_overlay::{
    overlay_layout, render_cursor_overlay, render_selection_overlay,
};
use crate::rendering::time_axis_renderer::render_time_axis;
use crate::rendering::track_renderer::{render_track_row, TRACK_GUTTER_WIDTH, TRACK_ROW_HEIGHT};
use crate::ui::input::{handle_timeline_input, TimelineInputResult};
use eframe::egui;
use rlens::ThemeColors;

/// Height of the time ruler at the top of the timeline.
pub const RULER_HEIGHT: f32 = 24.0;

/// Result of user interaction with the timeline panel.
pub enum TimelinePanelInteraction {
    /// A track row received a plain click
    TrackClicked { track_id: u64 },
}

/// Renders the timeline panel with ruler, track rows, and overlays.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `ctx` - The egui context for input access
/// * `state` - Mutable reference to application state
/// * `loader` - The async loader, for the loading indicator
/// * `theme_colors` - The color palette for the current theme
/// * `get_span_color` - Maps a span category to a bar color
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
    get_span_color: impl Fn(&str) -> egui::Color32,
) -> Option<TimelinePanelInteraction> {
    if loader.is_loading() {
        ui.centered_and_justified(|ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading profile...");
            });
        });
        return None;
    }

    if state.profile.profile_data().is_none() {
        ui.centered_and_justified(|ui| {
            ui.label("No profile loaded. Open a profile or generate a demo.");
        });
        return None;
    }

    let canvas_rect = ui.available_rect_before_wrap();
    // Claim the whole area; input is read from the raw pointer state below
    let _canvas_response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

    // Lane area: everything to the right of the name gutter. The ruler,
    // the span bars, and the gesture all share this x-mapping.
    let lane_rect = egui::Rect::from_min_max(
        egui::pos2(canvas_rect.left() + TRACK_GUTTER_WIDTH, canvas_rect.top()),
        canvas_rect.max,
    );
    let ruler_rect = egui::Rect::from_min_max(
        lane_rect.min,
        egui::pos2(lane_rect.right(), lane_rect.top() + RULER_HEIGHT),
    );

    let committed = state.range.committed();
    let zero_at = state.range.zero_at();

    render_time_axis(ui, ruler_rect, committed, zero_at);

    let track_count = state
        .profile
        .profile_data()
        .map(|d| d.tracks.len())
        .unwrap_or(0);
    for index in 0..track_count {
        let row_top = canvas_rect.top() + RULER_HEIGHT + index as f32 * TRACK_ROW_HEIGHT;
        if row_top > canvas_rect.bottom() {
            break;
        }
        let row_rect = egui::Rect::from_min_max(
            egui::pos2(canvas_rect.left(), row_top),
            egui::pos2(canvas_rect.right(), row_top + TRACK_ROW_HEIGHT),
        );
        let Some(data) = state.profile.profile_data() else {
            break;
        };
        let track = &data.tracks[index];
        let is_selected = state.selection.selected_track_id() == Some(track.id);
        render_track_row(
            ui,
            row_rect,
            track,
            committed,
            is_selected,
            theme_colors,
            &get_span_color,
        );
    }

    // Overlays draw above the rows
    let layout = render_selection_overlay(
        ctx,
        lane_rect,
        state.selection.preview(),
        committed,
        theme_colors,
    );
    if let (Some(pos), Some(time)) = (state.selection.hover_pos(), state.selection.hover_time()) {
        render_cursor_overlay(ctx, lane_rect, pos, time, zero_at, theme_colors);
    }

    // Input runs against the geometry just drawn; the preview it updates is
    // rendered next frame.
    let layout = layout.or_else(|| overlay_layout(lane_rect, state.selection.preview(), committed));
    match handle_timeline_input(ctx, lane_rect, layout, state) {
        TimelineInputResult::ClickPropagated { pos } => {
            track_at(state, canvas_rect, pos).map(|track_id| TimelinePanelInteraction::TrackClicked { track_id })
        }
        TimelineInputResult::None => None,
    }
}

/// Maps a propagated click position to the track row under it.
fn track_at(state: &AppState, canvas_rect: egui::Rect, pos: egui::Pos2) -> Option<u64> {
    let data = state.profile.profile_data()?;
    let y = pos.y - canvas_rect.top() - RULER_HEIGHT;
    if y < 0.0 {
        return None;
    }
    let index = (y / TRACK_ROW_HEIGHT) as usize;
    data.tracks.get(index).map(|t| t.id)
}
