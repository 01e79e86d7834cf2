//! Track row rendering.
//!
//! Draws one timeline row per track: a name gutter on the left and span
//! bars mapped into the committed range on the right.

use crate::utils::content_rect;
use eframe::egui;
use rlens::{time_to_pixel, ThemeColors, TimeRange, Track};

/// Width of the track name gutter in pixels.
pub const TRACK_GUTTER_WIDTH: f32 = 140.0;

/// Height of one track row in pixels.
pub const TRACK_ROW_HEIGHT: f32 = 32.0;

/// Renders a single track row.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `row_rect` - The full row area, gutter included
/// * `track` - The track to draw
/// * `committed` - The committed time range currently displayed
/// * `is_selected` - Whether this track is the selected one
/// * `theme_colors` - The color palette for the current theme
/// * `get_span_color` - Maps a span category to a bar color
pub fn render_track_row(
    ui: &egui::Ui,
    row_rect: egui::Rect,
    track: &Track,
    committed: TimeRange,
    is_selected: bool,
    theme_colors: &ThemeColors,
    get_span_color: &impl Fn(&str) -> egui::Color32,
) {
    let painter = ui.painter();

    if is_selected {
        painter.rect_filled(row_rect, 0.0, theme_colors.selection);
    }

    // Name gutter
    let gutter_rect = egui::Rect::from_min_max(
        row_rect.min,
        egui::pos2(row_rect.left() + TRACK_GUTTER_WIDTH, row_rect.bottom()),
    );
    painter.text(
        egui::pos2(gutter_rect.left() + 6.0, gutter_rect.center().y),
        egui::Align2::LEFT_CENTER,
        &track.name,
        egui::FontId::proportional(12.0),
        if is_selected {
            theme_colors.text_strong
        } else {
            theme_colors.text
        },
    );

    // Span lane to the right of the gutter
    let lane_rect = egui::Rect::from_min_max(
        egui::pos2(gutter_rect.right(), row_rect.top()),
        row_rect.max,
    );
    if lane_rect.width() <= 0.0 || committed.duration() <= 0.0 {
        return;
    }

    let lane = content_rect(lane_rect);
    let bar_top = lane_rect.top() + 4.0;
    let bar_bottom = lane_rect.bottom() - 4.0;

    for span in &track.spans {
        // Skip spans entirely outside the committed window
        if span.end < committed.start || span.start > committed.end {
            continue;
        }
        let x0 = time_to_pixel(committed.clamp(span.start), lane, committed);
        let x1 = time_to_pixel(committed.clamp(span.end), lane, committed);

        // Keep sub-pixel spans visible
        let x1 = x1.max(x0 + 1.0);

        let bar = egui::Rect::from_min_max(egui::pos2(x0, bar_top), egui::pos2(x1, bar_bottom));
        painter.rect_filled(bar, 2.0, get_span_color(&span.category));
    }

    // Row separator
    painter.line_segment(
        [
            egui::pos2(row_rect.left(), row_rect.bottom()),
            egui::pos2(row_rect.right(), row_rect.bottom()),
        ],
        egui::Stroke::new(1.0, theme_colors.border.gamma_multiply(0.4)),
    );
}
