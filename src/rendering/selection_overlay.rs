//! Selection overlay rendering.
//!
//! Draws the preview selection over the timeline canvas: the dimmed
//! surround, the selection border, the three drag grips, a duration label,
//! the zoom control, and the hover cursor line.

use crate::utils::{content_rect, format_time};
use eframe::egui;
use egui::Color32;
use rlens::{time_to_pixel, with_alpha, PreviewSelection, ThemeColors, TimeRange};

/// Width of the start/end edge grips in pixels.
pub const EDGE_GRIP_WIDTH: f32 = 8.0;

/// Height of the whole-range move grip bar at the top of the selection.
pub const MOVE_GRIP_HEIGHT: f32 = 12.0;

/// Side length of the square zoom control.
pub const ZOOM_BUTTON_SIZE: f32 = 20.0;

/// Interactive areas of the selection overlay, in screen space.
///
/// Computed by [`overlay_layout`] so the renderer and the input handler
/// always agree on the geometry.
#[derive(Debug, Clone, Copy)]
pub struct OverlayLayout {
    /// The selected region itself
    pub selection: egui::Rect,
    /// Start-edge grip
    pub start_grip: egui::Rect,
    /// Whole-range move grip (top bar)
    pub move_grip: egui::Rect,
    /// End-edge grip
    pub end_grip: egui::Rect,
    /// Zoom control, None when the selection is too narrow to host it
    pub zoom_button: Option<egui::Rect>,
}

/// Computes the overlay geometry for an active selection.
///
/// Returns None when there is no active selection.
pub fn overlay_layout(
    canvas_rect: egui::Rect,
    preview: PreviewSelection,
    committed: TimeRange,
) -> Option<OverlayLayout> {
    let PreviewSelection::Active { start, end, .. } = preview else {
        return None;
    };
    if committed.duration() <= 0.0 || canvas_rect.width() <= 0.0 {
        return None;
    }

    let rect = content_rect(canvas_rect);
    let x0 = time_to_pixel(start, rect, committed);
    let x1 = time_to_pixel(end, rect, committed);

    let selection = egui::Rect::from_min_max(
        egui::pos2(x0, canvas_rect.top()),
        egui::pos2(x1, canvas_rect.bottom()),
    );

    let start_grip = egui::Rect::from_min_max(
        egui::pos2(x0 - EDGE_GRIP_WIDTH / 2.0, canvas_rect.top()),
        egui::pos2(x0 + EDGE_GRIP_WIDTH / 2.0, canvas_rect.bottom()),
    );
    let end_grip = egui::Rect::from_min_max(
        egui::pos2(x1 - EDGE_GRIP_WIDTH / 2.0, canvas_rect.top()),
        egui::pos2(x1 + EDGE_GRIP_WIDTH / 2.0, canvas_rect.bottom()),
    );
    let move_grip = egui::Rect::from_min_max(
        egui::pos2(x0 + EDGE_GRIP_WIDTH / 2.0, canvas_rect.top()),
        egui::pos2(
            (x1 - EDGE_GRIP_WIDTH / 2.0).max(x0 + EDGE_GRIP_WIDTH / 2.0),
            canvas_rect.top() + MOVE_GRIP_HEIGHT,
        ),
    );

    // The zoom control needs room inside the selection
    let zoom_button = if selection.width() >= ZOOM_BUTTON_SIZE + EDGE_GRIP_WIDTH * 2.0 {
        Some(egui::Rect::from_center_size(
            egui::pos2(
                selection.center().x,
                canvas_rect.top() + MOVE_GRIP_HEIGHT + ZOOM_BUTTON_SIZE / 2.0 + 6.0,
            ),
            egui::vec2(ZOOM_BUTTON_SIZE, ZOOM_BUTTON_SIZE),
        ))
    } else {
        None
    };

    Some(OverlayLayout {
        selection,
        start_grip,
        move_grip,
        end_grip,
        zoom_button,
    })
}

/// Renders the selection overlay for the current preview selection.
pub fn render_selection_overlay(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    preview: PreviewSelection,
    committed: TimeRange,
    theme_colors: &ThemeColors,
) -> Option<OverlayLayout> {
    let layout = overlay_layout(canvas_rect, preview, committed)?;
    let painter = ctx.debug_painter();

    // Dim everything outside the selection
    let dim = Color32::from_rgba_premultiplied(0, 0, 0, 100);
    let left_of = egui::Rect::from_min_max(
        canvas_rect.min,
        egui::pos2(layout.selection.left(), canvas_rect.bottom()),
    );
    let right_of = egui::Rect::from_min_max(
        egui::pos2(layout.selection.right(), canvas_rect.top()),
        canvas_rect.max,
    );
    painter.rect_filled(left_of, 0.0, dim);
    painter.rect_filled(right_of, 0.0, dim);

    // Selection border
    painter.rect_stroke(
        layout.selection,
        0.0,
        egui::Stroke::new(1.0, theme_colors.blue),
        egui::StrokeKind::Outside,
    );

    // Grips
    painter.rect_filled(layout.start_grip, 2.0, with_alpha(theme_colors.blue, 180));
    painter.rect_filled(layout.end_grip, 2.0, with_alpha(theme_colors.blue, 180));
    painter.rect_filled(layout.move_grip, 0.0, with_alpha(theme_colors.blue, 120));

    // Duration label below the move grip
    if let PreviewSelection::Active { start, end, .. } = preview {
        let label = format_time(end - start);
        painter.text(
            egui::pos2(layout.selection.center().x, layout.selection.bottom() - 8.0),
            egui::Align2::CENTER_BOTTOM,
            label,
            egui::FontId::proportional(11.0),
            theme_colors.text_strong,
        );
    }

    // Zoom control
    if let Some(zoom_rect) = layout.zoom_button {
        painter.rect_filled(zoom_rect, 4.0, with_alpha(theme_colors.blue, 200));
        painter.text(
            zoom_rect.center(),
            egui::Align2::CENTER_CENTER,
            "🔍",
            egui::FontId::proportional(12.0),
            theme_colors.text_strong,
        );
    }

    Some(layout)
}

/// Renders the vertical cursor line and time label at the hover position.
pub fn render_cursor_overlay(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    hover_pos: egui::Pos2,
    hover_time: f64,
    zero_at: f64,
    theme_colors: &ThemeColors,
) {
    let painter = ctx.debug_painter();
    let line_x = hover_pos.x;

    painter.line_segment(
        [
            egui::pos2(line_x, canvas_rect.top()),
            egui::pos2(line_x, canvas_rect.bottom()),
        ],
        egui::Stroke::new(1.5, theme_colors.yellow),
    );

    let label_text = format_time(hover_time - zero_at);
    let font_id = egui::FontId::proportional(12.0);
    let galley = painter.layout_no_wrap(label_text.clone(), font_id.clone(), theme_colors.yellow);

    let text_size = galley.size();
    let padding = egui::vec2(4.0, 2.0);
    let label_pos = egui::pos2(
        line_x,
        canvas_rect.bottom() - text_size.y - padding.y * 2.0 - 4.0,
    );

    let bg_rect = egui::Rect::from_min_size(
        egui::pos2(label_pos.x - padding.x, label_pos.y - padding.y),
        egui::vec2(
            text_size.x + padding.x * 2.0,
            text_size.y + padding.y * 2.0,
        ),
    );
    painter.rect_filled(bg_rect, 2.0, Color32::from_rgba_premultiplied(0, 0, 0, 200));
    painter.rect_stroke(
        bg_rect,
        2.0,
        egui::Stroke::new(1.0, theme_colors.yellow),
        egui::StrokeKind::Outside,
    );
    painter.text(
        egui::pos2(label_pos.x + padding.x, label_pos.y + padding.y),
        egui::Align2::LEFT_TOP,
        label_text,
        font_id,
        theme_colors.yellow,
    );
}
