//! Time axis rendering logic.
//!
//! Draws the ruler at the top of the timeline: major and minor tick marks
//! with time labels relative to the shared time origin.

use crate::utils::{content_rect, format_time};
use eframe::egui;
use rlens::{tick_interval, time_to_pixel, TimeRange};

/// Renders the time axis for the committed range.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `axis_rect` - The rectangular area to draw the axis in
/// * `committed` - The committed time range currently displayed
/// * `zero_at` - Shared time origin; labels show time since this origin
pub fn render_time_axis(ui: &egui::Ui, axis_rect: egui::Rect, committed: TimeRange, zero_at: f64) {
    ui.painter()
        .rect_filled(axis_rect, 0.0, ui.visuals().extreme_bg_color);

    let duration = committed.duration();
    if duration <= 0.0 || axis_rect.width() <= 0.0 {
        return;
    }

    let rect = content_rect(axis_rect);
    let interval = tick_interval(duration / 10.0);
    let first_tick = (committed.start / interval).floor() * interval;

    let mut tick = first_tick;
    while tick <= committed.end {
        if tick >= committed.start {
            let x = time_to_pixel(tick, rect, committed);

            // Major tick line
            ui.painter().line_segment(
                [
                    egui::pos2(x, axis_rect.top()),
                    egui::pos2(x, axis_rect.top() + 8.0),
                ],
                egui::Stroke::new(2.0, ui.visuals().text_color()),
            );

            ui.painter().text(
                egui::pos2(x, axis_rect.top() + 11.0),
                egui::Align2::CENTER_TOP,
                format_time(tick - zero_at),
                egui::FontId::proportional(10.0),
                ui.visuals().text_color(),
            );
        }

        // Minor ticks between majors
        for i in 1..5 {
            let minor = tick + (interval * i as f64) / 5.0;
            if minor > committed.end || minor < committed.start {
                continue;
            }
            let minor_x = time_to_pixel(minor, rect, committed);
            ui.painter().line_segment(
                [
                    egui::pos2(minor_x, axis_rect.top()),
                    egui::pos2(minor_x, axis_rect.top() + 4.0),
                ],
                egui::Stroke::new(1.0, ui.visuals().text_color().gamma_multiply(0.5)),
            );
        }

        tick += interval;
    }
}
