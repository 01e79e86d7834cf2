//! Geometry conversions between egui rects and the core coordinate types.

use rlens::ContentRect;

/// Converts an egui rect into the content rectangle consumed by the
/// coordinate mapper and the gesture machine.
pub fn content_rect(rect: egui::Rect) -> ContentRect {
    ContentRect::new(rect.left(), rect.right(), rect.top(), rect.bottom())
}
