//! Coordinate mapping between timeline pixels and time values.
//!
//! This module provides pure functions for:
//! - Converting pointer positions to time values and back
//! - Converting pixel deltas to time deltas for grip drags
//! - Calculating appropriate tick intervals for time axis display
//!
//! These functions are stateless and can be tested independently of any UI.

use crate::range::TimeRange;

/// Content rectangle of the timeline canvas, in the same pixel space as
/// pointer coordinates.
///
/// Mirrors the geometry query the input layer performs on the canvas before
/// a gesture starts. A zero-width rect never admits a press (see
/// [`ContentRect::contains`]), so the mappers below are never called with a
/// degenerate width during a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ContentRect {
    /// Creates a rect from its four edges.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Returns the width of the rect in pixels.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns true if the point lies inside the rect.
    ///
    /// Half-open on the right and bottom edges, so a zero-width or
    /// zero-height rect contains no points.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Converts a pixel X coordinate to a time value within the committed range.
///
/// Linear interpolation: `range.start + (x - left) / width * duration`.
/// The caller guarantees a non-zero rect width (gestures cannot start in a
/// zero-width rect).
pub fn pixel_to_time(x: f32, rect: ContentRect, range: TimeRange) -> f64 {
    let normalized = ((x - rect.left) / rect.width()) as f64;
    range.start + normalized * range.duration()
}

/// Converts a time value to a pixel X coordinate within the rect.
pub fn time_to_pixel(t: f64, rect: ContentRect, range: TimeRange) -> f32 {
    if range.duration() <= 0.0 {
        return rect.left;
    }
    let normalized = (t - range.start) / range.duration();
    rect.left + normalized as f32 * rect.width()
}

/// Converts a horizontal pixel delta to a time delta.
///
/// Used by grip drags, where only the distance moved matters.
pub fn pixel_delta_to_time(dx: f32, rect: ContentRect, range: TimeRange) -> f64 {
    (dx / rect.width()) as f64 * range.duration()
}

/// Finds the next power of 10 that is greater than or equal to the given
/// duration. Used for choosing tick intervals on the time axis.
pub fn tick_interval(duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    10f64.powf(duration.log10().ceil())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_500() -> ContentRect {
        ContentRect::new(0.0, 500.0, 0.0, 24.0)
    }

    #[test]
    fn test_pixel_to_time_linear() {
        let range = TimeRange::new(0.0, 1000.0);
        assert_eq!(pixel_to_time(0.0, rect_500(), range), 0.0);
        assert_eq!(pixel_to_time(100.0, rect_500(), range), 200.0);
        assert_eq!(pixel_to_time(160.0, rect_500(), range), 320.0);
        assert_eq!(pixel_to_time(500.0, rect_500(), range), 1000.0);
    }

    #[test]
    fn test_pixel_to_time_offset_rect() {
        let rect = ContentRect::new(50.0, 550.0, 0.0, 24.0);
        let range = TimeRange::new(100.0, 1100.0);
        assert_eq!(pixel_to_time(50.0, rect, range), 100.0);
        assert_eq!(pixel_to_time(300.0, rect, range), 600.0);
    }

    #[test]
    fn test_time_to_pixel_round_trip() {
        let range = TimeRange::new(0.0, 1000.0);
        for t in [0.0, 200.0, 320.0, 999.0] {
            let x = time_to_pixel(t, rect_500(), range);
            let back = pixel_to_time(x, rect_500(), range);
            assert!((back - t).abs() < 1e-3, "{} -> {} -> {}", t, x, back);
        }
    }

    #[test]
    fn test_time_to_pixel_degenerate_range() {
        let range = TimeRange::new(5.0, 5.0);
        assert_eq!(time_to_pixel(5.0, rect_500(), range), 0.0);
    }

    #[test]
    fn test_pixel_delta_to_time() {
        let range = TimeRange::new(0.0, 1000.0);
        assert_eq!(pixel_delta_to_time(50.0, rect_500(), range), 100.0);
        assert_eq!(pixel_delta_to_time(-50.0, rect_500(), range), -100.0);
    }

    #[test]
    fn test_contains_half_open() {
        let rect = rect_500();
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(499.9, 23.9));
        assert!(!rect.contains(500.0, 10.0));
        assert!(!rect.contains(100.0, 24.0));

        // Zero-width rect admits no points
        let empty = ContentRect::new(10.0, 10.0, 0.0, 24.0);
        assert!(!empty.contains(10.0, 5.0));
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval(7.0), 10.0);
        assert_eq!(tick_interval(10.0), 10.0);
        assert_eq!(tick_interval(450.0), 1000.0);
        assert_eq!(tick_interval(0.05), 0.1);
        assert_eq!(tick_interval(0.0), 1.0);
    }
}
