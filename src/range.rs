//! Shared time-range type used throughout the viewer.
//!
//! All timeline math operates on `TimeRange` values in the profile's shared
//! time unit (milliseconds since an arbitrary origin).

use serde::{Deserialize, Serialize};

/// A closed time interval with `start <= end`, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the range in milliseconds
    pub start: f64,
    /// End of the range in milliseconds
    pub end: f64,
}

impl TimeRange {
    /// Creates a range from two bounds, swapping them if given out of order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the length of the range in milliseconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Clamps a time value into this range.
    pub fn clamp(&self, t: f64) -> f64 {
        t.max(self.start).min(self.end)
    }

    /// Returns true if `t` lies in the half-open interval `[start, end)`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }

    /// Shifts both bounds by the same offset.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let r = TimeRange::new(320.0, 200.0);
        assert_eq!(r.start, 200.0);
        assert_eq!(r.end, 320.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = TimeRange::new(100.0, 200.0);
        assert!(r.contains(100.0));
        assert!(r.contains(199.999));
        assert!(!r.contains(200.0));
        assert!(!r.contains(99.0));
    }

    #[test]
    fn test_clamp() {
        let r = TimeRange::new(0.0, 1000.0);
        assert_eq!(r.clamp(-5.0), 0.0);
        assert_eq!(r.clamp(500.0), 500.0);
        assert_eq!(r.clamp(1500.0), 1000.0);
    }
}
