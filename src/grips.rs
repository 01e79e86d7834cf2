//! Grip drag adapters for adjusting an existing preview selection.
//!
//! A selection exposes three draggable grips: the start edge, the whole
//! range, and the end edge. All three are parametrizations of one shared
//! "drag to delta" primitive, differing only in how a time delta is split
//! across the two bounds.

use crate::range::TimeRange;

/// How a drag delta is distributed across the selection bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDelta {
    pub start: f64,
    pub end: f64,
}

/// The draggable handles of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grip {
    /// Drags only the start edge.
    Start,
    /// Drags the whole range, both edges together.
    Move,
    /// Drags only the end edge.
    End,
}

impl Grip {
    /// Maps a time delta to per-bound deltas for this grip.
    pub fn deltas(self, delta: f64) -> RangeDelta {
        match self {
            Grip::Start => RangeDelta {
                start: delta,
                end: 0.0,
            },
            Grip::Move => RangeDelta {
                start: delta,
                end: delta,
            },
            Grip::End => RangeDelta {
                start: 0.0,
                end: delta,
            },
        }
    }
}

/// Shared drag primitive: applies `delta_fn(time_delta)` to the original
/// selection and clamps the result into the committed range.
///
/// The start is clamped into the committed range first, then the end into
/// `[start, committed.end]`, so the result always satisfies
/// `committed.start <= start <= end <= committed.end`.
pub fn drag_selection<F>(
    original: TimeRange,
    committed: TimeRange,
    delta_fn: F,
    time_delta: f64,
) -> TimeRange
where
    F: FnOnce(f64) -> RangeDelta,
{
    let d = delta_fn(time_delta);
    let start = (original.start + d.start)
        .max(committed.start)
        .min(committed.end);
    let end = (original.end + d.end).max(start).min(committed.end);
    TimeRange { start, end }
}

/// Applies a grip drag to the original selection.
pub fn grip_drag(original: TimeRange, committed: TimeRange, grip: Grip, time_delta: f64) -> TimeRange {
    drag_selection(original, committed, |d| grip.deltas(d), time_delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMITTED: TimeRange = TimeRange {
        start: 0.0,
        end: 1000.0,
    };

    fn original() -> TimeRange {
        TimeRange::new(200.0, 320.0)
    }

    fn assert_invariants(r: TimeRange) {
        assert!(COMMITTED.start <= r.start, "{:?}", r);
        assert!(r.start <= r.end, "{:?}", r);
        assert!(r.end <= COMMITTED.end, "{:?}", r);
    }

    #[test]
    fn test_delta_split_per_grip() {
        assert_eq!(
            Grip::Start.deltas(5.0),
            RangeDelta {
                start: 5.0,
                end: 0.0
            }
        );
        assert_eq!(
            Grip::Move.deltas(5.0),
            RangeDelta {
                start: 5.0,
                end: 5.0
            }
        );
        assert_eq!(
            Grip::End.deltas(5.0),
            RangeDelta {
                start: 0.0,
                end: 5.0
            }
        );
    }

    #[test]
    fn test_start_grip_moves_only_start() {
        let r = grip_drag(original(), COMMITTED, Grip::Start, -50.0);
        assert_eq!(r, TimeRange::new(150.0, 320.0));
        assert_invariants(r);
    }

    #[test]
    fn test_move_grip_shifts_both_bounds() {
        let r = grip_drag(original(), COMMITTED, Grip::Move, 100.0);
        assert_eq!(r, TimeRange::new(300.0, 420.0));
        assert_invariants(r);
    }

    #[test]
    fn test_end_grip_moves_only_end() {
        let r = grip_drag(original(), COMMITTED, Grip::End, 80.0);
        assert_eq!(r, TimeRange::new(200.0, 400.0));
        assert_invariants(r);
    }

    #[test]
    fn test_start_grip_clamped_at_committed_start() {
        let r = grip_drag(original(), COMMITTED, Grip::Start, -500.0);
        assert_eq!(r, TimeRange::new(0.0, 320.0));
        assert_invariants(r);
    }

    #[test]
    fn test_start_grip_crossing_end_collapses() {
        let r = grip_drag(original(), COMMITTED, Grip::Start, 300.0);
        assert_eq!(r, TimeRange::new(500.0, 500.0));
        assert_invariants(r);
    }

    #[test]
    fn test_end_grip_clamped_at_committed_end() {
        let r = grip_drag(original(), COMMITTED, Grip::End, 5000.0);
        assert_eq!(r, TimeRange::new(200.0, 1000.0));
        assert_invariants(r);
    }

    #[test]
    fn test_end_grip_crossing_start_collapses() {
        let r = grip_drag(original(), COMMITTED, Grip::End, -300.0);
        assert_eq!(r, TimeRange::new(200.0, 200.0));
        assert_invariants(r);
    }

    #[test]
    fn test_move_grip_clamped_at_both_ends() {
        let left = grip_drag(original(), COMMITTED, Grip::Move, -5000.0);
        assert_eq!(left.start, 0.0);
        assert_invariants(left);

        let right = grip_drag(original(), COMMITTED, Grip::Move, 5000.0);
        assert_eq!(right.end, 1000.0);
        assert_invariants(right);
    }

    #[test]
    fn test_invariants_hold_across_delta_sweep() {
        let mut delta = -2000.0;
        while delta <= 2000.0 {
            for grip in [Grip::Start, Grip::Move, Grip::End] {
                assert_invariants(grip_drag(original(), COMMITTED, grip, delta));
            }
            delta += 37.5;
        }
    }
}
