//! Committed range and zoom history management.
//!
//! The committed range is the authoritative time window displayed by the
//! timeline. Committing a preview selection narrows it; each commit pushes
//! the previous window onto a history stack so the user can zoom back out.

use rlens::TimeRange;

/// State for the shared time origin and the committed time window.
///
/// Committed ranges are stored relative to the origin (`zero_at`), matching
/// the store contract: `commit_range` takes origin-relative bounds, and
/// absolute values are reconstructed on the way out.
#[derive(Debug, Clone)]
pub struct RangeState {
    /// Shared time origin in absolute milliseconds
    zero_at: f64,
    /// Full profile extent, origin-relative
    full: TimeRange,
    /// Currently committed window, origin-relative
    committed: TimeRange,
    /// Previously committed windows, origin-relative, oldest first
    history: Vec<TimeRange>,
}

impl Default for RangeState {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeState {
    /// Creates an empty range state.
    pub fn new() -> Self {
        Self {
            zero_at: 0.0,
            full: TimeRange {
                start: 0.0,
                end: 0.0,
            },
            committed: TimeRange {
                start: 0.0,
                end: 0.0,
            },
            history: Vec::new(),
        }
    }

    /// Initializes the state for a newly loaded profile.
    ///
    /// # Arguments
    /// * `zero_at` - The profile's shared time origin (absolute)
    /// * `extent` - The profile's full time extent (absolute)
    pub fn init(&mut self, zero_at: f64, extent: TimeRange) {
        self.zero_at = zero_at;
        self.full = extent.shifted(-zero_at);
        self.committed = self.full;
        self.history.clear();
    }

    /// Resets to the empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ===== Queries =====

    /// Returns the shared time origin in absolute milliseconds.
    pub fn zero_at(&self) -> f64 {
        self.zero_at
    }

    /// Returns the committed range in absolute time.
    pub fn committed(&self) -> TimeRange {
        self.committed.shifted(self.zero_at)
    }

    /// Returns the full profile extent in absolute time.
    pub fn full_range(&self) -> TimeRange {
        self.full.shifted(self.zero_at)
    }

    /// Returns true if the committed range is narrower than the full extent.
    pub fn is_zoomed(&self) -> bool {
        !self.history.is_empty() || self.committed != self.full
    }

    /// Returns the number of committed ranges on the history stack.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    // ===== Mutations =====

    /// Commits a new range, given origin-relative bounds.
    ///
    /// The previous committed range is pushed onto the history stack.
    /// Out-of-order bounds are normalized.
    pub fn commit_range(&mut self, start: f64, end: f64) {
        self.history.push(self.committed);
        self.committed = TimeRange::new(start, end);
    }

    /// Pops one committed range off the history stack, zooming back out.
    ///
    /// Returns false if there is no history to pop.
    pub fn pop_committed(&mut self) -> bool {
        match self.history.pop() {
            Some(range) => {
                self.committed = range;
                true
            }
            None => false,
        }
    }

    /// Restores the full profile extent and clears the history.
    pub fn reset_to_full(&mut self) {
        self.committed = self.full;
        self.history.clear();
    }
}
