//! State management modules for the Lens viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Profile state (loaded profile data, file path, time extent)
//! - Range state (shared time origin, committed range, zoom history)
//! - Selection state (preview selection, track selection, hover)
//! - Interaction state (gesture machine, listener handle, grip drags)
//! - Theme state (theme manager, current theme)

mod interaction_state;
mod profile_state;
mod range_state;
mod selection_state;
mod theme_state;

pub use interaction_state::{GripDrag, InstalledListeners, InteractionState};
pub use profile_state::ProfileState;
pub use range_state::RangeState;
pub use selection_state::SelectionState;
pub use theme_state::ThemeState;
