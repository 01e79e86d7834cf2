//! Rendering subsystem for drawing the timeline.
//!
//! This module contains all rendering logic for the Lens viewer:
//! - Time axis rendering (tick marks and time labels)
//! - Track row rendering (span bars)
//! - Selection overlay (dimmed surround, grips, zoom control, cursor line)

pub mod selection_overlay;
pub mod time_axis_renderer;
pub mod track_renderer;
