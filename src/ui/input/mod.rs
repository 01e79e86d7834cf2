//! Input handling subsystem
//!
//! Contains pointer input handling logic for the timeline panel.

pub mod timeline_input_handler;

pub use timeline_input_handler::{handle_timeline_input, TimelineInputResult};
