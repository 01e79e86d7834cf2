//! Utility modules for the Lens viewer.

pub mod formatting;
pub mod geometry;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, format_time, get_current_memory_mb};
pub use geometry::content_rect;
