pub mod coords;
pub mod demo;
pub mod gesture;
pub mod grips;
pub mod profile;
pub mod range;
pub mod theme;
pub mod writer;

// Export core timeline types
pub use range::TimeRange;

pub use coords::{pixel_delta_to_time, pixel_to_time, tick_interval, time_to_pixel, ContentRect};

// Export the gesture machine
pub use gesture::{
    commit_preview, Command, GestureContext, ModifierKeys, PointerEvent, PreviewSelection,
    SelectionGesture, DRAG_THRESHOLD_PX,
};

// Export grip drag adapters
pub use grips::{drag_selection, grip_drag, Grip, RangeDelta};

// Export profile format support
pub use profile::{parse_profile, parse_profile_lines, ProfileData, ProfileMetadata, Span, Track};
pub use writer::ProfileWriter;
pub use demo::generate_demo_profile;

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
