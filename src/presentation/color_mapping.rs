//! Color mapping for timeline spans based on their category.

use egui::Color32;
use rlens::{ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the dark theme colors if the named theme is missing.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme("Dark").unwrap().colors)
}

/// Returns the bar color for a span category.
pub fn get_category_color(category: &str, colors: &ThemeColors) -> Color32 {
    match category {
        "layout" => colors.purple,
        "script" => colors.yellow,
        "paint" => colors.green,
        "gc" => colors.orange,
        "network" => colors.blue,
        "other" => colors.gray,
        _ => colors.text_dim,
    }
}
