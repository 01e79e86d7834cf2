//! Theme support for the Lens viewer.
//!
//! Provides color palettes for the timeline UI (track bars, selection
//! overlay, ruler) plus a manager holding the built-in themes.

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (span categories, overlays)
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub cyan: Color32,
    pub blue: Color32,
    pub purple: Color32,
    pub gray: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dracula".to_string(), dracula_theme());
        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns all available theme names, sorted.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Default dark theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(36, 36, 40),
            panel_background: Color32::from_rgb(36, 36, 40),
            extreme_background: Color32::from_rgb(18, 18, 20),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(155, 155, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(52, 84, 126),
            hover: Color32::from_rgb(66, 66, 72),
            border: Color32::from_rgb(98, 98, 104),

            red: Color32::from_rgb(229, 77, 66),
            orange: Color32::from_rgb(240, 150, 30),
            yellow: Color32::from_rgb(238, 195, 34),
            green: Color32::from_rgb(58, 196, 120),
            cyan: Color32::from_rgb(38, 182, 162),
            blue: Color32::from_rgb(64, 148, 220),
            purple: Color32::from_rgb(152, 94, 186),
            gray: Color32::from_rgb(142, 152, 156),
        },
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme for bright environments".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(116, 116, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(178, 202, 250),
            hover: Color32::from_rgb(222, 222, 224),
            border: Color32::from_rgb(164, 164, 168),

            red: Color32::from_rgb(196, 42, 36),
            orange: Color32::from_rgb(222, 116, 22),
            yellow: Color32::from_rgb(176, 138, 4),
            green: Color32::from_rgb(42, 152, 46),
            cyan: Color32::from_rgb(8, 152, 172),
            blue: Color32::from_rgb(44, 98, 196),
            purple: Color32::from_rgb(134, 62, 176),
            gray: Color32::from_rgb(122, 122, 126),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            red: hex_to_color32("#ff5555"),
            orange: hex_to_color32("#ffb86c"),
            yellow: hex_to_color32("#f1fa8c"),
            green: hex_to_color32("#50fa7b"),
            cyan: hex_to_color32("#8be9fd"),
            blue: hex_to_color32("#bd93f9"),
            purple: hex_to_color32("#bd93f9"),
            gray: hex_to_color32("#6272a4"),
        },
    }
}

/// Parses a `#rrggbb` hex string into a Color32.
///
/// Falls back to gray for malformed input so theme definitions cannot panic.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::GRAY;
    }
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(128);
    Color32::from_rgb(parse(&hex[0..2]), parse(&hex[2..4]), parse(&hex[4..6]))
}

/// Returns the color with the given alpha applied.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Scales the RGB channels by `factor`, clamping at white.
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| ((c as f32 * factor).round().clamp(0.0, 255.0)) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_present() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert!(manager.get_theme("Dark").is_some());
        assert!(manager.get_theme("Nonexistent").is_none());
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("21222c"), Color32::from_rgb(33, 34, 44));
        assert_eq!(hex_to_color32("#bad"), Color32::GRAY);
    }
}
