//! Theme and styling state.

use rlens::ThemeManager;

/// State for the theme manager and the active theme.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a theme state with the default dark theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Creates a theme state with a specific theme selected.
    ///
    /// Unknown names fall back to the default theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            "Dark".to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    /// Returns the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the active theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Switches to the named theme if it exists.
    pub fn set_theme(&mut self, name: &str) {
        if self.theme_manager.get_theme(name).is_some() {
            self.current_theme_name = name.to_string();
        }
    }
}
