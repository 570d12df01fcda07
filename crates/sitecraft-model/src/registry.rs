//! Theme registry for resolving a project's theme reference.

use std::collections::HashMap;

use crate::presets::{self, DEFAULT_THEME_ID};
use crate::theme::ThemeConfig;

/// A set of themes addressable by id.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemeConfig>,
    default: ThemeConfig,
}

impl ThemeRegistry {
    /// Registry containing only the built-in presets.
    pub fn with_builtin() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            default: presets::modern(),
        };

        for theme in presets::builtin() {
            registry.register(theme);
        }

        registry
    }

    /// Add a theme, replacing any existing theme with the same id.
    pub fn register(&mut self, theme: ThemeConfig) {
        if theme.id == DEFAULT_THEME_ID {
            self.default = theme.clone();
        }
        if self.themes.insert(theme.id.clone(), theme).is_some() {
            tracing::debug!("Replaced existing theme registration");
        }
    }

    /// Look up a theme by id.
    pub fn get(&self, id: &str) -> Option<&ThemeConfig> {
        self.themes.get(id)
    }

    /// Look up a theme, falling back to the default theme for unknown ids.
    pub fn resolve(&self, id: &str) -> &ThemeConfig {
        match self.themes.get(id) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    "Unknown theme '{}', falling back to '{}'",
                    id,
                    self.default.id
                );
                &self.default
            }
        }
    }

    /// All registered theme ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.themes.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// All registered themes, sorted by id.
    pub fn themes(&self) -> Vec<&ThemeConfig> {
        let mut themes: Vec<&ThemeConfig> = self.themes.values().collect();
        themes.sort_by(|a, b| a.id.cmp(&b.id));
        themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtin_theme() {
        let registry = ThemeRegistry::with_builtin();

        assert_eq!(registry.resolve("nature").id, "nature");
        assert!(registry.get("elegant").is_some());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let registry = ThemeRegistry::with_builtin();

        assert!(registry.get("does-not-exist").is_none());
        assert_eq!(registry.resolve("does-not-exist").id, DEFAULT_THEME_ID);
    }

    #[test]
    fn register_replaces_by_id() {
        let mut registry = ThemeRegistry::with_builtin();
        let count = registry.ids().len();

        let mut custom = presets::nature();
        custom.name = "Forest".to_string();
        registry.register(custom);

        assert_eq!(registry.ids().len(), count);
        assert_eq!(registry.resolve("nature").name, "Forest");
    }

    #[test]
    fn overriding_default_changes_fallback() {
        let mut registry = ThemeRegistry::with_builtin();

        let mut custom = presets::modern();
        custom.colors.primary = "#000000".to_string();
        registry.register(custom);

        assert_eq!(registry.resolve("missing").colors.primary, "#000000");
    }
}
