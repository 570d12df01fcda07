//! Theme configuration types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named bundle of colors, fonts and shadow presets applied across a page.
///
/// Values are written into an inline `<style>` element as-is apart from `<`, which the
/// exporter strips. Themes are treated as author configuration, not visitor input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Theme identifier referenced by projects
    pub id: String,

    /// Human readable name
    pub name: String,

    /// Color tokens
    pub colors: ThemeColors,

    /// Font family names per role
    pub fonts: ThemeFonts,

    /// Box shadow presets
    pub shadows: ThemeShadows,
}

/// Color tokens of a theme.
///
/// Values are CSS colors, normally `#rrggbb`. Tokens in `extra` are emitted after the named
/// ones, in key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub secondary_light: String,
    pub secondary_dark: String,
    pub accent: String,
    pub accent_light: String,
    pub accent_dark: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,

    /// Additional custom tokens, keyed in camelCase
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, String>,
}

impl ThemeColors {
    /// All color tokens as `(camelCaseKey, value)` pairs in declaration order.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries = vec![
            ("primary", self.primary.as_str()),
            ("primaryLight", self.primary_light.as_str()),
            ("primaryDark", self.primary_dark.as_str()),
            ("secondary", self.secondary.as_str()),
            ("secondaryLight", self.secondary_light.as_str()),
            ("secondaryDark", self.secondary_dark.as_str()),
            ("accent", self.accent.as_str()),
            ("accentLight", self.accent_light.as_str()),
            ("accentDark", self.accent_dark.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("textSecondary", self.text_secondary.as_str()),
            ("border", self.border.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
        ];

        entries.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        entries
    }
}

/// Font family names per typographic role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    /// Body text
    pub primary: String,
    /// Headings
    pub secondary: String,
    /// Highlights and labels
    pub accent: String,
}

impl ThemeFonts {
    pub fn entries(&self) -> Vec<(&str, &str)> {
        vec![
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
        ]
    }
}

/// Box shadow presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeShadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl ThemeShadows {
    pub fn entries(&self) -> Vec<(&str, &str)> {
        vec![
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}
