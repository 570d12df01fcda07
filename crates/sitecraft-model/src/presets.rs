//! Built-in theme presets.

use std::collections::BTreeMap;

use crate::theme::{ThemeColors, ThemeConfig, ThemeFonts, ThemeShadows};

/// Identifier of the theme used when a project names no known theme.
pub const DEFAULT_THEME_ID: &str = "modern";

/// All built-in themes, default first.
pub fn builtin() -> Vec<ThemeConfig> {
    vec![modern(), elegant(), nature(), sunset(), midnight()]
}

/// Clean blue palette with Inter.
pub fn modern() -> ThemeConfig {
    ThemeConfig {
        id: "modern".to_string(),
        name: "Modern Blue".to_string(),
        colors: colors([
            "#3b82f6", "#93c5fd", "#1d4ed8", "#64748b", "#cbd5e1", "#334155", "#f59e0b",
            "#fcd34d", "#b45309", "#ffffff", "#f8fafc", "#0f172a", "#64748b", "#e2e8f0",
            "#10b981", "#f59e0b", "#ef4444",
        ]),
        fonts: fonts("Inter", "Inter", "Inter"),
        shadows: standard_shadows(),
    }
}

/// Deep purple palette with serif headings.
pub fn elegant() -> ThemeConfig {
    ThemeConfig {
        id: "elegant".to_string(),
        name: "Elegant Purple".to_string(),
        colors: colors([
            "#7c3aed", "#c4b5fd", "#5b21b6", "#db2777", "#f9a8d4", "#9d174d", "#d4af37",
            "#f1e5ac", "#a67c00", "#fdfcff", "#f5f3ff", "#1e1b4b", "#6b7280", "#e5e7eb",
            "#059669", "#d97706", "#dc2626",
        ]),
        fonts: fonts("Lato", "Playfair Display", "Lato"),
        shadows: ThemeShadows {
            sm: "0 1px 2px 0 rgba(76, 29, 149, 0.05)".to_string(),
            md: "0 4px 6px -1px rgba(76, 29, 149, 0.1)".to_string(),
            lg: "0 10px 15px -3px rgba(76, 29, 149, 0.12)".to_string(),
            xl: "0 20px 25px -5px rgba(76, 29, 149, 0.15)".to_string(),
        },
    }
}

/// Earthy greens.
pub fn nature() -> ThemeConfig {
    ThemeConfig {
        id: "nature".to_string(),
        name: "Nature Green".to_string(),
        colors: colors([
            "#16a34a", "#86efac", "#166534", "#854d0e", "#fde68a", "#713f12", "#0ea5e9",
            "#7dd3fc", "#0369a1", "#fefefe", "#f7fee7", "#14532d", "#4b5563", "#d9f99d",
            "#22c55e", "#eab308", "#dc2626",
        ]),
        fonts: fonts("Open Sans", "Merriweather", "Open Sans"),
        shadows: standard_shadows(),
    }
}

/// Warm orange and rose.
pub fn sunset() -> ThemeConfig {
    ThemeConfig {
        id: "sunset".to_string(),
        name: "Sunset Orange".to_string(),
        colors: colors([
            "#f97316", "#fdba74", "#c2410c", "#e11d48", "#fda4af", "#9f1239", "#8b5cf6",
            "#c4b5fd", "#6d28d9", "#fffbf5", "#fff7ed", "#431407", "#78716c", "#fed7aa",
            "#16a34a", "#ca8a04", "#b91c1c",
        ]),
        fonts: fonts("Poppins", "Poppins", "Nunito"),
        shadows: standard_shadows(),
    }
}

/// Dark surfaces with cyan accents.
pub fn midnight() -> ThemeConfig {
    ThemeConfig {
        id: "midnight".to_string(),
        name: "Midnight".to_string(),
        colors: colors([
            "#06b6d4", "#67e8f9", "#0e7490", "#a855f7", "#d8b4fe", "#7e22ce", "#f472b6",
            "#fbcfe8", "#be185d", "#0b1120", "#111827", "#f1f5f9", "#94a3b8", "#1f2937",
            "#34d399", "#fbbf24", "#f87171",
        ]),
        fonts: fonts("Space Grotesk", "Space Grotesk", "JetBrains Mono"),
        shadows: ThemeShadows {
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.4)".to_string(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.5)".to_string(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.55)".to_string(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.6)".to_string(),
        },
    }
}

/// Build colors from the 17 named tokens in `ThemeColors::entries` order.
fn colors(v: [&str; 17]) -> ThemeColors {
    ThemeColors {
        primary: v[0].to_string(),
        primary_light: v[1].to_string(),
        primary_dark: v[2].to_string(),
        secondary: v[3].to_string(),
        secondary_light: v[4].to_string(),
        secondary_dark: v[5].to_string(),
        accent: v[6].to_string(),
        accent_light: v[7].to_string(),
        accent_dark: v[8].to_string(),
        background: v[9].to_string(),
        surface: v[10].to_string(),
        text: v[11].to_string(),
        text_secondary: v[12].to_string(),
        border: v[13].to_string(),
        success: v[14].to_string(),
        warning: v[15].to_string(),
        error: v[16].to_string(),
        extra: BTreeMap::new(),
    }
}

fn fonts(primary: &str, secondary: &str, accent: &str) -> ThemeFonts {
    ThemeFonts {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
    }
}

fn standard_shadows() -> ThemeShadows {
    ThemeShadows {
        sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".to_string(),
        md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)".to_string(),
        lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)".to_string(),
        xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let themes = builtin();
        let ids: HashSet<&str> = themes.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids.len(), themes.len());
        assert_eq!(themes[0].id, DEFAULT_THEME_ID);
    }

    #[test]
    fn builtin_colors_are_hex() {
        for theme in builtin() {
            for (key, value) in theme.colors.entries() {
                assert!(
                    value.len() == 7 && value.starts_with('#'),
                    "{}.{} is not #rrggbb: {}",
                    theme.id,
                    key,
                    value
                );
            }
        }
    }
}
