//! Theme to CSS custom property materialization.
//!
//! Every theme token becomes `--website-<category>-<kebab-key>`. Colors also get a
//! `-rgb` sibling holding `R, G, B` so sections can write `rgba(var(...-rgb), 0.1)`.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use sitecraft_model::ThemeConfig;

/// Prefix shared by all generated custom properties.
pub const VARIABLE_PREFIX: &str = "--website";

/// RGB triple used when a color is not a 6-digit hex value.
pub const FALLBACK_RGB: &str = "0, 0, 0";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("Invalid hex color regex")
});

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid camel case regex"));

/// A single CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

/// Parse `#rrggbb` (leading `#` optional, any case) into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_COLOR.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(caps.get(i)?.as_str(), 16).ok();

    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// `R, G, B` for a hex color, or [`FALLBACK_RGB`].
pub fn rgb_triplet(value: &str) -> String {
    match hex_to_rgb(value) {
        Some((r, g, b)) => format!("{}, {}, {}", r, g, b),
        None => FALLBACK_RGB.to_string(),
    }
}

/// `textSecondary` -> `text-secondary`
pub fn camel_to_kebab(s: &str) -> String {
    CAMEL_BOUNDARY.replace_all(s, "${1}-${2}").to_lowercase()
}

/// Theme values end up inside a `<style>` element, where `<` is never valid CSS but can
/// close the element. It is dropped.
fn css_value(value: &str) -> String {
    if value.contains('<') {
        tracing::warn!("Dropping '<' from theme value {:?}", value);
        value.replace('<', "")
    } else {
        value.to_string()
    }
}

/// All custom properties for a theme: colors, then fonts, then shadows.
///
/// A custom color whose name collides with an earlier token (e.g. an extra key
/// `text-secondary`) is skipped, so named tokens always win.
pub fn css_variables(theme: &ThemeConfig) -> Vec<CssVariable> {
    let mut vars = Vec::new();
    let mut seen = HashSet::new();

    for (key, value) in theme.colors.entries() {
        let name = format!("{}-color-{}", VARIABLE_PREFIX, camel_to_kebab(key));
        if !seen.insert(name.clone()) {
            tracing::warn!(
                "Theme {}: color '{}' duplicates {}, skipping",
                theme.id,
                key,
                name
            );
            continue;
        }

        let rgb = CssVariable {
            name: format!("{}-rgb", name),
            value: rgb_triplet(value),
        };
        vars.push(CssVariable {
            name,
            value: css_value(value),
        });
        vars.push(rgb);
    }

    for (key, value) in theme.fonts.entries() {
        vars.push(CssVariable {
            name: format!("{}-font-{}", VARIABLE_PREFIX, camel_to_kebab(key)),
            value: css_value(value),
        });
    }

    for (key, value) in theme.shadows.entries() {
        vars.push(CssVariable {
            name: format!("{}-shadow-{}", VARIABLE_PREFIX, camel_to_kebab(key)),
            value: css_value(value),
        });
    }

    vars
}

/// The `:root { ... }` block declaring every theme variable.
pub fn root_block(theme: &ThemeConfig) -> String {
    let mut css = String::from(":root {\n");
    for var in css_variables(theme) {
        let _ = writeln!(css, "  {}: {};", var.name, var.value);
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use sitecraft_model::presets;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_to_rgb("#3b82f6"), Some((59, 130, 246)));
        assert_eq!(hex_to_rgb("3B82F6"), Some((59, 130, 246)));
        assert_eq!(hex_to_rgb("#FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn malformed_colors_fall_back_to_black() {
        for value in ["#fff", "#12345g", "rgb(1, 2, 3)", "blue", "", "##123456", "#1234567"] {
            assert_eq!(rgb_triplet(value), FALLBACK_RGB, "{}", value);
        }
    }

    #[test]
    fn converts_camel_case() {
        assert_eq!(camel_to_kebab("textSecondary"), "text-secondary");
        assert_eq!(camel_to_kebab("primaryLight"), "primary-light");
        assert_eq!(camel_to_kebab("sm"), "sm");
        assert_eq!(camel_to_kebab("brand2Accent"), "brand2-accent");
    }

    #[test]
    fn color_is_followed_by_rgb_sibling() {
        let vars = css_variables(&presets::modern());

        assert_eq!(vars[0].name, "--website-color-primary");
        assert_eq!(vars[0].value, "#3b82f6");
        assert_eq!(vars[1].name, "--website-color-primary-rgb");
        assert_eq!(vars[1].value, "59, 130, 246");
    }

    #[test]
    fn emits_every_token_once() {
        let theme = presets::elegant();
        let vars = css_variables(&theme);

        // 17 colors twice, 3 fonts, 4 shadows
        assert_eq!(vars.len(), 17 * 2 + 3 + 4);
        assert!(vars
            .iter()
            .any(|v| v.name == "--website-font-secondary" && v.value == "Playfair Display"));
        assert!(vars.iter().any(|v| v.name == "--website-shadow-xl"));
        assert!(vars
            .iter()
            .any(|v| v.name == "--website-color-text-secondary-rgb"));
    }

    #[test]
    fn extra_color_tokens_are_materialized() {
        let mut theme = presets::modern();
        theme
            .colors
            .extra
            .insert("brandHighlight".to_string(), "not-a-color".to_string());

        let css = root_block(&theme);

        assert!(css.contains("  --website-color-brand-highlight: not-a-color;\n"));
        assert!(css.contains("  --website-color-brand-highlight-rgb: 0, 0, 0;\n"));
    }

    #[test]
    fn kebab_extra_key_cannot_override_named_token() {
        let mut theme = presets::modern();
        theme
            .colors
            .extra
            .insert("text-secondary".to_string(), "#ff0000".to_string());

        let vars = css_variables(&theme);
        let matching: Vec<&CssVariable> = vars
            .iter()
            .filter(|v| v.name == "--website-color-text-secondary")
            .collect();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].value, theme.colors.text_secondary);
        assert_eq!(
            vars.iter()
                .filter(|v| v.name == "--website-color-text-secondary-rgb")
                .count(),
            1
        );
    }

    #[test]
    fn theme_values_cannot_close_the_style_element() {
        let mut theme = presets::modern();
        theme.colors.primary = "red</style><script>alert(1)</script>".to_string();
        theme.fonts.primary = "Inter</style>".to_string();

        let css = root_block(&theme);

        assert!(!css.contains('<'));
        assert!(!css.contains("</style>"));
    }

    #[test]
    fn root_block_shape() {
        let css = root_block(&presets::modern());

        assert!(css.starts_with(":root {\n  --website-color-primary: #3b82f6;\n"));
        assert!(css.ends_with("}"));
    }

    proptest! {
        #[test]
        fn well_formed_hex_round_trips(r: u8, g: u8, b: u8, upper: bool, hash: bool) {
            let hex = format!("{}{:02x}{:02x}{:02x}", if hash { "#" } else { "" }, r, g, b);
            let hex = if upper { hex.to_uppercase() } else { hex };

            prop_assert_eq!(rgb_triplet(&hex), format!("{}, {}, {}", r, g, b));
        }

        #[test]
        fn anything_else_is_black(value in "[^0-9a-fA-F#]{0,12}") {
            prop_assert_eq!(rgb_triplet(&value), FALLBACK_RGB);
        }
    }
}
