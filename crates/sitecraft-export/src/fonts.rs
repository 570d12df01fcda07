//! Web font stylesheet link for a theme.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sitecraft_model::ThemeFonts;

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";
const WEIGHTS: &str = "300;400;500;600;700";

/// Characters left as-is inside a family name.
const FAMILY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Google Fonts stylesheet URL covering every distinct family in `fonts`.
///
/// Returns `None` when no family is set.
pub fn google_fonts_url(fonts: &ThemeFonts) -> Option<String> {
    let mut families: Vec<&str> = Vec::new();
    for (_, family) in fonts.entries() {
        let family = family.trim();
        if !family.is_empty() && !families.contains(&family) {
            families.push(family);
        }
    }

    if families.is_empty() {
        return None;
    }

    let query = families
        .iter()
        .map(|f| format!("family={}:wght@{}", encode_family(f), WEIGHTS))
        .collect::<Vec<_>>()
        .join("&");

    Some(format!("{}?{}&display=swap", GOOGLE_FONTS_CSS, query))
}

/// Words are joined with `+`; everything else that is not URL-safe is percent-encoded.
fn encode_family(family: &str) -> String {
    family
        .split_whitespace()
        .map(|word| utf8_percent_encode(word, FAMILY).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fonts(primary: &str, secondary: &str, accent: &str) -> ThemeFonts {
        ThemeFonts {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }

    #[test]
    fn deduplicates_families() {
        let url = google_fonts_url(&fonts("Inter", "Playfair Display", "Inter")).unwrap();

        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700\
             &family=Playfair+Display:wght@300;400;500;600;700&display=swap"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_family() {
        let url = google_fonts_url(&fonts("M PLUS 1p&Co", "Noto Sans", "Noto Sans")).unwrap();

        assert!(url.contains("family=M+PLUS+1p%26Co:wght@"));
        assert_eq!(url.matches("family=").count(), 2);
        assert_eq!(url.matches('&').count(), 2);
    }

    #[test]
    fn empty_fonts_have_no_link() {
        assert_eq!(google_fonts_url(&fonts("", " ", "")), None);
    }
}
