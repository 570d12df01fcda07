//! The HTML document shell wrapped around rendered sections.

use minijinja::{context, Environment, Error, ErrorKind, Output, State, Value};
use sitecraft_sections::html::escape;

/// Everything the document shell needs besides the section markup.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentContext {
    /// `<html lang>`
    pub lang: String,
    /// Page title
    pub title: String,
    pub description: Option<String>,
    /// Comma separated keywords, empty for none
    pub keywords: String,
    pub og_image: Option<String>,
    /// Web font stylesheet
    pub fonts_url: Option<String>,
    /// Inline stylesheet, theme variables first
    pub styles: String,
    /// Concatenated section fragments
    pub body: String,
    /// Inline runtime script
    pub script: String,
}

/// Template engine for the document shell.
pub struct DocumentTemplate {
    env: Environment<'static>,
}

impl DocumentTemplate {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Escape everything not marked safe; '/' is left alone so URLs read naturally
        env.set_formatter(|out: &mut Output, _state: &State, value: &Value| {
            if value.is_undefined() || value.is_none() {
                return Ok(());
            }
            let written = if value.is_safe() {
                write!(out, "{}", value)
            } else {
                write!(out, "{}", escape(&value.to_string()))
            };
            written.map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write document"))
        });

        env.add_template("document.html", DOCUMENT_TEMPLATE)
            .expect("Failed to add document template");

        Self { env }
    }

    /// Render the complete document.
    pub fn render(&self, context: &DocumentContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("document.html")?;

        tmpl.render(context! {
            lang => &context.lang,
            title => &context.title,
            description => &context.description,
            keywords => &context.keywords,
            og_image => &context.og_image,
            fonts_url => &context.fonts_url,
            styles => &context.styles,
            body => &context.body,
            script => &context.script,
        })
    }
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}{% if keywords %}<meta name="keywords" content="{{ keywords }}">
  {% endif %}<meta property="og:title" content="{{ title }}">
  {% if description %}<meta property="og:description" content="{{ description }}">
  {% endif %}{% if og_image %}<meta property="og:image" content="{{ og_image }}">
  {% endif %}<meta property="og:type" content="website">
  <script src="https://cdn.tailwindcss.com"></script>
  {% if fonts_url %}<link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="{{ fonts_url }}" rel="stylesheet">
  {% endif %}<style>
{{ styles | safe }}
  </style>
</head>
<body>
{{ body | safe }}
<script>
{{ script | safe }}
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DocumentContext {
        DocumentContext {
            lang: "en".to_string(),
            title: "Acme & Co".to_string(),
            description: Some("We build \"things\"".to_string()),
            keywords: "web, design".to_string(),
            og_image: None,
            fonts_url: Some(
                "https://fonts.googleapis.com/css2?family=Inter:wght@400&display=swap".to_string(),
            ),
            styles: ":root { --x: 1; }".to_string(),
            body: "<section>Hi</section>".to_string(),
            script: "console.log('a < b');".to_string(),
        }
    }

    #[test]
    fn renders_head_metadata() {
        let html = DocumentTemplate::new().render(&context()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Acme &amp; Co</title>"));
        assert!(html.contains(r#"<meta name="description" content="We build &quot;things&quot;">"#));
        assert!(html.contains(r#"<meta name="keywords" content="web, design">"#));
        assert!(!html.contains("og:image"));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains("family=Inter:wght@400&amp;display=swap"));
    }

    #[test]
    fn embeds_styles_body_and_script_verbatim() {
        let html = DocumentTemplate::new().render(&context()).unwrap();

        assert!(html.contains("<style>\n:root { --x: 1; }\n  </style>"));
        assert!(html.contains("<body>\n<section>Hi</section>\n<script>"));
        assert!(html.contains("console.log('a < b');"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn omits_empty_optional_tags() {
        let mut ctx = context();
        ctx.description = None;
        ctx.keywords = String::new();
        ctx.fonts_url = None;

        let html = DocumentTemplate::new().render(&ctx).unwrap();

        assert!(!html.contains(r#"name="description""#));
        assert!(!html.contains(r#"name="keywords""#));
        assert!(!html.contains("fonts.googleapis.com"));
    }
}
