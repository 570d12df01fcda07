//! Section dispatch: maps a section instance to its HTML fragment.

use minijinja::{context, Environment, Error, ErrorKind, Output, State, UndefinedBehavior, Value};
use serde::Deserialize;
use sitecraft_model::SectionInstance;

use crate::functions::{self, DateStyle};
use crate::html::{comment_text, escape};
use crate::template_id::TemplateId;
use crate::templates;

/// How content strings are interpolated into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// HTML-escape every interpolated value
    #[default]
    Escape,
    /// Emit content verbatim; only for content from a trusted author
    Trusted,
}

/// Options that affect how sections render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub escape: EscapeMode,
    pub date_style: DateStyle,
}

/// Errors from rendering a single template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders section instances with the built-in templates.
pub struct SectionRenderer {
    env: Environment<'static>,
}

impl SectionRenderer {
    /// Create a renderer with all section templates registered.
    pub fn new(options: RenderOptions) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);

        let mode = options.escape;
        env.set_formatter(move |out: &mut Output, _state: &State, value: &Value| {
            format_value(out, value, mode)
        });

        for id in TemplateId::ALL {
            env.add_template(id.as_str(), templates::source(id))
                .expect("Failed to add section template");
        }

        env.add_function("icon", functions::icon);
        env.add_function("stars", functions::stars);

        let date_style = options.date_style;
        env.add_function("format_date", move |value: Option<Value>| {
            functions::format_date(value.as_ref(), date_style)
        });

        Self { env }
    }

    /// Render a section instance.
    ///
    /// Never fails: unknown template ids become an HTML comment, and a template that fails
    /// at runtime is replaced by a comment as well.
    pub fn render(&self, section: &SectionInstance) -> String {
        let id = match section.template_id.parse::<TemplateId>() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("{} (section {})", e, section.id);
                return unsupported_comment(&section.template_id);
            }
        };

        match self.render_template(id, &section.id, &section.content) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to render section {} ({}): {}", section.id, id, e);
                format!(
                    "<!-- Failed to render section {} -->\n",
                    comment_text(&section.id)
                )
            }
        }
    }

    /// Render one template against raw content.
    pub fn render_template(
        &self,
        id: TemplateId,
        section_id: &str,
        content: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(id.as_str())?;

        let empty = serde_json::Value::Object(Default::default());
        let content = if content.is_null() { &empty } else { content };

        let html = tmpl.render(context! {
            content => content,
            section_id => section_id,
            template_id => id.as_str(),
        })?;

        Ok(html)
    }
}

impl Default for SectionRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Placeholder emitted for template ids outside the known vocabulary.
pub fn unsupported_comment(template_id: &str) -> String {
    format!(
        "<!-- Unsupported section type: {} -->\n",
        comment_text(template_id)
    )
}

/// Print missing values as nothing, safe strings verbatim, everything else per `mode`.
fn format_value(out: &mut Output, value: &Value, mode: EscapeMode) -> Result<(), Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(());
    }

    let written = if value.is_safe() || mode == EscapeMode::Trusted {
        write!(out, "{}", value)
    } else {
        write!(out, "{}", escape(&value.to_string()))
    };

    written.map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn section(template_id: &str, content: serde_json::Value) -> SectionInstance {
        SectionInstance::new("s1", template_id, content, 0.0)
    }

    #[test]
    fn unknown_template_becomes_comment() {
        let renderer = SectionRenderer::default();

        let html = renderer.render(&section("gallery-masonry-009", json!({ "title": "Hi" })));

        assert_eq!(html, "<!-- Unsupported section type: gallery-masonry-009 -->\n");
        assert!(!html.contains("Hi"));
    }

    #[test]
    fn hostile_template_id_cannot_escape_comment() {
        let renderer = SectionRenderer::default();

        let html = renderer.render(&section("x --><script>alert(1)</script>", json!({})));

        assert!(html.starts_with("<!--"));
        assert_eq!(html.matches("-->").count(), 1);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn escapes_content_by_default() {
        let renderer = SectionRenderer::default();

        let html = renderer.render(&section(
            "cta-simple-001",
            json!({ "title": "<script>alert('x')</script>" }),
        ));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn trusted_mode_emits_content_verbatim() {
        let renderer = SectionRenderer::new(RenderOptions {
            escape: EscapeMode::Trusted,
            ..Default::default()
        });

        let html = renderer.render(&section(
            "cta-simple-001",
            json!({ "title": "Fast <em>and</em> simple" }),
        ));

        assert!(html.contains("Fast <em>and</em> simple"));
    }

    #[test]
    fn null_fields_print_nothing() {
        let renderer = SectionRenderer::default();

        let html = renderer.render(&section("cta-simple-001", json!({ "title": null })));

        assert!(html.contains(r#"text-white mb-4"></h2>"#));
        assert!(!html.contains("none"));
    }

    #[test]
    fn runtime_failure_degrades_to_comment() {
        let renderer = SectionRenderer::default();

        // Integers are not iterable.
        let html = renderer.render(&section("features-list-001", json!({ "features": 42 })));

        assert_eq!(html, "<!-- Failed to render section s1 -->\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = SectionRenderer::default();
        let s = section(
            "pricing-cards-001",
            crate::catalog::default_content(TemplateId::PricingCards),
        );

        assert_eq!(renderer.render(&s), renderer.render(&s));
    }
}
