//! Page export: project + theme -> standalone HTML document.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use rayon::prelude::*;
use regex::Regex;

use sitecraft_model::{Project, ThemeConfig, ThemeRegistry};
use sitecraft_sections::{DateStyle, EscapeMode, RenderOptions, SectionRenderer, TemplateId};

use crate::assets::AssetPipeline;
use crate::document::{DocumentContext, DocumentTemplate};
use crate::fonts::google_fonts_url;

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Configuration for exporting pages.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// How section content is interpolated
    pub escape: EscapeMode,

    /// How `format_date` renders dates
    pub date_style: DateStyle,

    /// Minify the inline stylesheet
    pub minify_css: bool,

    /// Document language
    pub lang: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            escape: EscapeMode::Escape,
            date_style: DateStyle::Numeric,
            minify_css: false,
            lang: "en".to_string(),
        }
    }
}

/// Result of a batch export.
#[derive(Debug)]
pub struct ExportSummary {
    /// Number of pages written
    pub pages: usize,

    /// Number of sections across all pages
    pub sections: usize,

    /// Sections whose template id was not recognized
    pub unsupported: usize,

    /// Total export time in milliseconds
    pub duration_ms: u64,

    /// Written files, in input order
    pub files: Vec<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Turns projects into standalone HTML documents.
pub struct Exporter {
    options: ExportOptions,
    themes: ThemeRegistry,
    sections: SectionRenderer,
    document: DocumentTemplate,
}

impl Exporter {
    /// Create an exporter with the built-in themes.
    pub fn new(options: ExportOptions) -> Self {
        let sections = SectionRenderer::new(RenderOptions {
            escape: options.escape,
            date_style: options.date_style,
        });

        Self {
            options,
            themes: ThemeRegistry::with_builtin(),
            sections,
            document: DocumentTemplate::new(),
        }
    }

    /// Replace the theme registry.
    pub fn with_themes(mut self, themes: ThemeRegistry) -> Self {
        self.themes = themes;
        self
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a project using the theme its `theme_id` names.
    ///
    /// Unknown theme ids fall back to the default theme.
    pub fn export(&self, project: &Project) -> Result<String, ExportError> {
        let theme = self.themes.resolve(&project.theme_id);
        self.generate_complete_html(project, theme)
    }

    /// Produce the complete document for `project` styled by `theme`.
    ///
    /// Sections are emitted in ascending `order`; equal orders keep their input order.
    /// The output is a pure function of the inputs and the exporter options.
    pub fn generate_complete_html(
        &self,
        project: &Project,
        theme: &ThemeConfig,
    ) -> Result<String, ExportError> {
        let body = self.render_body(project);

        let context = DocumentContext {
            lang: self.options.lang.clone(),
            title: project.page_title().to_string(),
            description: project
                .seo
                .description
                .clone()
                .or_else(|| project.description.clone())
                .filter(|d| !d.trim().is_empty()),
            keywords: project.seo.keywords.join(", "),
            og_image: project.seo.og_image.clone().filter(|s| !s.trim().is_empty()),
            fonts_url: google_fonts_url(&theme.fonts),
            styles: AssetPipeline::stylesheet(theme, self.options.minify_css),
            body,
            script: AssetPipeline::script().to_string(),
        };

        self.document
            .render(&context)
            .map_err(|e| ExportError::TemplateError(e.to_string()))
    }

    /// Concatenated section fragments in page order.
    pub fn render_body(&self, project: &Project) -> String {
        let mut body = String::new();
        for section in project.ordered_sections() {
            tracing::debug!(
                "Rendering section {} ({}) at order {}",
                section.id,
                section.template_id,
                section.order
            );
            body.push_str(&self.sections.render(section));
        }
        body
    }

    /// Export every project into `output_dir`, one `<slug>.html` per project.
    pub fn export_all(
        &self,
        projects: &[Project],
        output_dir: &Path,
    ) -> Result<ExportSummary, ExportError> {
        let start = Instant::now();

        fs::create_dir_all(output_dir).map_err(|e| ExportError::WriteError(e.to_string()))?;

        let files: Vec<PathBuf> = output_file_names(projects)
            .into_iter()
            .map(|name| output_dir.join(name))
            .collect();

        let results: Vec<Result<(), ExportError>> = projects
            .par_iter()
            .zip(files.par_iter())
            .map(|(project, path)| self.export_to(project, path))
            .collect();

        for result in results {
            result?;
        }

        let sections = projects.iter().map(|p| p.sections.len()).sum();
        let unsupported = projects
            .iter()
            .flat_map(|p| &p.sections)
            .filter(|s| s.template_id.parse::<TemplateId>().is_err())
            .count();

        let duration = start.elapsed();

        Ok(ExportSummary {
            pages: projects.len(),
            sections,
            unsupported,
            duration_ms: duration.as_millis() as u64,
            files,
            output_dir: output_dir.to_path_buf(),
        })
    }

    fn export_to(&self, project: &Project, path: &Path) -> Result<(), ExportError> {
        let html = self.export(project)?;

        fs::write(path, html)
            .map_err(|e| ExportError::WriteError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Exported {} -> {}", project.name, path.display());
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

/// Lowercase, dash separated form of `s` suitable for file names.
pub fn slugify(s: &str) -> String {
    NON_SLUG
        .replace_all(&s.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// One unique `.html` file name per project, from its name (or id when the name has no
/// usable characters).
fn output_file_names(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();

    projects
        .iter()
        .map(|project| {
            let mut base = slugify(&project.name);
            if base.is_empty() {
                base = slugify(&project.id);
            }
            if base.is_empty() {
                base = "page".to_string();
            }

            let mut name = base.clone();
            let mut n = 2;
            while !seen.insert(name.clone()) {
                name = format!("{}-{}", base, n);
                n += 1;
            }
            format!("{}.html", name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use sitecraft_model::{presets, SectionInstance};
    use tempfile::TempDir;

    fn project(sections: Vec<SectionInstance>) -> Project {
        let mut project = Project::new("p1", "Acme Landing");
        project.sections = sections;
        project
    }

    #[test]
    fn hero_section_renders_title_and_cta() {
        let exporter = Exporter::default();
        let page = project(vec![SectionInstance::new(
            "hero",
            "hero-modern-001",
            json!({ "title": "Welcome", "ctaText": "Start", "ctaLink": "/start" }),
            0.0,
        )]);

        let html = exporter.export(&page).unwrap();

        assert!(html.contains(">Welcome</h1>"));
        assert!(html.contains(r#"<a href="/start" class="btn-primary">Start</a>"#));
        assert!(!html.contains("btn-outline\">"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn theme_variables_are_declared() {
        let exporter = Exporter::default();
        let html = exporter
            .generate_complete_html(&project(vec![]), &presets::modern())
            .unwrap();

        assert!(html.contains("--website-color-primary: #3b82f6;"));
        assert!(html.contains("--website-color-primary-rgb: 59, 130, 246;"));
        assert!(html.contains("--website-shadow-xl:"));
        assert!(html.contains("family=Inter:wght@300;400;500;600;700"));
    }

    #[test]
    fn testimonial_rating_fills_three_of_five_stars() {
        let exporter = Exporter::default();
        let page = project(vec![SectionInstance::new(
            "reviews",
            "testimonials-grid-001",
            json!({ "testimonials": [{ "name": "Ann", "content": "Great", "rating": 3 }] }),
            0.0,
        )]);

        let body = exporter.render_body(&page);

        assert_eq!(body.matches(r#"data-star="filled""#).count(), 3);
        assert_eq!(body.matches(r#"data-star="empty""#).count(), 2);
    }

    #[test]
    fn unknown_icon_falls_back_to_default_glyph() {
        let exporter = Exporter::default();
        let with_unknown = project(vec![SectionInstance::new(
            "svc",
            "services-grid-001",
            json!({ "services": [{ "title": "A", "icon": "DoesNotExist" }] }),
            0.0,
        )]);
        let with_star = project(vec![SectionInstance::new(
            "svc",
            "services-grid-001",
            json!({ "services": [{ "title": "A", "icon": "Star" }] }),
            0.0,
        )]);

        assert_eq!(
            exporter.render_body(&with_unknown),
            exporter.render_body(&with_star)
        );
    }

    #[test]
    fn sections_follow_order_not_input_position() {
        let exporter = Exporter::default();
        let page = project(vec![
            SectionInstance::new("footer", "footer-simple-001", json!({}), 2.0),
            SectionInstance::new("header", "header-simple-001", json!({}), 0.0),
            SectionInstance::new("hero", "hero-modern-001", json!({}), 1.0),
        ]);

        let html = exporter.export(&page).unwrap();

        let header = html.find(r#"id="section-header""#).unwrap();
        let hero = html.find(r#"id="section-hero""#).unwrap();
        let footer = html.find(r#"id="section-footer""#).unwrap();
        assert!(header < hero && hero < footer);
    }

    #[test]
    fn equal_orders_keep_input_order() {
        let exporter = Exporter::default();
        let page = project(vec![
            SectionInstance::new("b", "cta-simple-001", json!({}), 1.0),
            SectionInstance::new("a", "cta-simple-001", json!({}), 1.0),
        ]);

        let body = exporter.render_body(&page);

        assert!(body.find("section-b").unwrap() < body.find("section-a").unwrap());
    }

    #[test]
    fn unknown_template_is_a_comment_in_place() {
        let exporter = Exporter::default();
        let page = project(vec![
            SectionInstance::new("one", "cta-simple-001", json!({}), 0.0),
            SectionInstance::new("two", "carousel-999", json!({ "title": "Hidden" }), 1.0),
            SectionInstance::new("three", "footer-simple-001", json!({}), 2.0),
        ]);

        let html = exporter.export(&page).unwrap();

        let comment = html
            .find("<!-- Unsupported section type: carousel-999 -->")
            .unwrap();
        assert!(html.find("section-one").unwrap() < comment);
        assert!(comment < html.find("section-three").unwrap());
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn empty_project_is_a_complete_document() {
        let html = Exporter::default().export(&project(vec![])).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme Landing</title>"));
        assert!(html.contains("<body>\n\n<script>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn seo_metadata_lands_in_head() {
        let mut page = project(vec![]);
        page.seo.title = Some("Acme | Home".to_string());
        page.seo.description = Some("Best widgets".to_string());
        page.seo.keywords = vec!["widgets".to_string(), "acme".to_string()];
        page.seo.og_image = Some("https://acme.test/og.png".to_string());

        let html = Exporter::default().export(&page).unwrap();

        assert!(html.contains("<title>Acme | Home</title>"));
        assert!(html.contains(r#"<meta name="description" content="Best widgets">"#));
        assert!(html.contains(r#"<meta name="keywords" content="widgets, acme">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://acme.test/og.png">"#));
    }

    #[test]
    fn unknown_theme_uses_default() {
        let exporter = Exporter::default();
        let mut page = project(vec![]);
        page.theme_id = "neon".to_string();

        let fallback = exporter.export(&page).unwrap();
        let modern = exporter
            .generate_complete_html(&page, &presets::modern())
            .unwrap();

        assert_eq!(fallback, modern);
    }

    #[test]
    fn theme_changes_only_variables() {
        let exporter = Exporter::default();
        let page = project(vec![SectionInstance::new(
            "hero",
            "hero-modern-001",
            json!({ "title": "Same" }),
            0.0,
        )]);

        let modern = exporter.generate_complete_html(&page, &presets::modern()).unwrap();
        let sunset = exporter.generate_complete_html(&page, &presets::sunset()).unwrap();

        assert_ne!(modern, sunset);
        let body = |html: &str| html[html.find("<body>").unwrap()..].to_string();
        assert_eq!(body(&modern), body(&sunset));
    }

    #[test]
    fn export_is_byte_identical_across_runs() {
        let page = project(
            TemplateId::ALL
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    SectionInstance::new(
                        format!("s{}", i),
                        id.as_str(),
                        sitecraft_sections::catalog::default_content(*id),
                        i as f64,
                    )
                })
                .collect(),
        );

        let first = Exporter::default().export(&page).unwrap();
        let second = Exporter::default().export(&page).unwrap();

        assert_eq!(first, second);
        assert!(!first.contains("undefined"));
        assert!(!first.contains("<!-- Failed"));
    }

    #[test]
    fn minified_export_keeps_variables() {
        let exporter = Exporter::new(ExportOptions {
            minify_css: true,
            ..Default::default()
        });

        let html = exporter.export(&project(vec![])).unwrap();

        assert!(html.contains("--website-color-primary"));
        assert!(!html.contains(".btn-primary {\n"));
    }

    #[test]
    fn export_all_writes_one_file_per_project() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");
        let mut second = Project::new("p2", "Acme Landing");
        second.sections = vec![SectionInstance::new("x", "nope-001", json!({}), 0.0)];
        let projects = vec![
            project(vec![SectionInstance::new("c", "cta-simple-001", json!({}), 0.0)]),
            second,
            Project::new("p3", "!!!"),
        ];

        let summary = Exporter::default().export_all(&projects, &out).unwrap();

        assert_eq!(summary.pages, 3);
        assert_eq!(summary.sections, 2);
        assert_eq!(summary.unsupported, 1);
        assert_eq!(
            summary.files,
            vec![
                out.join("acme-landing.html"),
                out.join("acme-landing-2.html"),
                out.join("p3.html"),
            ]
        );
        for file in &summary.files {
            let html = fs::read_to_string(file).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
    }

    #[test]
    fn slugify_names() {
        assert_eq!(slugify("Acme Landing Page"), "acme-landing-page");
        assert_eq!(slugify("  Café & Bar!  "), "caf-bar");
        assert_eq!(slugify("---"), "");
    }

    proptest! {
        #[test]
        fn body_respects_section_order(orders in prop::collection::vec(-5i64..5, 0..8)) {
            let exporter = Exporter::default();
            let page = project(
                orders
                    .iter()
                    .enumerate()
                    .map(|(i, order)| {
                        SectionInstance::new(
                            format!("s{}x", i),
                            "cta-simple-001",
                            json!({}),
                            *order as f64,
                        )
                    })
                    .collect(),
            );

            let body = exporter.render_body(&page);

            let mut expected: Vec<(i64, usize)> =
                orders.iter().copied().zip(0..orders.len()).collect();
            expected.sort_by_key(|(order, _)| *order);

            let positions: Vec<usize> = expected
                .iter()
                .map(|(_, i)| body.find(&format!("id=\"section-s{}x\"", i)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn export_is_deterministic(
            sections in prop::collection::vec((".{0,24}", -100.0f64..100.0), 0..6),
            project_title in ".{0,24}",
        ) {
            let mut page = project(
                sections
                    .iter()
                    .enumerate()
                    .map(|(i, (title, order))| {
                        SectionInstance::new(
                            format!("h{}", i),
                            "hero-modern-001",
                            json!({ "title": title }),
                            *order,
                        )
                    })
                    .collect(),
            );
            page.seo.title = Some(project_title);

            let first = Exporter::default().export(&page).unwrap();
            let second = Exporter::default().export(&page).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
