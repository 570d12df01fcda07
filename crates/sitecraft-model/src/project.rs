//! Projects and their section instances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A page under construction: ordered sections, a theme reference and page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Identifier of the theme to apply
    #[serde(default = "default_theme_id")]
    pub theme_id: String,

    #[serde(default)]
    pub sections: Vec<SectionInstance>,

    #[serde(default)]
    pub seo: SeoMetadata,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_theme_id() -> String {
    crate::presets::DEFAULT_THEME_ID.to_string()
}

impl Project {
    /// Create an empty project using the default theme.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            theme_id: default_theme_id(),
            sections: Vec::new(),
            seo: SeoMetadata::default(),
            published: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sections sorted by `order`.
    ///
    /// Orders need not be unique, contiguous or integral; the sort is stable so ties keep
    /// their position in `sections`.
    pub fn ordered_sections(&self) -> Vec<&SectionInstance> {
        let mut sections: Vec<&SectionInstance> = self.sections.iter().collect();
        sections.sort_by(|a, b| a.order.total_cmp(&b.order));
        sections
    }

    /// Title for the exported document: the SEO title if set, else the project name.
    pub fn page_title(&self) -> &str {
        self.seo
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// One configured occurrence of a section template within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    pub id: String,

    /// Template identifier, e.g. `hero-modern-001`
    pub template_id: String,

    /// Free-form content; its shape depends on the template
    #[serde(default)]
    pub content: serde_json::Value,

    /// Position within the page; drag-reordering in the editor yields values like `1.5`
    #[serde(default)]
    pub order: f64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SectionInstance {
    pub fn new(
        id: impl Into<String>,
        template_id: impl Into<String>,
        content: serde_json::Value,
        order: f64,
    ) -> Self {
        Self {
            id: id.into(),
            template_id: template_id.into(),
            content,
            order,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Search and social metadata for a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Image URL for Open Graph previews
    #[serde(default)]
    pub og_image: Option<String>,
}
