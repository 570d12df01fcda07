//! Catalog of section templates with their starting content.

use serde::Serialize;
use serde_json::Value;

use crate::template_id::TemplateId;
use crate::templates;

/// Description of a section template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Content a freshly added section starts with
    pub default_content: Value,
}

/// All templates in catalog order.
pub fn catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL.iter().map(|id| info(*id)).collect()
}

/// Catalog entry for one template.
pub fn info(id: TemplateId) -> TemplateInfo {
    TemplateInfo {
        id: id.as_str(),
        name: id.display_name(),
        category: id.category(),
        description: description(id),
        default_content: default_content(id),
    }
}

/// Starting content for a freshly added section of this template.
pub fn default_content(id: TemplateId) -> Value {
    templates::default_content(id)
}

/// Template source for one identifier.
pub fn source(id: TemplateId) -> &'static str {
    templates::source(id)
}

fn description(id: TemplateId) -> &'static str {
    match id {
        TemplateId::HeaderSimple => "Logo, navigation links and a call-to-action button",
        TemplateId::HeaderModern => "Translucent sticky header with pill navigation",
        TemplateId::HeroModern => "Centered headline over a soft gradient",
        TemplateId::HeroSplit => "Headline and feature checklist beside an image",
        TemplateId::AboutSimple => "Company story with an image and key numbers",
        TemplateId::AboutTeam => "Team member cards with social links",
        TemplateId::ServicesGrid => "Grid of services with icons",
        TemplateId::FeaturesList => "Two-column list of features with icons",
        TemplateId::PricingCards => "Pricing plans with a highlighted option",
        TemplateId::TestimonialsGrid => "Customer quotes with star ratings",
        TemplateId::PortfolioGrid => "Project thumbnails with hover details",
        TemplateId::ContactForm => "Contact details next to a message form",
        TemplateId::FooterSimple => "Single row footer with links and social icons",
        TemplateId::FooterDetailed => "Multi-column footer with a newsletter signup",
        TemplateId::CtaSimple => "Full-width call to action banner",
        TemplateId::BlogGrid => "Recent posts as cards",
    }
}
