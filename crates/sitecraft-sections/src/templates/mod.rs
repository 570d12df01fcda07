//! Section template sources and their default content.
//!
//! Every template receives `content` (the section's raw JSON content), `section_id` and
//! `template_id`. Theme values are only referenced through `--website-*` CSS variables.

mod about;
mod blog;
mod contact;
mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod portfolio;
mod pricing;
mod services;
mod testimonials;

use serde_json::Value;

use crate::template_id::TemplateId;

/// Template source for a section template.
pub(crate) fn source(id: TemplateId) -> &'static str {
    match id {
        TemplateId::HeaderSimple => header::SIMPLE,
        TemplateId::HeaderModern => header::MODERN,
        TemplateId::HeroModern => hero::MODERN,
        TemplateId::HeroSplit => hero::SPLIT,
        TemplateId::AboutSimple => about::SIMPLE,
        TemplateId::AboutTeam => about::TEAM,
        TemplateId::ServicesGrid => services::GRID,
        TemplateId::FeaturesList => features::LIST,
        TemplateId::PricingCards => pricing::CARDS,
        TemplateId::TestimonialsGrid => testimonials::GRID,
        TemplateId::PortfolioGrid => portfolio::GRID,
        TemplateId::ContactForm => contact::FORM,
        TemplateId::FooterSimple => footer::SIMPLE,
        TemplateId::FooterDetailed => footer::DETAILED,
        TemplateId::CtaSimple => cta::SIMPLE,
        TemplateId::BlogGrid => blog::GRID,
    }
}

/// Starting content for a freshly added section.
pub(crate) fn default_content(id: TemplateId) -> Value {
    match id {
        TemplateId::HeaderSimple => header::simple_defaults(),
        TemplateId::HeaderModern => header::modern_defaults(),
        TemplateId::HeroModern => hero::modern_defaults(),
        TemplateId::HeroSplit => hero::split_defaults(),
        TemplateId::AboutSimple => about::simple_defaults(),
        TemplateId::AboutTeam => about::team_defaults(),
        TemplateId::ServicesGrid => services::defaults(),
        TemplateId::FeaturesList => features::defaults(),
        TemplateId::PricingCards => pricing::defaults(),
        TemplateId::TestimonialsGrid => testimonials::defaults(),
        TemplateId::PortfolioGrid => portfolio::defaults(),
        TemplateId::ContactForm => contact::defaults(),
        TemplateId::FooterSimple => footer::simple_defaults(),
        TemplateId::FooterDetailed => footer::detailed_defaults(),
        TemplateId::CtaSimple => cta::defaults(),
        TemplateId::BlogGrid => blog::defaults(),
    }
}

#[cfg(test)]
pub(crate) fn render(id: TemplateId, content: Value) -> String {
    crate::renderer::SectionRenderer::default()
        .render_template(id, "test", &content)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_renders_its_defaults() {
        for id in TemplateId::ALL {
            let html = render(id, default_content(id));

            assert!(
                html.contains(&format!(r#"data-template="{}""#, id.as_str())),
                "{} is missing its data-template marker",
                id
            );
            assert!(!html.contains("undefined"), "{} printed undefined", id);
        }
    }

    #[test]
    fn every_template_tolerates_empty_content() {
        for id in TemplateId::ALL {
            let html = render(id, Value::Null);

            assert!(html.contains(r#"id="section-test""#), "{} lost its root id", id);
        }
    }
}
