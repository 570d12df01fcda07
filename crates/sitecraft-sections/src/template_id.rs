//! The closed vocabulary of section template identifiers.

use std::fmt;
use std::str::FromStr;

/// A recognized section template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    HeaderSimple,
    HeaderModern,
    HeroModern,
    HeroSplit,
    AboutSimple,
    AboutTeam,
    ServicesGrid,
    FeaturesList,
    PricingCards,
    TestimonialsGrid,
    PortfolioGrid,
    ContactForm,
    FooterSimple,
    FooterDetailed,
    CtaSimple,
    BlogGrid,
}

/// Unrecognized template identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section template: {0}")]
pub struct UnknownTemplate(pub String);

impl TemplateId {
    /// Every template, in catalog order.
    pub const ALL: [TemplateId; 16] = [
        TemplateId::HeaderSimple,
        TemplateId::HeaderModern,
        TemplateId::HeroModern,
        TemplateId::HeroSplit,
        TemplateId::AboutSimple,
        TemplateId::AboutTeam,
        TemplateId::ServicesGrid,
        TemplateId::FeaturesList,
        TemplateId::PricingCards,
        TemplateId::TestimonialsGrid,
        TemplateId::PortfolioGrid,
        TemplateId::ContactForm,
        TemplateId::FooterSimple,
        TemplateId::FooterDetailed,
        TemplateId::CtaSimple,
        TemplateId::BlogGrid,
    ];

    /// The wire identifier, e.g. `hero-split-002`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::HeaderSimple => "header-simple-001",
            TemplateId::HeaderModern => "header-modern-002",
            TemplateId::HeroModern => "hero-modern-001",
            TemplateId::HeroSplit => "hero-split-002",
            TemplateId::AboutSimple => "about-simple-001",
            TemplateId::AboutTeam => "about-team-002",
            TemplateId::ServicesGrid => "services-grid-001",
            TemplateId::FeaturesList => "features-list-001",
            TemplateId::PricingCards => "pricing-cards-001",
            TemplateId::TestimonialsGrid => "testimonials-grid-001",
            TemplateId::PortfolioGrid => "portfolio-grid-001",
            TemplateId::ContactForm => "contact-form-001",
            TemplateId::FooterSimple => "footer-simple-001",
            TemplateId::FooterDetailed => "footer-detailed-002",
            TemplateId::CtaSimple => "cta-simple-001",
            TemplateId::BlogGrid => "blog-grid-001",
        }
    }

    /// Section archetype, shared by the variants of one kind.
    pub fn category(&self) -> &'static str {
        match self {
            TemplateId::HeaderSimple | TemplateId::HeaderModern => "header",
            TemplateId::HeroModern | TemplateId::HeroSplit => "hero",
            TemplateId::AboutSimple | TemplateId::AboutTeam => "about",
            TemplateId::ServicesGrid => "services",
            TemplateId::FeaturesList => "features",
            TemplateId::PricingCards => "pricing",
            TemplateId::TestimonialsGrid => "testimonials",
            TemplateId::PortfolioGrid => "portfolio",
            TemplateId::ContactForm => "contact",
            TemplateId::FooterSimple | TemplateId::FooterDetailed => "footer",
            TemplateId::CtaSimple => "cta",
            TemplateId::BlogGrid => "blog",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::HeaderSimple => "Simple Header",
            TemplateId::HeaderModern => "Modern Header",
            TemplateId::HeroModern => "Modern Hero",
            TemplateId::HeroSplit => "Split Hero",
            TemplateId::AboutSimple => "Simple About",
            TemplateId::AboutTeam => "About with Team",
            TemplateId::ServicesGrid => "Services Grid",
            TemplateId::FeaturesList => "Features List",
            TemplateId::PricingCards => "Pricing Cards",
            TemplateId::TestimonialsGrid => "Testimonials Grid",
            TemplateId::PortfolioGrid => "Portfolio Grid",
            TemplateId::ContactForm => "Contact Form",
            TemplateId::FooterSimple => "Simple Footer",
            TemplateId::FooterDetailed => "Detailed Footer",
            TemplateId::CtaSimple => "Simple Call to Action",
            TemplateId::BlogGrid => "Blog Grid",
        }
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
