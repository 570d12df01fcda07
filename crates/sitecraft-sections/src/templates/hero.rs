//! Hero sections.

use serde_json::{json, Value};

pub(crate) const MODERN: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="relative py-20 md:py-32 overflow-hidden" style="background: linear-gradient(135deg, rgba(var(--website-color-primary-rgb), 0.08) 0%, rgba(var(--website-color-accent-rgb), 0.08) 100%);">
  {% if content.backgroundImage %}<div class="absolute inset-0 bg-cover bg-center opacity-20" style="background-image: url('{{ content.backgroundImage }}');"></div>{% endif %}
  <div class="container mx-auto px-4 relative text-center max-w-4xl animate-fade-in-up">
    {% if content.subtitle %}<p class="text-sm font-semibold uppercase tracking-wider mb-4" style="color: var(--website-color-primary);">{{ content.subtitle }}</p>{% endif %}
    <h1 class="text-responsive-hero font-bold font-heading mb-6" style="color: var(--website-color-text);">{{ content.title }}</h1>
    {% if content.description %}<p class="text-lg md:text-xl mb-10" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    <div class="flex flex-col sm:flex-row gap-4 justify-center">
      {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="btn-primary">{{ content.ctaText }}</a>{% endif %}
      {% if content.secondaryCtaText %}<a href="{{ content.secondaryCtaLink }}" class="btn-outline">{{ content.secondaryCtaText }}</a>{% endif %}
    </div>
  </div>
</section>
"##;

pub(crate) const SPLIT: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
    <div class="animate-fade-in-up">
      {% if content.subtitle %}<span class="inline-block px-4 py-1 rounded-full text-sm font-medium mb-6" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ content.subtitle }}</span>{% endif %}
      <h1 class="text-responsive-hero font-bold font-heading mb-6" style="color: var(--website-color-text);">{{ content.title }}</h1>
      {% if content.description %}<p class="text-lg mb-8" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
      {% if content.features %}<ul class="space-y-3 mb-8">
        {% for feature in content.features %}<li class="flex items-center gap-3" style="color: var(--website-color-text);"><span style="color: var(--website-color-success);">{{ icon("Check", "w-5 h-5") }}</span>{{ feature }}</li>
        {% endfor %}
      </ul>{% endif %}
      <div class="flex flex-col sm:flex-row gap-4">
        {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="btn-primary">{{ content.ctaText }}</a>{% endif %}
        {% if content.secondaryCtaText %}<a href="{{ content.secondaryCtaLink }}" class="btn-secondary">{{ content.secondaryCtaText }}</a>{% endif %}
      </div>
    </div>
    {% if content.image %}<div class="relative">
      <div class="absolute -inset-4 rounded-3xl" style="background: linear-gradient(135deg, rgba(var(--website-color-primary-rgb), 0.2), rgba(var(--website-color-secondary-rgb), 0.2));"></div>
      <img src="{{ content.image }}" alt="{{ content.imageAlt | default(content.title) }}" class="relative w-full rounded-2xl object-cover" style="box-shadow: var(--website-shadow-xl);">
    </div>{% endif %}
  </div>
</section>
"##;

pub(crate) fn modern_defaults() -> Value {
    json!({
        "title": "Build Something Amazing",
        "subtitle": "Welcome to the future",
        "description": "Create beautiful websites in minutes with our intuitive builder. No coding required.",
        "ctaText": "Get Started",
        "ctaLink": "#contact",
        "secondaryCtaText": "Learn More",
        "secondaryCtaLink": "#about",
        "backgroundImage": ""
    })
}

pub(crate) fn split_defaults() -> Value {
    json!({
        "title": "Grow Your Business Online",
        "subtitle": "New release",
        "description": "Everything you need to launch, manage and grow a modern web presence.",
        "features": ["Fast setup", "Responsive by default", "Friendly support"],
        "ctaText": "Start Free Trial",
        "ctaLink": "#pricing",
        "secondaryCtaText": "Watch Demo",
        "secondaryCtaLink": "#features",
        "image": "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800",
        "imageAlt": "Team working together"
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::render;
    use crate::TemplateId;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_cta_without_secondary() {
        let html = render(
            TemplateId::HeroModern,
            json!({ "title": "Welcome", "ctaText": "Start", "ctaLink": "/start" }),
        );

        assert!(html.contains("Welcome"));
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(r#"<a href="/start" class="btn-primary">Start</a>"#));
        assert!(!html.contains("btn-outline"));
    }

    #[test]
    fn renders_secondary_cta_when_present() {
        let html = render(TemplateId::HeroModern, modern_defaults());

        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.find("Get Started").unwrap() < html.find("Learn More").unwrap());
    }

    #[test]
    fn skips_optional_blocks() {
        let html = render(TemplateId::HeroModern, json!({ "title": "Only a title" }));

        assert!(!html.contains("background-image"));
        assert!(!html.contains("uppercase tracking-wider"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn split_hero_lists_features_and_image() {
        let html = render(TemplateId::HeroSplit, split_defaults());

        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains(r#"alt="Team working together""#));
    }

    #[test]
    fn split_hero_alt_falls_back_to_title() {
        let html = render(
            TemplateId::HeroSplit,
            json!({ "title": "Hello", "image": "/hero.png" }),
        );

        assert!(html.contains(r#"alt="Hello""#));
        assert!(!html.contains("<ul"));
    }
}
