use serde_json::{json, Value};

pub(crate) const SIMPLE: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-20" style="background: linear-gradient(135deg, var(--website-color-primary) 0%, var(--website-color-primary-dark) 100%);">
  <div class="container mx-auto px-4 text-center max-w-3xl">
    <h2 class="text-3xl md:text-4xl font-bold font-heading text-white mb-4">{{ content.title }}</h2>
    {% if content.description %}<p class="text-lg text-white/90 mb-8">{{ content.description }}</p>{% endif %}
    <div class="flex flex-col sm:flex-row gap-4 justify-center">
      {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="btn-light">{{ content.ctaText }}</a>{% endif %}
      {% if content.secondaryCtaText %}<a href="{{ content.secondaryCtaLink }}" class="btn-ghost-light">{{ content.secondaryCtaText }}</a>{% endif %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Ready to Get Started?",
        "description": "Join thousands of satisfied customers and take your business to the next level.",
        "ctaText": "Start Now",
        "ctaLink": "#contact",
        "secondaryCtaText": "",
        "secondaryCtaLink": ""
    })
}
