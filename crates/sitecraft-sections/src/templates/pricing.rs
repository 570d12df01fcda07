//! Pricing plans.
//!
//! A plan with `highlighted: true` is rendered with the primary ring and a badge.

use serde_json::{json, Value};

pub(crate) const CARDS: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto items-stretch">
      {% for plan in content.plans %}<div class="card relative flex flex-col{% if plan.highlighted %} plan-highlighted{% endif %}"{% if plan.highlighted %} style="border: 2px solid var(--website-color-primary); box-shadow: var(--website-shadow-xl);"{% endif %}>
        {% if plan.highlighted %}<span class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full text-sm font-semibold" style="background-color: var(--website-color-primary); color: #ffffff;">{{ content.popularLabel | default("Most Popular") }}</span>{% endif %}
        <h3 class="text-xl font-semibold font-heading mb-2" style="color: var(--website-color-text);">{{ plan.name }}</h3>
        {% if plan.description %}<p class="text-sm mb-4" style="color: var(--website-color-text-secondary);">{{ plan.description }}</p>{% endif %}
        <div class="mb-6">
          <span class="text-4xl font-bold font-heading" style="color: var(--website-color-text);">{{ plan.currency | default("$") }}{{ plan.price }}</span>
          {% if plan.period %}<span style="color: var(--website-color-text-secondary);">/{{ plan.period }}</span>{% endif %}
        </div>
        <ul class="space-y-3 mb-8 flex-1">
          {% for feature in plan.features %}<li class="flex items-start gap-2" style="color: var(--website-color-text);"><span style="color: var(--website-color-success);">{{ icon("Check", "w-5 h-5") }}</span>{{ feature }}</li>
          {% endfor %}
        </ul>
        {% if plan.ctaText %}<a href="{{ plan.ctaLink }}" class="{% if plan.highlighted %}btn-primary{% else %}btn-outline{% endif %} text-center">{{ plan.ctaText }}</a>{% endif %}
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Simple, Transparent Pricing",
        "subtitle": "Pricing",
        "description": "Choose the plan that fits your needs.",
        "plans": [
            {
                "name": "Starter",
                "price": "9",
                "period": "month",
                "description": "For individuals getting started",
                "features": ["1 website", "Basic analytics", "Email support"],
                "ctaText": "Choose Starter",
                "ctaLink": "#contact",
                "highlighted": false
            },
            {
                "name": "Professional",
                "price": "29",
                "period": "month",
                "description": "For growing businesses",
                "features": ["10 websites", "Advanced analytics", "Priority support", "Custom domain"],
                "ctaText": "Choose Professional",
                "ctaLink": "#contact",
                "highlighted": true
            },
            {
                "name": "Enterprise",
                "price": "99",
                "period": "month",
                "description": "For large organizations",
                "features": ["Unlimited websites", "Dedicated manager", "SLA", "SSO"],
                "ctaText": "Contact Sales",
                "ctaLink": "#contact",
                "highlighted": false
            }
        ]
    })
}
