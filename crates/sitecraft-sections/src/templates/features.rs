use serde_json::{json, Value};

pub(crate) const LIST: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-surface);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
      {% for feature in content.features %}<div class="flex gap-4">
        <div class="flex-shrink-0 w-12 h-12 rounded-lg flex items-center justify-center" style="background-color: var(--website-color-primary); color: #ffffff;">{{ icon(feature.icon) }}</div>
        <div>
          <h3 class="text-lg font-semibold font-heading mb-2" style="color: var(--website-color-text);">{{ feature.title }}</h3>
          <p style="color: var(--website-color-text-secondary);">{{ feature.description }}</p>
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Why Choose Us",
        "subtitle": "Features",
        "features": [
            { "icon": "Zap", "title": "Lightning Fast", "description": "Optimized pages that load in a blink." },
            { "icon": "Shield", "title": "Secure by Default", "description": "Best practices baked into every page." },
            { "icon": "Users", "title": "Team Friendly", "description": "Collaborate on content with your whole team." },
            { "icon": "Globe", "title": "Global Reach", "description": "Serve visitors anywhere in the world." }
        ]
    })
}
