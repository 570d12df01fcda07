use serde_json::{json, Value};

pub(crate) const GRID: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid-responsive">
      {% for service in content.services %}<div class="card card-hover">
        <div class="w-14 h-14 rounded-xl flex items-center justify-center mb-6" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ icon(service.icon, "w-7 h-7") }}</div>
        <h3 class="text-xl font-semibold font-heading mb-3" style="color: var(--website-color-text);">{{ service.title }}</h3>
        <p style="color: var(--website-color-text-secondary);">{{ service.description }}</p>
        {% if service.link %}<a href="{{ service.link }}" class="inline-flex items-center gap-1 mt-4 font-medium" style="color: var(--website-color-primary);">{{ service.linkText | default("Learn more") }}{{ icon("ArrowRight", "w-4 h-4") }}</a>{% endif %}
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Our Services",
        "subtitle": "What we do",
        "description": "Comprehensive solutions tailored to your needs.",
        "services": [
            { "icon": "Code", "title": "Web Development", "description": "Custom websites built with modern technology." },
            { "icon": "Smartphone", "title": "Mobile Apps", "description": "Native and cross-platform apps for every device." },
            { "icon": "Palette", "title": "UI/UX Design", "description": "Interfaces that are both beautiful and usable." },
            { "icon": "TrendingUp", "title": "Digital Marketing", "description": "Grow your reach with data-driven campaigns." },
            { "icon": "Shield", "title": "Security", "description": "Keep your data and your customers safe." },
            { "icon": "Settings", "title": "Maintenance", "description": "Ongoing support to keep everything running." }
        ]
    })
}
