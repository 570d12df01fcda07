use serde_json::{json, Value};

pub(crate) const GRID: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid-responsive">
      {% for project in content.projects %}<article class="group relative overflow-hidden rounded-2xl" style="box-shadow: var(--website-shadow-md);">
        {% if project.image %}<img src="{{ project.image }}" alt="{{ project.title }}" class="w-full h-64 object-cover transition-transform duration-500 group-hover:scale-110">{% endif %}
        <div class="absolute inset-0 flex flex-col justify-end p-6 opacity-0 group-hover:opacity-100 transition-opacity" style="background: linear-gradient(to top, rgba(var(--website-color-text-rgb), 0.85), transparent);">
          {% if project.category %}<span class="text-sm font-medium mb-1" style="color: var(--website-color-accent-light);">{{ project.category }}</span>{% endif %}
          <h3 class="text-xl font-semibold font-heading text-white">{{ project.title }}</h3>
          {% if project.description %}<p class="text-sm text-white/80 mt-1">{{ project.description }}</p>{% endif %}
          {% if project.link %}<a href="{{ project.link }}" class="inline-flex items-center gap-1 mt-3 text-white font-medium">{{ content.linkText | default("View Project") }}{{ icon("ArrowRight", "w-4 h-4") }}</a>{% endif %}
        </div>
      </article>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Our Work",
        "subtitle": "Portfolio",
        "description": "A selection of recent projects.",
        "projects": [
            { "title": "E-commerce Platform", "category": "Web Development", "image": "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600", "link": "#" },
            { "title": "Fitness App", "category": "Mobile", "image": "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=600", "link": "#" },
            { "title": "Brand Identity", "category": "Design", "image": "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=600", "link": "#" }
        ]
    })
}
