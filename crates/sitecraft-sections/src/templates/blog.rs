//! Blog post grid.
//!
//! Post dates go through `format_date`, so their rendering follows the configured
//! `DateStyle` rather than the host locale.

use serde_json::{json, Value};

pub(crate) const GRID: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid-responsive">
      {% for post in content.posts %}<article class="card overflow-hidden p-0 flex flex-col">
        {% if post.image %}<img src="{{ post.image }}" alt="{{ post.title }}" class="w-full h-48 object-cover">{% endif %}
        <div class="p-6 flex flex-col flex-1">
          <div class="flex items-center gap-3 text-sm mb-3" style="color: var(--website-color-text-secondary);">
            {% if post.category %}<span class="px-3 py-1 rounded-full text-xs font-medium" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ post.category }}</span>{% endif %}
            {% if post.date %}<time datetime="{{ post.date }}">{{ format_date(post.date) }}</time>{% endif %}
          </div>
          <h3 class="text-xl font-semibold font-heading mb-3" style="color: var(--website-color-text);">{{ post.title }}</h3>
          <p class="flex-1 mb-4" style="color: var(--website-color-text-secondary);">{{ post.excerpt }}</p>
          <div class="flex items-center justify-between">
            {% if post.author %}<span class="text-sm font-medium" style="color: var(--website-color-text);">{{ post.author }}</span>{% endif %}
            {% if post.link %}<a href="{{ post.link }}" class="inline-flex items-center gap-1 font-medium" style="color: var(--website-color-primary);">{{ content.readMoreText | default("Read More") }}{{ icon("ArrowRight", "w-4 h-4") }}</a>{% endif %}
          </div>
        </div>
      </article>
      {% endfor %}
    </div>
    {% if content.viewAllText %}<div class="text-center mt-12"><a href="{{ content.viewAllLink }}" class="btn-outline">{{ content.viewAllText }}</a></div>{% endif %}
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Latest Articles",
        "subtitle": "Blog",
        "description": "Insights, tips and news from our team.",
        "posts": [
            {
                "title": "10 Tips for a Better Landing Page",
                "excerpt": "Simple changes that make a big difference to your conversion rate.",
                "image": "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=600",
                "date": "2024-01-15",
                "author": "Sarah Johnson",
                "category": "Design",
                "link": "#"
            },
            {
                "title": "Choosing the Right Color Palette",
                "excerpt": "How color shapes the way visitors feel about your brand.",
                "image": "https://images.unsplash.com/photo-1513542789411-b6a5d4f31634?w=600",
                "date": "2024-01-10",
                "author": "Emily Davis",
                "category": "Branding",
                "link": "#"
            },
            {
                "title": "Why Page Speed Matters",
                "excerpt": "Faster pages keep visitors around longer.",
                "image": "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600",
                "date": "2024-01-05",
                "author": "Michael Chen",
                "category": "Performance",
                "link": "#"
            }
        ],
        "viewAllText": "View All Posts",
        "viewAllLink": "#"
    })
}
