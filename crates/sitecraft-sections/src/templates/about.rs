//! About sections: a text-and-image block and a team grid.

use serde_json::{json, Value};

pub(crate) const SIMPLE: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-surface);">
  <div class="container mx-auto px-4 grid {% if content.image %}md:grid-cols-2 {% endif %}gap-12 items-center">
    <div>
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title mb-6">{{ content.title }}</h2>
      <p class="text-lg leading-relaxed" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>
      {% if content.stats %}<div class="grid grid-cols-2 md:grid-cols-{{ [content.stats | length, 4] | min }} gap-6 mt-10">
        {% for stat in content.stats %}<div>
          <div class="text-3xl font-bold font-heading" style="color: var(--website-color-primary);">{{ stat.value }}</div>
          <div class="text-sm" style="color: var(--website-color-text-secondary);">{{ stat.label }}</div>
        </div>
        {% endfor %}
      </div>{% endif %}
    </div>
    {% if content.image %}<img src="{{ content.image }}" alt="{{ content.title }}" class="w-full rounded-2xl object-cover" style="box-shadow: var(--website-shadow-lg);">{% endif %}
  </div>
</section>
"##;

pub(crate) const TEAM: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title mb-4">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid-responsive">
      {% for member in content.teamMembers %}<div class="card text-center">
        {% if member.image %}<img src="{{ member.image }}" alt="{{ member.name }}" class="w-32 h-32 rounded-full mx-auto mb-4 object-cover">{% endif %}
        <h3 class="text-xl font-semibold font-heading" style="color: var(--website-color-text);">{{ member.name }}</h3>
        <p class="text-sm font-medium mb-3" style="color: var(--website-color-primary);">{{ member.role }}</p>
        {% if member.bio %}<p class="text-sm mb-4" style="color: var(--website-color-text-secondary);">{{ member.bio }}</p>{% endif %}
        {% if member.social %}<div class="flex justify-center gap-3">
          {% for link in member.social %}<a href="{{ link.url }}" class="social-link" aria-label="{{ link.platform }}">{{ icon(link.platform, "w-5 h-5") }}</a>
          {% endfor %}
        </div>{% endif %}
      </div>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn simple_defaults() -> Value {
    json!({
        "title": "About Us",
        "subtitle": "Our Story",
        "description": "We are a passionate team dedicated to creating exceptional digital experiences. Since our founding we have helped hundreds of businesses establish their online presence.",
        "image": "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800",
        "stats": [
            { "value": "10+", "label": "Years Experience" },
            { "value": "500+", "label": "Happy Clients" },
            { "value": "1000+", "label": "Projects Done" },
            { "value": "24/7", "label": "Support" }
        ]
    })
}

pub(crate) fn team_defaults() -> Value {
    json!({
        "title": "Meet Our Team",
        "subtitle": "The people behind the work",
        "description": "Talented professionals committed to your success.",
        "teamMembers": [
            {
                "name": "Sarah Johnson",
                "role": "CEO & Founder",
                "image": "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400",
                "bio": "Fifteen years of experience leading product teams.",
                "social": [
                    { "platform": "Linkedin", "url": "#" },
                    { "platform": "Twitter", "url": "#" }
                ]
            },
            {
                "name": "Michael Chen",
                "role": "Lead Developer",
                "image": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
                "bio": "Full-stack engineer who loves clean code.",
                "social": [
                    { "platform": "Github", "url": "#" },
                    { "platform": "Linkedin", "url": "#" }
                ]
            },
            {
                "name": "Emily Davis",
                "role": "Design Director",
                "image": "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400",
                "bio": "Crafting interfaces people enjoy using.",
                "social": [
                    { "platform": "Instagram", "url": "#" }
                ]
            }
        ]
    })
}
