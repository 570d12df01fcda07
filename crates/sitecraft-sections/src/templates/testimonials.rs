use serde_json::{json, Value};

pub(crate) const GRID: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-surface);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
    </div>
    <div class="grid-responsive">
      {% for testimonial in content.testimonials %}<figure class="card flex flex-col">
        <div class="flex mb-4">{{ stars(testimonial.rating) }}</div>
        <blockquote class="flex-1 mb-6 italic" style="color: var(--website-color-text);">&ldquo;{{ testimonial.content }}&rdquo;</blockquote>
        <figcaption class="flex items-center gap-3">
          {% if testimonial.avatar %}<img src="{{ testimonial.avatar }}" alt="{{ testimonial.name }}" class="w-12 h-12 rounded-full object-cover">{% elif testimonial.name %}<span class="w-12 h-12 rounded-full flex items-center justify-center font-semibold" style="background-color: rgba(var(--website-color-primary-rgb), 0.15); color: var(--website-color-primary);">{{ testimonial.name | string | first | upper }}</span>{% endif %}
          <div>
            <div class="font-semibold" style="color: var(--website-color-text);">{{ testimonial.name }}</div>
            <div class="text-sm" style="color: var(--website-color-text-secondary);">{{ testimonial.role }}{% if testimonial.company %}, {{ testimonial.company }}{% endif %}</div>
          </div>
        </figcaption>
      </figure>
      {% endfor %}
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "What Our Clients Say",
        "subtitle": "Testimonials",
        "testimonials": [
            {
                "name": "Jennifer Wilson",
                "role": "Marketing Director",
                "company": "TechCorp",
                "content": "Working with this team transformed our online presence. Highly recommended!",
                "avatar": "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=200",
                "rating": 5
            },
            {
                "name": "David Martinez",
                "role": "Founder",
                "company": "StartupHub",
                "content": "Professional, responsive and genuinely creative.",
                "avatar": "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200",
                "rating": 5
            },
            {
                "name": "Lisa Thompson",
                "role": "Product Manager",
                "company": "InnovateCo",
                "content": "The new site doubled our sign-ups within a month.",
                "avatar": "",
                "rating": 4
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::render;
    use crate::TemplateId;
    use pretty_assertions::assert_eq;

    fn star_states(html: &str) -> Vec<&str> {
        html.match_indices("data-star=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn rating_three_fills_three_of_five() {
        let html = render(
            TemplateId::TestimonialsGrid,
            json!({
                "title": "Reviews",
                "testimonials": [{ "name": "Kim", "role": "Buyer", "content": "Good", "rating": 3 }]
            }),
        );

        assert_eq!(
            star_states(&html),
            vec!["filled", "filled", "filled", "empty", "empty"]
        );
    }

    #[test]
    fn initial_placeholder_without_avatar() {
        let html = render(
            TemplateId::TestimonialsGrid,
            json!({ "testimonials": [{ "name": "lisa", "content": "Nice", "rating": 4 }] }),
        );

        assert!(html.contains(">L</span>"));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"color: var(--website-color-text-secondary);"></div>"#));
    }

    #[test]
    fn company_follows_role() {
        let html = render(TemplateId::TestimonialsGrid, defaults());

        assert!(html.contains("Marketing Director, TechCorp"));
        assert_eq!(star_states(&html).len(), 15);
    }
}
