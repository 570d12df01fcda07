//! Page footers.

use serde_json::{json, Value};

pub(crate) const SIMPLE: &str = r##"<footer id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-12 border-t" style="background-color: var(--website-color-surface); border-color: var(--website-color-border);">
  <div class="container mx-auto px-4">
    <div class="flex flex-col md:flex-row items-center justify-between gap-6">
      <div class="text-center md:text-left">
        <div class="text-xl font-bold font-heading" style="color: var(--website-color-primary);">{{ content.companyName }}</div>
        {% if content.description %}<p class="text-sm mt-2 max-w-md" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
      </div>
      {% if content.links %}<nav class="flex flex-wrap justify-center gap-6">
        {% for link in content.links %}<a href="{{ link.link }}" class="nav-link text-sm">{{ link.label }}</a>
        {% endfor %}
      </nav>{% endif %}
      {% if content.socialLinks %}<div class="flex gap-4">
        {% for social in content.socialLinks %}<a href="{{ social.url }}" class="social-link" aria-label="{{ social.platform }}">{{ icon(social.platform, "w-5 h-5") }}</a>
        {% endfor %}
      </div>{% endif %}
    </div>
    <div class="mt-8 pt-8 border-t text-center text-sm" style="border-color: var(--website-color-border); color: var(--website-color-text-secondary);">{{ content.copyright }}</div>
  </div>
</footer>
"##;

pub(crate) const DETAILED: &str = r##"<footer id="section-{{ section_id }}" data-template="{{ template_id }}" class="pt-16 pb-8" style="background-color: var(--website-color-text); color: var(--website-color-background);">
  <div class="container mx-auto px-4">
    <div class="grid gap-12 md:grid-cols-2 lg:grid-cols-{{ ((content.sections or []) | length) + (2 if content.newsletterTitle else 1) }}">
      <div>
        <div class="text-2xl font-bold font-heading mb-4">{{ content.companyName }}</div>
        {% if content.description %}<p class="text-sm opacity-75 mb-6">{{ content.description }}</p>{% endif %}
        {% if content.socialLinks %}<div class="flex gap-3">
          {% for social in content.socialLinks %}<a href="{{ social.url }}" class="w-10 h-10 rounded-full flex items-center justify-center transition-colors" style="background-color: rgba(var(--website-color-background-rgb), 0.1);" aria-label="{{ social.platform }}">{{ icon(social.platform, "w-5 h-5") }}</a>
          {% endfor %}
        </div>{% endif %}
      </div>
      {% for column in content.sections %}<div>
        <h4 class="font-semibold mb-4">{{ column.title }}</h4>
        <ul class="space-y-2">
          {% for link in column.links %}<li><a href="{{ link.link }}" class="text-sm opacity-75 hover:opacity-100 transition-opacity">{{ link.label }}</a></li>
          {% endfor %}
        </ul>
      </div>
      {% endfor %}
      {% if content.newsletterTitle %}<div>
        <h4 class="font-semibold mb-4">{{ content.newsletterTitle }}</h4>
        {% if content.newsletterDescription %}<p class="text-sm opacity-75 mb-4">{{ content.newsletterDescription }}</p>{% endif %}
        <form class="flex gap-2" data-site-form>
          <input type="email" name="email" class="form-input flex-1" placeholder="{{ content.newsletterPlaceholder | default("Enter your email") }}" required>
          <button type="submit" class="btn-primary">{{ content.newsletterButtonText | default("Subscribe") }}</button>
        </form>
      </div>{% endif %}
    </div>
    <div class="mt-12 pt-8 border-t text-center text-sm opacity-75" style="border-color: rgba(var(--website-color-background-rgb), 0.2);">{{ content.copyright }}</div>
  </div>
</footer>
"##;

pub(crate) fn simple_defaults() -> Value {
    json!({
        "companyName": "YourBrand",
        "description": "Building better websites, one section at a time.",
        "links": [
            { "label": "Privacy", "link": "#" },
            { "label": "Terms", "link": "#" },
            { "label": "Contact", "link": "#contact" }
        ],
        "socialLinks": [
            { "platform": "Facebook", "url": "#" },
            { "platform": "Twitter", "url": "#" },
            { "platform": "Instagram", "url": "#" }
        ],
        "copyright": "© 2024 YourBrand. All rights reserved."
    })
}

pub(crate) fn detailed_defaults() -> Value {
    json!({
        "companyName": "YourBrand",
        "description": "We help businesses grow with modern web experiences.",
        "sections": [
            {
                "title": "Company",
                "links": [
                    { "label": "About", "link": "#about" },
                    { "label": "Careers", "link": "#" },
                    { "label": "Press", "link": "#" }
                ]
            },
            {
                "title": "Resources",
                "links": [
                    { "label": "Blog", "link": "#blog" },
                    { "label": "Help Center", "link": "#" },
                    { "label": "Guides", "link": "#" }
                ]
            }
        ],
        "socialLinks": [
            { "platform": "Linkedin", "url": "#" },
            { "platform": "Github", "url": "#" },
            { "platform": "Youtube", "url": "#" }
        ],
        "newsletterTitle": "Stay Updated",
        "newsletterDescription": "Get the latest news delivered to your inbox.",
        "copyright": "© 2024 YourBrand. All rights reserved."
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::icon_svg;
    use crate::templates::render;
    use crate::TemplateId;

    #[test]
    fn simple_footer_renders_links_and_socials() {
        let html = render(TemplateId::FooterSimple, simple_defaults());

        assert!(html.contains(">Privacy</a>"));
        assert!(html.contains(&icon_svg("Facebook", "w-5 h-5")));
        assert!(html.contains("© 2024 YourBrand"));
    }

    #[test]
    fn simple_footer_omits_empty_groups() {
        let html = render(
            TemplateId::FooterSimple,
            json!({ "companyName": "Acme", "copyright": "2024" }),
        );

        assert!(!html.contains("<nav"));
        assert!(!html.contains("social-link"));
    }

    #[test]
    fn detailed_footer_columns_in_order() {
        let html = render(TemplateId::FooterDetailed, detailed_defaults());

        assert!(html.find(">Company</h4>").unwrap() < html.find(">Resources</h4>").unwrap());
        assert!(html.contains("lg:grid-cols-4"));
        assert!(html.contains("data-site-form"));
    }

    #[test]
    fn detailed_footer_without_newsletter() {
        let mut content = detailed_defaults();
        content["newsletterTitle"] = json!("");

        let html = render(TemplateId::FooterDetailed, content);

        assert!(!html.contains("<form"));
        assert!(html.contains("lg:grid-cols-3"));
    }
}
