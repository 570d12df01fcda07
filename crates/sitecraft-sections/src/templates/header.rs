//! Page headers: a plain navigation bar and a sticky, translucent variant.

use serde_json::{json, Value};

pub(crate) const SIMPLE: &str = r##"<header id="section-{{ section_id }}" data-template="{{ template_id }}" class="w-full border-b" style="background-color: var(--website-color-background); border-color: var(--website-color-border);">
  <div class="container mx-auto px-4 py-4 flex items-center justify-between">
    <span class="text-2xl font-bold font-heading" style="color: var(--website-color-primary);">{{ content.logo }}</span>
    <nav class="hidden md:flex items-center space-x-8">
      {% for item in content.menuItems %}<a href="{{ item.link }}" class="nav-link">{{ item.label }}</a>
      {% endfor %}
    </nav>
    {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="hidden md:inline-block btn-primary">{{ content.ctaText }}</a>{% endif %}
    <button type="button" class="md:hidden p-2" data-mobile-menu-toggle aria-label="Toggle menu" style="color: var(--website-color-text);">{{ icon("Menu") }}</button>
  </div>
  <div class="hidden md:hidden border-t px-4 py-4 space-y-2" data-mobile-menu style="border-color: var(--website-color-border);">
    {% for item in content.menuItems %}<a href="{{ item.link }}" class="block py-2 nav-link">{{ item.label }}</a>
    {% endfor %}
    {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="block text-center btn-primary">{{ content.ctaText }}</a>{% endif %}
  </div>
</header>
"##;

pub(crate) const MODERN: &str = r##"<header id="section-{{ section_id }}" data-template="{{ template_id }}" class="w-full z-50 backdrop-blur{% if content.sticky %} sticky top-0{% endif %}" style="background-color: rgba(var(--website-color-background-rgb), 0.9); box-shadow: var(--website-shadow-sm);">
  <div class="container mx-auto px-4 py-3 flex items-center justify-between">
    <div class="flex items-center gap-3">
      {% if content.logoImage %}<img src="{{ content.logoImage }}" alt="{{ content.logo }}" class="h-10 w-auto">{% endif %}
      <span class="text-xl font-bold font-heading" style="color: var(--website-color-text);">{{ content.logo }}</span>
    </div>
    <nav class="hidden lg:flex items-center gap-1">
      {% for item in content.menuItems %}<a href="{{ item.link }}" class="px-4 py-2 rounded-full nav-link nav-link-pill">{{ item.label }}</a>
      {% endfor %}
    </nav>
    <div class="hidden lg:flex items-center gap-3">
      {% if content.phone %}<span class="flex items-center gap-2 text-sm" style="color: var(--website-color-text-secondary);">{{ icon("Phone", "w-4 h-4") }}{{ content.phone }}</span>{% endif %}
      {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="btn-primary rounded-full">{{ content.ctaText }}</a>{% endif %}
    </div>
    <button type="button" class="lg:hidden p-2" data-mobile-menu-toggle aria-label="Toggle menu" style="color: var(--website-color-text);">{{ icon("Menu") }}</button>
  </div>
  <div class="hidden lg:hidden px-4 pb-4 space-y-1" data-mobile-menu>
    {% for item in content.menuItems %}<a href="{{ item.link }}" class="block px-4 py-2 rounded-lg nav-link">{{ item.label }}</a>
    {% endfor %}
    {% if content.ctaText %}<a href="{{ content.ctaLink }}" class="block text-center btn-primary mt-2">{{ content.ctaText }}</a>{% endif %}
  </div>
</header>
"##;

pub(crate) fn simple_defaults() -> Value {
    json!({
        "logo": "YourBrand",
        "menuItems": [
            { "label": "Home", "link": "#home" },
            { "label": "About", "link": "#about" },
            { "label": "Services", "link": "#services" },
            { "label": "Contact", "link": "#contact" }
        ],
        "ctaText": "Get Started",
        "ctaLink": "#contact"
    })
}

pub(crate) fn modern_defaults() -> Value {
    json!({
        "logo": "YourBrand",
        "logoImage": "",
        "menuItems": [
            { "label": "Home", "link": "#home" },
            { "label": "Features", "link": "#features" },
            { "label": "Pricing", "link": "#pricing" },
            { "label": "Blog", "link": "#blog" },
            { "label": "Contact", "link": "#contact" }
        ],
        "phone": "",
        "ctaText": "Sign Up",
        "ctaLink": "#pricing",
        "sticky": true
    })
}
