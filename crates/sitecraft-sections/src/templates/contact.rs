//! Contact section with details and a form.
//!
//! The form carries `data-site-form`; the exported page script intercepts its submit.

use serde_json::{json, Value};

pub(crate) const FORM: &str = r##"<section id="section-{{ section_id }}" data-template="{{ template_id }}" class="py-16 md:py-24" style="background-color: var(--website-color-surface);">
  <div class="container mx-auto px-4">
    <div class="text-center max-w-3xl mx-auto mb-12">
      {% if content.subtitle %}<p class="section-subtitle mb-2">{{ content.subtitle }}</p>{% endif %}
      <h2 class="section-title">{{ content.title }}</h2>
      {% if content.description %}<p class="text-lg mt-4" style="color: var(--website-color-text-secondary);">{{ content.description }}</p>{% endif %}
    </div>
    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
      <div class="space-y-6">
        {% if content.email %}<div class="flex items-center gap-4">
          <span class="w-12 h-12 rounded-lg flex items-center justify-center" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ icon("Mail") }}</span>
          <a href="mailto:{{ content.email }}" style="color: var(--website-color-text);">{{ content.email }}</a>
        </div>{% endif %}
        {% if content.phone %}<div class="flex items-center gap-4">
          <span class="w-12 h-12 rounded-lg flex items-center justify-center" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ icon("Phone") }}</span>
          <a href="tel:{{ content.phone }}" style="color: var(--website-color-text);">{{ content.phone }}</a>
        </div>{% endif %}
        {% if content.address %}<div class="flex items-center gap-4">
          <span class="w-12 h-12 rounded-lg flex items-center justify-center" style="background-color: rgba(var(--website-color-primary-rgb), 0.1); color: var(--website-color-primary);">{{ icon("MapPin") }}</span>
          <span style="color: var(--website-color-text);">{{ content.address }}</span>
        </div>{% endif %}
      </div>
      <form class="card space-y-4" data-site-form{% if content.successMessage %} data-success-message="{{ content.successMessage }}"{% endif %}>
        {% if content.formTitle %}<h3 class="text-xl font-semibold font-heading" style="color: var(--website-color-text);">{{ content.formTitle }}</h3>{% endif %}
        <input type="text" name="name" class="form-input" placeholder="{{ content.namePlaceholder | default("Your Name") }}" required>
        <input type="email" name="email" class="form-input" placeholder="{{ content.emailPlaceholder | default("Your Email") }}" required>
        <input type="text" name="subject" class="form-input" placeholder="{{ content.subjectPlaceholder | default("Subject") }}">
        <textarea name="message" rows="5" class="form-input" placeholder="{{ content.messagePlaceholder | default("Your Message") }}" required></textarea>
        <button type="submit" class="btn-primary w-full">{{ content.submitText | default("Send Message") }}</button>
      </form>
    </div>
  </div>
</section>
"##;

pub(crate) fn defaults() -> Value {
    json!({
        "title": "Get In Touch",
        "subtitle": "Contact",
        "description": "Have a project in mind? We'd love to hear from you.",
        "email": "hello@example.com",
        "phone": "+1 (555) 123-4567",
        "address": "123 Business St, Suite 100, San Francisco, CA",
        "formTitle": "Send us a message",
        "submitText": "Send Message",
        "successMessage": "Thank you! We'll be in touch soon."
    })
}
