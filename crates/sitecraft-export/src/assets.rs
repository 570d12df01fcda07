//! Stylesheet and runtime script embedded into every exported page.

use sitecraft_model::ThemeConfig;

use crate::theme_css::root_block;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Theme variables followed by the shared component styles.
    ///
    /// When `minify` is set the result goes through lightningcss; if that fails the
    /// unminified stylesheet is used.
    pub fn stylesheet(theme: &ThemeConfig, minify: bool) -> String {
        let css = format!("{}\n\n{}", root_block(theme), BASE_CSS);
        if !minify {
            return css;
        }

        match Self::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Keeping unminified stylesheet for theme {}: {}", theme.id, e);
                css
            }
        }
    }

    /// Client-side behaviour for menus, anchors and forms.
    pub fn script() -> &'static str {
        SITE_JS
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Component classes used by the section templates. Everything theme dependent goes
// through the --website-* variables declared in the :root block.
const BASE_CSS: &str = r#"* {
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  margin: 0;
  font-family: var(--website-font-primary), system-ui, -apple-system, sans-serif;
  color: var(--website-color-text);
  background-color: var(--website-color-background);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4, h5, h6, .font-heading {
  font-family: var(--website-font-secondary), Georgia, serif;
  line-height: 1.2;
}

.font-accent {
  font-family: var(--website-font-accent), system-ui, sans-serif;
}

img {
  max-width: 100%;
  display: block;
}

/* Buttons */
.btn-primary,
.btn-secondary,
.btn-outline,
.btn-light,
.btn-ghost-light {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.75rem;
  border-radius: 0.5rem;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  border: 2px solid transparent;
  transition: background-color 0.2s ease, color 0.2s ease, border-color 0.2s ease, transform 0.2s ease, box-shadow 0.2s ease;
}

.btn-primary {
  background-color: var(--website-color-primary);
  color: #ffffff;
  box-shadow: var(--website-shadow-md);
}

.btn-primary:hover {
  background-color: var(--website-color-primary-dark);
  transform: translateY(-2px);
  box-shadow: var(--website-shadow-lg);
}

.btn-secondary {
  background-color: var(--website-color-secondary);
  color: #ffffff;
}

.btn-secondary:hover {
  background-color: var(--website-color-secondary-dark);
  transform: translateY(-2px);
}

.btn-outline {
  background-color: transparent;
  color: var(--website-color-primary);
  border-color: var(--website-color-primary);
}

.btn-outline:hover {
  background-color: var(--website-color-primary);
  color: #ffffff;
}

.btn-light {
  background-color: #ffffff;
  color: var(--website-color-primary);
}

.btn-light:hover {
  background-color: rgba(255, 255, 255, 0.9);
  transform: translateY(-2px);
}

.btn-ghost-light {
  background-color: transparent;
  color: #ffffff;
  border-color: rgba(255, 255, 255, 0.7);
}

.btn-ghost-light:hover {
  background-color: rgba(255, 255, 255, 0.1);
  border-color: #ffffff;
}

/* Navigation */
.nav-link {
  color: var(--website-color-text-secondary);
  text-decoration: none;
  font-weight: 500;
  transition: color 0.2s ease;
}

.nav-link:hover {
  color: var(--website-color-primary);
}

.nav-link-pill {
  padding: 0.5rem 1rem;
  border-radius: 9999px;
}

.nav-link-pill:hover {
  background-color: rgba(var(--website-color-primary-rgb), 0.1);
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  color: var(--website-color-text-secondary);
  background-color: rgba(var(--website-color-primary-rgb), 0.08);
  transition: background-color 0.2s ease, color 0.2s ease;
}

.social-link:hover {
  color: #ffffff;
  background-color: var(--website-color-primary);
}

/* Section headings */
.section-title {
  font-family: var(--website-font-secondary), Georgia, serif;
  font-size: clamp(1.875rem, 3vw + 1rem, 3rem);
  font-weight: 700;
  color: var(--website-color-text);
  margin: 0;
}

.section-subtitle {
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--website-color-primary);
}

.text-responsive-hero {
  font-size: clamp(2.5rem, 5vw + 1rem, 4.5rem);
  line-height: 1.1;
}

/* Cards */
.card {
  background-color: var(--website-color-surface);
  border: 1px solid var(--website-color-border);
  border-radius: 1rem;
  padding: 2rem;
  box-shadow: var(--website-shadow-sm);
}

.card-hover {
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.card-hover:hover {
  transform: translateY(-4px);
  box-shadow: var(--website-shadow-xl);
}

.plan-highlighted {
  border: 2px solid var(--website-color-primary);
  box-shadow: var(--website-shadow-xl);
}

/* Layout */
.grid-responsive {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 768px) {
  .grid-responsive {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .grid-responsive {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }
}

/* Forms */
.form-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--website-color-border);
  border-radius: 0.5rem;
  background-color: var(--website-color-background);
  color: var(--website-color-text);
  font: inherit;
  transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.form-input:focus {
  outline: none;
  border-color: var(--website-color-primary);
  box-shadow: 0 0 0 3px rgba(var(--website-color-primary-rgb), 0.2);
}

/* Motion */
@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.animate-fade-in-up {
  animation: fadeInUp 0.6s ease-out both;
}

@media (prefers-reduced-motion: reduce) {
  html {
    scroll-behavior: auto;
  }

  .animate-fade-in-up {
    animation: none;
  }
}
"#;

const SITE_JS: &str = r##"(function() {
  'use strict';

  // Mobile menu toggle
  document.querySelectorAll('[data-mobile-menu-toggle]').forEach(button => {
    button.addEventListener('click', () => {
      const header = button.closest('header');
      const menu = header ? header.querySelector('[data-mobile-menu]') : null;
      if (menu) {
        menu.classList.toggle('hidden');
        button.setAttribute('aria-expanded', String(!menu.classList.contains('hidden')));
      }
    });
  });

  // "#contact" falls back to the first section of that category
  const findTarget = (hash) => {
    const name = hash.slice(1);
    if (!name) return null;
    return document.getElementById(name)
      || document.getElementById('section-' + name)
      || document.querySelector('[data-template^="' + CSS.escape(name) + '-"]');
  };

  // Smooth scroll for in-page anchors
  document.querySelectorAll('a[href^="#"]').forEach(link => {
    link.addEventListener('click', (event) => {
      const target = findTarget(link.getAttribute('href') || '');
      if (!target) return;

      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth', block: 'start' });

      // Close the mobile menu after navigating
      const menu = link.closest('[data-mobile-menu]');
      if (menu) menu.classList.add('hidden');
    });
  });

  // Exported pages have no backend, so forms only acknowledge locally
  document.querySelectorAll('form[data-site-form]').forEach(form => {
    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const message = form.getAttribute('data-success-message')
        || 'Thank you for your message! We will get back to you soon.';
      alert(message);
      form.reset();
    });
  });
})();
"##;
