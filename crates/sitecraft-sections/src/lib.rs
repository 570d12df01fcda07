//! Section templates for sitecraft pages.
//!
//! Each section archetype (headers, heroes, pricing, testimonials, ...) is a template keyed
//! by a fixed identifier. [`SectionRenderer`] dispatches a section instance to its template
//! and renders the instance's content into an HTML fragment that references the page
//! theme only through `--website-*` CSS custom properties.

pub mod catalog;
pub mod functions;
pub mod html;
pub mod icons;
pub mod renderer;
pub mod template_id;

mod templates;

pub use catalog::{catalog, TemplateInfo};
pub use functions::DateStyle;
pub use renderer::{EscapeMode, RenderError, RenderOptions, SectionRenderer};
pub use template_id::{TemplateId, UnknownTemplate};
