//! Static HTML export for sitecraft pages.
//!
//! Combines a project's ordered sections with a theme into one self-contained document:
//! theme variables and component styles inline, section markup in the body, and a small
//! runtime script for menus, anchors and forms.

pub mod assets;
pub mod document;
pub mod exporter;
pub mod fonts;
pub mod theme_css;

pub use exporter::{ExportError, ExportOptions, ExportSummary, Exporter};
pub use theme_css::{css_variables, hex_to_rgb, root_block, CssVariable};

use sitecraft_model::{Project, ThemeConfig};

/// Generate the complete HTML document for `project` with `theme`, using default options.
pub fn generate_complete_html(
    project: &Project,
    theme: &ThemeConfig,
) -> Result<String, ExportError> {
    Exporter::default().generate_complete_html(project, theme)
}
