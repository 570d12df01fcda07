//! Page, section and theme model for sitecraft.
//!
//! This crate holds the structured page model handed to the exporter: projects with their
//! ordered section instances, theme configurations, the built-in theme presets, and loaders
//! for reading projects and themes from JSON, YAML or TOML files.

pub mod loader;
pub mod presets;
pub mod project;
pub mod registry;
pub mod theme;

pub use loader::{load_project, load_theme, parse_project, parse_theme, Format, ModelError};
pub use project::{Project, SectionInstance, SeoMetadata};
pub use registry::ThemeRegistry;
pub use theme::{ThemeColors, ThemeConfig, ThemeFonts, ThemeShadows};
