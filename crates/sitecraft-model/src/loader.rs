//! Loading projects and themes from disk.
//!
//! Files may be JSON, YAML or TOML; the format is picked from the file extension.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::project::Project;
use crate::theme::ThemeConfig;

/// Serialization format of a project or theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

/// Errors that can occur when loading model files.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Parse a project from a string.
pub fn parse_project(source: &str, format: Format) -> Result<Project, String> {
    parse(source, format)
}

/// Parse a theme from a string.
pub fn parse_theme(source: &str, format: Format) -> Result<ThemeConfig, String> {
    parse(source, format)
}

/// Load a project file.
pub fn load_project(path: &Path) -> Result<Project, ModelError> {
    load(path)
}

/// Load a theme file.
pub fn load_theme(path: &Path) -> Result<ThemeConfig, ModelError> {
    load(path)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let format = Format::from_path(path)
        .ok_or_else(|| ModelError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse(&content, format).map_err(|message| ModelError::Parse {
        path: path.display().to_string(),
        message,
    })
}

fn parse<T: DeserializeOwned>(source: &str, format: Format) -> Result<T, String> {
    match format {
        Format::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(source).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a.html")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn loads_yaml_project() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("landing.yaml");
        fs::write(
            &path,
            r#"
id: landing
name: Landing
themeId: sunset
sections:
  - id: hero
    templateId: hero-modern-001
    order: 1
    content:
      title: Welcome
      ctaText: Start
"#,
        )
        .unwrap();

        let project = load_project(&path).unwrap();

        assert_eq!(project.theme_id, "sunset");
        assert_eq!(project.sections[0].content["ctaText"], "Start");
        assert_eq!(project.sections[0].order, 1.0);
    }

    #[test]
    fn loads_toml_theme() {
        let theme = crate::presets::nature();
        let source = toml::to_string(&theme).unwrap();

        let parsed = parse_theme(&source, Format::Toml).unwrap();

        assert_eq!(parsed, theme);
    }

    #[test]
    fn errors_on_unknown_extension() {
        let result = load_project(Path::new("project.txt"));

        assert!(matches!(result, Err(ModelError::UnsupportedFormat(_))));
    }

    #[test]
    fn errors_on_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ \"id\": ").unwrap();

        let result = load_project(&path);

        assert!(matches!(result, Err(ModelError::Parse { .. })));
    }

    #[test]
    fn errors_on_missing_file() {
        let temp = tempdir().unwrap();

        let result = load_theme(&temp.path().join("missing.json"));

        assert!(matches!(result, Err(ModelError::Io { .. })));
    }
}
