//! Configuration file (sitecraft.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use walkdir::WalkDir;

use sitecraft_model::{load_theme, Format, ThemeRegistry};
use sitecraft_sections::DateStyle;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub themes: ThemesConfig,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Directory (or single file) holding project definitions
    #[serde(default = "default_projects")]
    pub projects: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ThemesConfig {
    /// Extra theme files; same ids replace the built-in presets
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderSettings {
    /// HTML-escape section content
    #[serde(default = "default_true")]
    pub escape: bool,
    #[serde(default)]
    pub date_style: DateStyle,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_true")]
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            output: default_output(),
            lang: default_lang(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            escape: true,
            date_style: DateStyle::default(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

fn default_projects() -> String {
    "site".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_lang() -> String {
    "en".to_string()
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Built-in themes plus any theme files under `themes.dir`.
    pub fn theme_registry(&self, root: &Path) -> Result<ThemeRegistry> {
        let mut registry = ThemeRegistry::with_builtin();

        let Some(dir) = &self.themes.dir else {
            return Ok(registry);
        };
        let dir = root.join(dir);
        if !dir.exists() {
            tracing::warn!("Themes directory not found: {}", dir.display());
            return Ok(registry);
        }

        for path in data_files(&dir) {
            let theme = load_theme(&path)?;
            tracing::debug!("Loaded theme {} from {}", theme.id, path.display());
            registry.register(theme);
        }

        Ok(registry)
    }
}

/// Directory a config file's relative paths resolve against.
pub fn root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// JSON, YAML and TOML files under `dir`, sorted by path.
pub fn data_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| Format::from_path(p).is_some())
        .collect();

    files.sort();
    files
}
