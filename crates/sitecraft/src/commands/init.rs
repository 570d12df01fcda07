//! Initialize a sitecraft workspace.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use sitecraft_sections::{catalog, TemplateInfo};

use super::config::root_dir;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing sitecraft...");

    let root = root_dir(config_path);
    let site_dir = root.join("site");

    // Check if site already exists
    if site_dir.exists() {
        if !yes {
            tracing::warn!("site/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(&site_dir).context("Failed to create site directory")?;
    }

    // Create default config
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    // Create a showcase project with one section per category
    let showcase_path = site_dir.join("showcase.json");
    if !showcase_path.exists() || yes {
        let showcase = serde_json::to_string_pretty(&showcase_project())
            .context("Failed to serialize showcase project")?;
        fs::write(&showcase_path, showcase).context("Failed to write showcase.json")?;
        tracing::info!("Created site/showcase.json");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'sitecraft export' to generate HTML into dist/.");

    Ok(())
}

fn showcase_project() -> serde_json::Value {
    // First variant of each category, footer last
    let mut templates: Vec<TemplateInfo> = Vec::new();
    for template in catalog() {
        if !templates.iter().any(|t| t.category == template.category) {
            templates.push(template);
        }
    }
    templates.sort_by_key(|t| t.category == "footer");

    let sections: Vec<serde_json::Value> = templates
        .into_iter()
        .enumerate()
        .map(|(i, template)| {
            json!({
                "id": template.category,
                "templateId": template.id,
                "content": template.default_content,
                "order": i,
            })
        })
        .collect();

    json!({
        "id": "showcase",
        "name": "Showcase",
        "description": "A page using one section from every category.",
        "themeId": "modern",
        "sections": sections,
        "seo": {
            "title": "Showcase",
            "description": "Built with sitecraft.",
            "keywords": ["sitecraft", "landing page"]
        }
    })
}

const DEFAULT_CONFIG: &str = r#"# Sitecraft Configuration

[site]
# Directory (or single file) with project definitions (.json, .yaml, .toml)
projects = "site"

# Output directory for exported pages
output = "dist"

# Document language
lang = "en"

[themes]
# Optional directory of additional theme files
# dir = "themes"

[render]
# HTML-escape section content; disable only for trusted authors
escape = true

# Date format for blog posts: "numeric" (1/15/2024) or "long" (January 15, 2024)
date_style = "numeric"

[build]
# Minify the inline stylesheet
minify = true
"#;
