//! Listing commands for themes and section templates.

use std::path::Path;

use anyhow::Result;

use sitecraft_sections::catalog;

use super::config::{root_dir, ConfigFile};

/// Print every available theme.
pub fn themes(config_path: &Path) -> Result<()> {
    let config = ConfigFile::load(config_path)?;
    let registry = config.theme_registry(&root_dir(config_path))?;

    for theme in registry.themes() {
        println!(
            "{:<12} {:<20} {} / {}",
            theme.id, theme.name, theme.colors.primary, theme.fonts.primary
        );
    }

    Ok(())
}

/// Print every section template.
pub fn sections(json: bool) -> Result<()> {
    let entries = catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{:<22} {:<22} {}", entry.id, entry.name, entry.description);
    }

    Ok(())
}
