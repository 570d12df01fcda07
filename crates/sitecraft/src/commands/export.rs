//! Static HTML export command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use sitecraft_export::{ExportOptions, Exporter};
use sitecraft_model::{load_project, Project};
use sitecraft_sections::EscapeMode;

use super::config::{data_files, root_dir, ConfigFile};

/// Command line overrides for the export command.
#[derive(Debug, Default)]
pub struct ExportArgs {
    /// Project file or directory instead of `site.projects`
    pub input: Option<PathBuf>,
    /// Output directory instead of `site.output`
    pub output: Option<PathBuf>,
    pub minify: Option<bool>,
    /// Emit section content without escaping
    pub trusted: bool,
}

/// Run the export command.
pub fn run(config_path: &Path, args: ExportArgs) -> Result<()> {
    tracing::info!("Exporting pages...");

    let config = ConfigFile::load(config_path)?;
    let root = root_dir(config_path);

    let input = args
        .input
        .unwrap_or_else(|| root.join(&config.site.projects));
    let output = args
        .output
        .unwrap_or_else(|| root.join(&config.site.output));

    let projects = discover_projects(&input)?;
    if projects.is_empty() {
        tracing::warn!("No project files found in {}", input.display());
        return Ok(());
    }

    let escape = if args.trusted || !config.render.escape {
        EscapeMode::Trusted
    } else {
        EscapeMode::Escape
    };
    if escape == EscapeMode::Trusted {
        tracing::warn!("Section content will be emitted without HTML escaping");
    }

    let options = ExportOptions {
        escape,
        date_style: config.render.date_style,
        minify_css: args.minify.unwrap_or(config.build.minify),
        lang: config.site.lang.clone(),
    };

    let exporter = Exporter::new(options).with_themes(config.theme_registry(&root)?);
    let summary = exporter
        .export_all(&projects, &output)
        .context("Export failed")?;

    tracing::info!(
        "Exported {} pages with {} sections in {}ms",
        summary.pages,
        summary.sections,
        summary.duration_ms
    );
    if summary.unsupported > 0 {
        tracing::warn!(
            "{} sections use unknown templates and were skipped",
            summary.unsupported
        );
    }

    tracing::info!("Output: {}", summary.output_dir.display());

    Ok(())
}

/// Load a single project file, or every project file under a directory.
fn discover_projects(input: &Path) -> Result<Vec<Project>> {
    if !input.exists() {
        bail!("Projects path not found: {}", input.display());
    }

    let paths = if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        data_files(input)
    };

    paths
        .iter()
        .map(|path| -> Result<Project> {
            let project = load_project(path)?;
            tracing::debug!(
                "Loaded project {} ({} sections) from {}",
                project.id,
                project.sections.len(),
                path.display()
            );
            Ok(project)
        })
        .collect()
}
