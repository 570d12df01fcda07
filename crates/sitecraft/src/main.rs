//! Sitecraft CLI - export page projects to standalone HTML.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "sitecraft")]
#[command(about = "Export website builder projects to standalone HTML pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sitecraft.toml config file
    #[arg(short, long, default_value = "sitecraft.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file and a showcase project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Export projects to HTML
    Export {
        /// Project file or directory (defaults to config or "site")
        input: Option<PathBuf>,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip CSS minification
        #[arg(long)]
        no_minify: bool,

        /// Emit section content without HTML escaping
        #[arg(long)]
        trusted: bool,
    },

    /// List available themes
    Themes,

    /// List section templates
    Sections {
        /// Print the catalog as JSON, including default content
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Export {
            input,
            output,
            no_minify,
            trusted,
        } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::export::run(
                &cli.config,
                commands::export::ExportArgs {
                    input,
                    output,
                    minify,
                    trusted,
                },
            )?;
        }
        Commands::Themes => {
            commands::list::themes(&cli.config)?;
        }
        Commands::Sections { json } => {
            commands::list::sections(json)?;
        }
    }

    Ok(())
}
