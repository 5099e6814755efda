//! Trellis CLI
//!
//! Renders component spec files, writes the preview gallery and prints the
//! parameter schema.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trellis_ui::catalog::{PreviewGroup, previews, render_document, schema_json};
use trellis_ui::config::{CatalogConfig, default_config_path};
use trellis_ui::gallery::write_gallery;
use trellis_ui::helpers::read_text;
use trellis_ui::i18n::Locale;
use trellis_ui::markup::RenderContext;
use trellis_ui::OptionValue;

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    author,
    version,
    about = "Render Trellis UI components and their preview gallery."
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Locale for built-in labels (en, zh-CN). Overrides the config file.
    #[arg(long, global = true, value_name = "TAG")]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every [[component]] in a TOML spec file to stdout.
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Write the preview gallery (index.html and schema.json).
    Gallery {
        /// Output directory; defaults to the config's output_dir.
        #[arg(long = "out", value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Print the JSON schema of all component parameters.
    Schema,
    /// List the built-in previews by group.
    List,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CatalogConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let locale = match cli.locale.as_deref() {
        Some(tag) => tag.parse::<Locale>()?,
        None => config.resolved_locale(),
    };
    let cx = RenderContext::new(locale);
    tracing::debug!(locale = %locale, command = ?cli.command, "Starting trellis");

    match cli.command {
        Command::Render { file } => {
            let source = read_text(&file)?;
            let html = render_document(&source, &cx)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
        }
        Command::Gallery { out } => {
            let dir = match out {
                Some(dir) => dir,
                None => config.output_dir()?,
            };
            let index = write_gallery(&dir, &config, &cx)?;
            println!("{}", index.display());
        }
        Command::Schema => println!("{}", schema_json()?),
        Command::List => {
            let previews = previews()?;
            for group in PreviewGroup::ALL {
                println!("{}", group.title());
                for preview in previews.iter().filter(|p| p.group == *group) {
                    println!("  {:<20} {}", preview.name, preview.spec.name());
                }
            }
        }
        Command::Config => {
            if cli.config.is_none() {
                eprintln!("# {}", default_config_path()?.display());
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
