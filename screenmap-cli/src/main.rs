//! screenmap CLI - print a UI overview of the current project
//!
//! Usage:
//!   screenmap [--root <dir>] [--views <name>] [--components <name>]
//!             [--config <file.json>] [--format markdown|json] [-v]
//!
//! The report goes to stdout; redirect it to persist it:
//!   screenmap > UI_OVERVIEW.md

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use screenmap_core::{ReportBuilder, ReportConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "screenmap")]
#[command(about = "screenmap - UI overview of a file-routed project", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Views directory name under the root
    #[arg(long)]
    views: Option<String>,

    /// Shared components directory name under the root
    #[arg(long)]
    components: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let output = generate(&config, cli.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write report")?;
    stdout.flush()?;

    Ok(())
}

/// Merge the config file (if any) with command line overrides
fn resolve_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::new(),
    };

    let root = cli.root.clone().unwrap_or_else(|| config.root.clone());
    if root.is_absolute() {
        config = config.with_root(root);
    } else {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        config = config.with_root(cwd.join(root));
    }

    if let Some(views) = &cli.views {
        config = config.with_views_dir(views.clone());
    }
    if let Some(components) = &cli.components {
        config = config.with_components_dir(components.clone());
    }
    config.validate()?;

    tracing::debug!("Using config: {:?}", config);
    Ok(config)
}

fn generate(config: &ReportConfig, format: Format) -> Result<String> {
    let report = ReportBuilder::new(config.clone())
        .context("Failed to compile scan rules")?
        .collect()
        .scan()
        .build(chrono::Utc::now());

    match format {
        Format::Markdown => Ok(report.to_markdown()),
        Format::Json => report.to_json().context("Failed to serialize report"),
    }
}
