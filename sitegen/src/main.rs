//! # brainwave
//!
//! Static site generator for the Brainwave landing page.
//!
//! Loads the page copy (a JSON file or the built-in content), validates it
//! and renders a single self-contained `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Render with the built-in copy into dist/index.html
//! brainwave render
//!
//! # Custom copy, CDN assets, tolerate repeated tile ids
//! brainwave render --content site.json --asset-base https://cdn.example.com --dedupe
//!
//! # Start a content file from the built-in copy
//! brainwave content > site.json
//! brainwave check --content site.json
//! ```

mod config;
mod content;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use brainwave_leptos::render_page;
use brainwave_leptos::types::SiteContent;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{debug, error, info};

use config::{CliOverrides, SiteConfig, resolve_settings};
use content::load_content;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "brainwave")]
#[command(about = "Render the Brainwave landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page
    Render(RenderArgs),
    /// Validate a content file without rendering
    Check(CheckArgs),
    /// Print the built-in content as JSON
    Content,
}

#[derive(ClapArgs, Debug)]
struct RenderArgs {
    /// Config file (default: ./brainwave.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content JSON file (default: built-in copy)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output HTML file (default: dist/index.html)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Base URL prepended to relative asset references
    #[arg(long)]
    asset_base: Option<String>,

    /// Keep the first of repeated content ids instead of failing
    #[arg(long)]
    dedupe: bool,
}

#[derive(ClapArgs, Debug)]
struct CheckArgs {
    /// Content JSON file (default: built-in copy)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Keep the first of repeated content ids instead of failing
    #[arg(long)]
    dedupe: bool,
}

// ============================================================================
// Commands
// ============================================================================

fn render(args: RenderArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = SiteConfig::discover(args.config.as_deref(), &cwd)?;
    let cli = CliOverrides {
        output: args.out,
        content: args.content,
        asset_base: args.asset_base,
        dedupe: args.dedupe,
    };
    let settings = resolve_settings(&cli, config);
    debug!(?settings, "resolved settings");

    let content = load_content(settings.content.as_deref(), settings.dedupe)?;
    let html = render_page(&content, &settings.theme, &settings.assets, &settings.page);

    write_output(&settings.output, &html)?;
    info!("Wrote {} ({} bytes)", settings.output.display(), html.len());
    Ok(())
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

fn check(args: CheckArgs) -> Result<()> {
    let content = load_content(args.content.as_deref(), args.dedupe)?;
    info!(
        "Content OK: {} navigation entries, {} benefit tiles",
        content.navigation.len(),
        content.benefits.items.len()
    );
    Ok(())
}

fn print_content() -> Result<()> {
    let json = serde_json::to_string_pretty(&SiteContent::default())
        .context("failed to serialize built-in content")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Render(render_args) => render(render_args),
        Command::Check(check_args) => check(check_args),
        Command::Content => print_content(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for `content` output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("brainwave v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Reader went away (e.g. `brainwave content | head`)
            let err_str = format!("{:?}", e);
            if err_str.contains("Broken pipe") || err_str.contains("os error 32") {
                ExitCode::SUCCESS
            } else {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}
