//! Configuration file support for the site generator.
//!
//! Loads an optional `brainwave.toml`. Command-line flags take precedence
//! over file settings, which take precedence over built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use brainwave_leptos::styles::Theme;
use brainwave_leptos::{AssetResolver, PageMeta};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "brainwave.toml";

/// Where the page goes when neither the CLI nor the file says otherwise.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Output HTML file
    pub output: Option<PathBuf>,
    /// Content JSON file; the built-in copy is used when absent
    pub content: Option<PathBuf>,
    /// Base prepended to relative asset tokens
    pub asset_base: Option<String>,
    /// Keep the first of repeated content ids instead of failing
    pub dedupe: bool,
    /// Document metadata
    pub page: PageMeta,
    /// Style token overrides
    pub theme: Theme,
}

impl SiteConfig {
    /// Load config from a specific path.
    ///
    /// Relative `output` and `content` paths are taken relative to the
    /// directory holding the file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: SiteConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?;

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.output = config.output.map(|p| dir.join(p));
        config.content = config.content.map(|p| dir.join(p));
        Ok(config)
    }

    /// Load the explicitly requested file, or `brainwave.toml` from `cwd` if
    /// one exists, or fall back to defaults.
    ///
    /// A missing file is an error only when it was asked for by name.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("config file not found: {}", path.display()));
                }
                Self::load_from_path(path)
            }
            None => {
                let implicit = cwd.join(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    Self::load_from_path(&implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Settings given on the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// `--out`
    pub output: Option<PathBuf>,
    /// `--content`
    pub content: Option<PathBuf>,
    /// `--asset-base`
    pub asset_base: Option<String>,
    /// `--dedupe`
    pub dedupe: bool,
}

/// Final settings of one render.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    /// Output HTML file
    pub output: PathBuf,
    /// Content JSON file, if any
    pub content: Option<PathBuf>,
    /// Asset token resolver
    pub assets: AssetResolver,
    /// Duplicate content policy
    pub dedupe: bool,
    /// Document metadata
    pub page: PageMeta,
    /// Style tokens
    pub theme: Theme,
}

/// Resolve runtime settings from CLI options and config file.
///
/// CLI options take precedence over config file settings.
pub fn resolve_settings(cli: &CliOverrides, config: SiteConfig) -> ResolvedSettings {
    let output = cli
        .output
        .clone()
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let content = cli.content.clone().or(config.content);

    let asset_base = cli
        .asset_base
        .clone()
        .or(config.asset_base)
        .unwrap_or_default();

    ResolvedSettings {
        output,
        content,
        assets: AssetResolver::new(asset_base),
        dedupe: cli.dedupe || config.dedupe,
        page: config.page,
        theme: config.theme,
    }
}
