//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$MONOSTACK_CONFIG` environment variable
//! 2. `~/.config/monostack/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub compute: ComputeConfig,
    pub bench: BenchConfig,
}

/// Result rendering.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Printed in place of a missing nearest element.
    pub sentinel: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arithmetic settings for `sum`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// When set, `sum` also reports the result reduced by this modulus.
    pub modulus: Option<u64>,
    /// Report accumulator overflow instead of computing an unchecked sum.
    pub checked: bool,
}

/// Defaults for `bench`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub len: usize,
    pub iterations: usize,
    pub seed: u64,
}

// --- Defaults ---

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            sentinel: -1,
        }
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            modulus: None,
            checked: true,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: 100_000,
            iterations: 5,
            seed: 42,
        }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) if p.exists() => load_config_from(&p),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    if config.compute.modulus == Some(0) {
        anyhow::bail!("{}: compute.modulus must be positive", path.display());
    }
    Ok(config)
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("MONOSTACK_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/monostack/config.toml
    directories::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("monostack")
            .join("config.toml")
    })
}

/// Show the active config path (for `monostack config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
