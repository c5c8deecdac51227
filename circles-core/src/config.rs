//! Configuration loading from circles.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::filter::FilterKind;

/// Main configuration structure for circles.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CirclesConfig {
    /// Filter applied to the invitation list.
    pub filter: Option<FilterKind>,
    /// Circle ceiling; absent means unbounded.
    pub max_circles: Option<usize>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from circles.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<CirclesConfig>> {
    let path = root.join("circles.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid circles.toml")?;
    Ok(Some(cfg))
}
