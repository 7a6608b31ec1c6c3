use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use spindrift_series::SeriesFormat;

/// Top-level spindrift configuration.
///
/// Every field has a default, so a missing config file means defaults
/// throughout; CLI flags override config values.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SpindriftConfig {
    /// Input settings.
    #[serde(default)]
    pub io: IoToml,

    /// Sample settings.
    #[serde(default)]
    pub sample: SampleToml,

    /// Smooth settings.
    #[serde(default)]
    pub smooth: SmoothToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Default format selector for input files.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleToml {
    /// Default scale factor applied to queried values.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

impl Default for SampleToml {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothToml {
    /// Default trailing window in hours.
    #[serde(default = "default_window_hours")]
    pub window_hours: f64,
}

impl Default for SmoothToml {
    fn default() -> Self {
        Self {
            window_hours: default_window_hours(),
        }
    }
}

fn default_format() -> String {
    "uv".to_string()
}
fn default_scale_factor() -> f64 {
    1.0
}
fn default_window_hours() -> f64 {
    6.0
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<SpindriftConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SpindriftConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Resolve the input format selector: CLI flag first, then config default.
pub fn resolve_format(flag: Option<&str>, config: &SpindriftConfig) -> Result<SeriesFormat> {
    let name = flag.unwrap_or(&config.io.format);
    Ok(spindrift_io::parse_format(name)?)
}
