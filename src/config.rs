use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use weekday_calendar::EPOCH_YEAR;

/// Top-level weekday configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WeekdayConfig {
    /// Reference-calendar verification settings.
    #[serde(default)]
    pub verify: VerifyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyToml {
    #[serde(default = "default_from")]
    pub from: i32,
    #[serde(default = "default_to")]
    pub to: i32,
}

impl Default for VerifyToml {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
        }
    }
}

fn default_from() -> i32 {
    EPOCH_YEAR
}
fn default_to() -> i32 {
    2400
}

impl WeekdayConfig {
    /// Load configuration from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
