//! Optional draw defaults stored in `sweeper.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::types::DrawOrder;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sweeper.toml";

/// Draw defaults (TOML). Command-line flags take precedence.
///
/// Missing fields fall back to the same defaults as the command line.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    pub draw_order: DrawOrder,

    /// Seconds between narration steps.
    pub delay_secs: f64,

    /// Skip narration and print only the final table.
    pub quiet: bool,

    /// Seed for a reproducible draw. Unset means seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            draw_order: DrawOrder::Entrants,
            delay_secs: 1.0,
            quiet: false,
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        self.delay().map(|_| ())
    }

    /// Narration delay, rejecting values that are negative, non-finite or
    /// too large to represent as a `Duration`.
    pub fn delay(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.delay_secs).map_err(|_| {
            anyhow!(
                "delay must be a non-negative number of seconds, got {}",
                self.delay_secs
            )
        })
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SweepConfig::default()`.
pub fn load_config(path: &Path) -> Result<SweepConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SweepConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SweepConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}
