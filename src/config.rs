use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_PARTICLES;
use crate::solver::SolverParams;

/// Looked up in the working directory by [`load`].
pub const CONFIG_FILE: &str = "cumulus.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial tunables; they stay mutable through the simulation afterwards.
    pub physics: SolverParams,
    pub run: RunConfig,
    pub particles: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub dt: f64,
    /// 0 runs until interrupted.
    pub ticks: u64,
    /// Diagnostics cadence in ticks; 0 disables.
    pub log_every: u64,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: SolverParams::default(),
            run: RunConfig::default(),
            particles: DEFAULT_PARTICLES,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: 0.016,
            ticks: 600,
            log_every: 60,
            seed: 42,
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Reads [`CONFIG_FILE`], falling back to defaults when it is absent or broken.
pub fn load() -> Config {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        log::debug!("{CONFIG_FILE} not found; using defaults");
        return Config::default();
    }
    match load_from(path) {
        Ok(cfg) => {
            log::info!("loaded {CONFIG_FILE}");
            cfg
        }
        Err(e) => {
            log::warn!("{CONFIG_FILE}: {e}; using defaults");
            Config::default()
        }
    }
}
