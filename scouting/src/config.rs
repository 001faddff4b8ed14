use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutingError};

/// Parameters of one simulated season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Matches (ticks) each player plays
    pub num_matches: usize,
    /// Base seed; each player process draws from `seed + roster index`
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_matches: 10,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_matches == 0 {
            return Err(ScoutingError::ZeroMatches);
        }
        Ok(())
    }
}

/// Where to export the ranking, if anywhere
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// Top-level TOML configuration
///
/// ```toml
/// [simulation]
/// num_matches = 38
/// seed = 7
///
/// [output]
/// json = "ranking.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoutingConfig {
    pub simulation: SimulationConfig,
    pub output: OutputSettings,
}

impl ScoutingConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ScoutingConfig = toml::from_str(contents)?;
        config.simulation.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ScoutingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
