//! Statistical value model for footballers
//!
//! Each footballer's match performance is drawn from a normal distribution
//! around their expected performance. The sample mean gives the cost of one
//! unit of performance, and footballers are compared on that cost.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SAMPLES: usize = 100;

#[derive(Debug, Error)]
pub enum ValueModelError {
    #[error("{name}: invalid performance distribution (mean {mean}, variation {variation})")]
    InvalidDistribution {
        name: String,
        mean: f64,
        variation: f64,
    },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed squad file: {0}")]
    Squad(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ValueModelError>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footballer {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub price: f64,
    pub expected_performance: f64,
    /// Standard deviation of match performance
    pub variation: f64,
}

impl Footballer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        position: impl Into<String>,
        price: f64,
        expected_performance: f64,
        variation: f64,
    ) -> Self {
        Footballer {
            name: name.into(),
            age,
            position: position.into(),
            price,
            expected_performance,
            variation,
        }
    }

    fn distribution(&self) -> Result<Normal<f64>> {
        let invalid = || ValueModelError::InvalidDistribution {
            name: self.name.clone(),
            mean: self.expected_performance,
            variation: self.variation,
        };
        // Normal::new only rejects a non-finite standard deviation
        if !self.expected_performance.is_finite()
            || !self.variation.is_finite()
            || self.variation < 0.0
        {
            return Err(invalid());
        }
        Normal::new(self.expected_performance, self.variation).map_err(|_| invalid())
    }

    /// Draw `samples` match performances
    pub fn simulate_performance<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        samples: usize,
    ) -> Result<Vec<f64>> {
        let normal = self.distribution()?;
        Ok((0..samples).map(|_| normal.sample(&mut *rng)).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profitability {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub price: f64,
    pub mean_performance: f64,
    /// `f64::INFINITY` when the mean performance is not positive
    pub cost_per_unit: f64,
}

pub fn profitability<R: Rng + ?Sized>(
    footballer: &Footballer,
    rng: &mut R,
    samples: usize,
) -> Result<Profitability> {
    let performances = footballer.simulate_performance(rng, samples)?;
    let mean_performance = if performances.is_empty() {
        0.0
    } else {
        performances.iter().sum::<f64>() / performances.len() as f64
    };
    let cost_per_unit = if mean_performance > 0.0 {
        footballer.price / mean_performance
    } else {
        f64::INFINITY
    };
    debug!(
        footballer = %footballer.name,
        mean_performance,
        cost_per_unit,
        "profitability computed"
    );

    Ok(Profitability {
        name: footballer.name.clone(),
        age: footballer.age,
        position: footballer.position.clone(),
        price: footballer.price,
        mean_performance,
        cost_per_unit,
    })
}

/// Evaluate every footballer and sort by cost per unit, most profitable first
pub fn compare_footballers<R: Rng + ?Sized>(
    footballers: &[Footballer],
    rng: &mut R,
    samples: usize,
) -> Result<Vec<Profitability>> {
    let mut results = footballers
        .iter()
        .map(|footballer| profitability(footballer, &mut *rng, samples))
        .collect::<Result<Vec<_>>>()?;
    results.sort_by(|a, b| a.cost_per_unit.total_cmp(&b.cost_per_unit));
    Ok(results)
}

pub fn default_squad() -> Vec<Footballer> {
    vec![
        Footballer::new("Carlos", 24, "Forward", 12_000_000.0, 18.0, 4.0),
        Footballer::new("Luis", 27, "Goalkeeper", 9_000_000.0, 14.0, 3.0),
        Footballer::new("Raúl", 22, "Defender", 6_000_000.0, 8.0, 2.0),
    ]
}

#[derive(Debug, Deserialize)]
struct SquadFile {
    footballer: Vec<Footballer>,
}

/// Parse a squad from `[[footballer]]` tables
pub fn squad_from_toml(contents: &str) -> Result<Vec<Footballer>> {
    let squad: SquadFile = toml::from_str(contents)?;
    Ok(squad.footballer)
}

pub fn load_squad(path: &Path) -> Result<Vec<Footballer>> {
    let contents = fs::read_to_string(path).map_err(|source| ValueModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    squad_from_toml(&contents)
}

pub fn render_table(results: &[Profitability]) -> String {
    let mut out = String::from("\nFootballers compared by cost per performance unit\n\n");
    out.push_str(&format!(
        "{:<12}{:<6}{:<12}{:<14}{:<18}{:<15}\n",
        "Name", "Age", "Position", "Price", "Performance", "Cost/Unit"
    ));
    out.push_str(&format!("{:-<80}\n", ""));
    for r in results {
        let cost = if r.cost_per_unit.is_finite() {
            format!("{:.2}", r.cost_per_unit)
        } else {
            "Inf".to_string()
        };
        out.push_str(&format!(
            "{:<12}{:<6}{:<12}{:<14.0}{:<18.2}{:<15}\n",
            r.name, r.age, r.position, r.price, r.mean_performance, cost
        ));
    }
    out
}
