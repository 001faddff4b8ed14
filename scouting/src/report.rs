//! Console tables and file exports of a ranking
//!
//! Exports carry everything an external plotting tool needs. Players with an
//! infinite cost are kept but flagged `plottable = false` with an empty cost.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, ScoutingError};
use crate::evaluation::{Evaluation, round2};
use crate::{Ranking, Role, SimulationConfig};

pub fn format_cost(cost: f64) -> String {
    if cost.is_finite() {
        format!("{:.2}", cost)
    } else {
        "Inf".to_string()
    }
}

pub fn render_table(title: &str, evaluations: &[Evaluation]) -> String {
    let mut out = format!("\n{}\n\n", title);
    out.push_str(&format!(
        "{:<12}{:<10}{:<14}{:<15}{:<10}{:<15}\n",
        "Name", "Role", "Price", "Effectiveness", "Minutes", "Cost/Effect"
    ));
    out.push_str(&format!("{:-<76}\n", ""));
    for e in evaluations {
        out.push_str(&format!(
            "{:<12}{:<10}{:<14.0}{:<15.2}{:<10}{:<15}\n",
            e.name,
            e.role.to_string(),
            e.price,
            e.effectiveness,
            e.minutes_played,
            format_cost(e.cost_per_effectiveness)
        ));
    }
    out
}

/// One exported evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRow {
    pub ranking: &'static str,
    pub rank: usize,
    pub name: String,
    pub role: Role,
    pub price: f64,
    pub effectiveness: f64,
    pub minutes_played: u64,
    /// `None` stands for an infinite cost
    pub cost_per_effectiveness: Option<f64>,
    pub plottable: bool,
}

impl EvaluationRow {
    fn new(ranking: &'static str, rank: usize, evaluation: &Evaluation) -> Self {
        let plottable = evaluation.has_finite_cost();
        EvaluationRow {
            ranking,
            rank,
            name: evaluation.name.clone(),
            role: evaluation.role,
            price: evaluation.price,
            effectiveness: round2(evaluation.effectiveness),
            minutes_played: evaluation.minutes_played,
            cost_per_effectiveness: plottable.then(|| round2(evaluation.cost_per_effectiveness)),
            plottable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub num_matches: usize,
    pub seed: u64,
}

/// Serializable view of a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub attackers: Vec<EvaluationRow>,
    pub defenders: Vec<EvaluationRow>,
}

impl RankingReport {
    pub fn new(ranking: &Ranking, config: &SimulationConfig) -> Self {
        let rows = |name: &'static str, evaluations: &[Evaluation]| {
            evaluations
                .iter()
                .enumerate()
                .map(|(i, evaluation)| EvaluationRow::new(name, i + 1, evaluation))
                .collect::<Vec<_>>()
        };
        RankingReport {
            metadata: ReportMetadata {
                num_matches: config.num_matches,
                seed: config.seed,
            },
            attackers: rows("attackers", &ranking.attackers),
            defenders: rows("defenders", &ranking.defenders),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &EvaluationRow> {
        self.attackers.iter().chain(self.defenders.iter())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in self.rows() {
            writer.serialize(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn save_csv(&self, path: &Path) -> Result<()> {
        self.write_csv(create(path)?)
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| ScoutingError::Io {
        path: path.to_path_buf(),
        source,
    })
}
