use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scouting::report::{RankingReport, render_table};
use scouting::roster::load_roster;
use scouting::{EventScheduler, Role, ScoutingConfig, rank_players};

/// Simulate a season and rank players by cost per unit of effectiveness
#[derive(Debug, Parser)]
#[command(name = "scouting", version)]
struct Cli {
    /// Roster CSV with name, role and price columns
    roster: PathBuf,

    /// TOML file with [simulation] and [output] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Matches to simulate per player
    #[arg(short = 'n', long)]
    matches: Option<usize>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the ranking as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the ranking as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ScoutingConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScoutingConfig::default(),
    };
    if let Some(matches) = cli.matches {
        config.simulation.num_matches = matches;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = seed;
    }
    if cli.json.is_some() {
        config.output.json = cli.json.clone();
    }
    if cli.csv.is_some() {
        config.output.csv = cli.csv.clone();
    }
    config.simulation.validate()?;

    let players = load_roster(&cli.roster)
        .with_context(|| format!("loading roster {}", cli.roster.display()))?;

    println!("=== Football Scouting Simulation ===");
    println!("  Players: {}", players.len());
    println!("  Matches per player: {}", config.simulation.num_matches);
    println!("  Seed: {}", config.simulation.seed);

    let players = EventScheduler::from_config(&config.simulation).run(players);
    let ranking = rank_players(&players);

    let sections = [
        (Role::Attack, "Attacker ranking"),
        (Role::Defense, "Defender ranking"),
    ];
    for (role, title) in sections {
        print!("{}", render_table(title, ranking.by_role(role)));
    }

    let report = RankingReport::new(&ranking, &config.simulation);
    if let Some(path) = &config.output.json {
        report.save_json(path)?;
        println!("\nRanking written to {}", path.display());
    }
    if let Some(path) = &config.output.csv {
        report.save_csv(path)?;
        println!("\nRanking written to {}", path.display());
    }

    Ok(())
}
