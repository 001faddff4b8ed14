use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use player_value::{DEFAULT_SAMPLES, compare_footballers, default_squad, load_squad, render_table};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Compare footballers by the price of one unit of simulated performance
#[derive(Debug, Parser)]
#[command(name = "player_value", version)]
struct Cli {
    /// TOML squad file with [[footballer]] entries (built-in squad if omitted)
    #[arg(long)]
    squad: Option<PathBuf>,

    /// Performance samples per footballer
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let squad = match &cli.squad {
        Some(path) => {
            load_squad(path).with_context(|| format!("loading squad {}", path.display()))?
        }
        None => default_squad(),
    };
    tracing::info!(
        footballers = squad.len(),
        samples = cli.samples,
        seed = cli.seed,
        "comparing squad"
    );

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let results = compare_footballers(&squad, &mut rng, cli.samples)?;
    print!("{}", render_table(&results));

    Ok(())
}
