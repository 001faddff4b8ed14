use des::{Agent, EventLoop};
use tracing::info;

use crate::clock::MatchClock;
use crate::generator::{OutcomeGenerator, RandomMatchOutcomeGenerator};
use crate::process::{PlayerProcess, ProcessState};
use crate::{Event, Player, SimulationConfig, Stats};

/// Runs every player process in lockstep for a fixed number of ticks
///
/// Ticks happen at times `0..num_matches`; each process plays exactly one
/// match per tick. The tick that would fall at `num_matches` is never
/// delivered and every process is halted instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventScheduler {
    num_matches: usize,
    seed: u64,
}

impl EventScheduler {
    pub fn new(num_matches: usize, seed: u64) -> Self {
        EventScheduler { num_matches, seed }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.num_matches, config.seed)
    }

    /// Simulate the season with one independent random stream per player,
    /// seeded `seed + roster index`.
    pub fn run(&self, players: Vec<Player>) -> Vec<Player> {
        let seed = self.seed;
        self.run_with(players, |index, _| {
            Box::new(RandomMatchOutcomeGenerator::seeded(
                seed.wrapping_add(index as u64),
            ))
        })
    }

    /// Simulate the season, asking `generator_for` for each player's outcome
    /// source. Players come back in roster order.
    pub fn run_with<F>(&self, players: Vec<Player>, mut generator_for: F) -> Vec<Player>
    where
        F: FnMut(usize, &Player) -> Box<dyn OutcomeGenerator>,
    {
        let num_players = players.len();
        info!(
            players = num_players,
            matches = self.num_matches,
            seed = self.seed,
            "starting season"
        );

        let mut agents: Vec<Box<dyn Agent<Event, Stats>>> = Vec::with_capacity(num_players + 1);
        for (index, player) in players.into_iter().enumerate() {
            let generator = generator_for(index, &player);
            agents.push(Box::new(PlayerProcess::new(player, generator)));
        }
        agents.push(Box::new(MatchClock::new()));

        let mut event_loop = EventLoop::new(vec![(0, Event::Tick { match_day: 0 })], agents);
        event_loop.run(self.num_matches);

        let mut ticks = 0;
        let mut completed = Vec::with_capacity(num_players);
        for stats in event_loop.stats() {
            match stats {
                Stats::Player(player_stats) => {
                    debug_assert_eq!(player_stats.state, ProcessState::Finished);
                    completed.push(player_stats.player);
                }
                Stats::Clock(clock_stats) => ticks = clock_stats.ticks_emitted,
            }
        }

        info!(ticks, "season finished");
        completed
    }
}
