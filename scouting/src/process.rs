use des::{Agent, Response};
use serde::Serialize;
use tracing::trace;

use crate::generator::OutcomeGenerator;
use crate::{Event, Player, PlayerStats, Stats};

/// Lifecycle of a player process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessState {
    /// Created, no match played yet
    Idle,
    /// Played this tick's match, suspended until the next tick
    AwaitingTick,
    /// Halted by the event loop; further ticks are ignored
    Finished,
}

/// Resumable process that plays one match per tick for a single player
///
/// The process has no end of its own; it keeps recording matches until the
/// event loop stops advancing time and halts it.
pub struct PlayerProcess {
    player: Player,
    generator: Box<dyn OutcomeGenerator>,
    state: ProcessState,
}

impl PlayerProcess {
    pub fn new(player: Player, generator: Box<dyn OutcomeGenerator>) -> Self {
        PlayerProcess {
            player,
            generator,
            state: ProcessState::Idle,
        }
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Play one match and suspend. Returns false once the process is finished.
    pub fn advance(&mut self, current_t: usize) -> bool {
        if self.state == ProcessState::Finished {
            return false;
        }
        let record = self.generator.generate(self.player.role);
        trace!(
            t = current_t,
            player = %self.player.name,
            minutes = record.minutes,
            attempts = record.attempts(self.player.role),
            successes = record.successes(self.player.role),
            "match played"
        );
        self.player.record(record);
        self.state = ProcessState::AwaitingTick;
        true
    }

    pub fn into_player(self) -> Player {
        self.player
    }
}

impl Agent<Event, Stats> for PlayerProcess {
    fn act(&mut self, current_t: usize, data: &Event) -> Response<Event, Stats> {
        match data {
            Event::Tick { .. } => {
                self.advance(current_t);
                Response::new()
            }
        }
    }

    fn stats(&self) -> Stats {
        Stats::Player(PlayerStats {
            player: self.player.clone(),
            state: self.state,
        })
    }

    fn halt(&mut self, _current_t: usize) {
        self.state = ProcessState::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomMatchOutcomeGenerator;
    use crate::{MatchRecord, Role};

    struct Fixed(MatchRecord);

    impl OutcomeGenerator for Fixed {
        fn generate(&mut self, _role: Role) -> MatchRecord {
            self.0
        }
    }

    fn process(role: Role) -> PlayerProcess {
        PlayerProcess::new(
            Player::new("Test", role, 1000.0),
            Box::new(RandomMatchOutcomeGenerator::seeded(1)),
        )
    }

    #[test]
    fn test_starts_idle() {
        let p = process(Role::Defense);
        assert_eq!(p.state(), ProcessState::Idle);
        assert!(p.player().history().is_empty());
    }

    #[test]
    fn test_tick_appends_one_record() {
        let mut p = process(Role::Attack);
        let resp = p.act(0, &Event::Tick { match_day: 0 });
        assert!(resp.is_empty());
        assert_eq!(p.state(), ProcessState::AwaitingTick);
        assert_eq!(p.player().history().len(), 1);

        p.act(1, &Event::Tick { match_day: 1 });
        assert_eq!(p.player().history().len(), 2);
    }

    #[test]
    fn test_records_come_from_generator() {
        let record = MatchRecord::for_role(Role::Defense, 60, 10, 5);
        let mut p = PlayerProcess::new(
            Player::new("A", Role::Defense, 1000.0),
            Box::new(Fixed(record)),
        );
        p.advance(0);
        assert_eq!(p.into_player().history(), &[record]);
    }

    #[test]
    fn test_finished_process_ignores_ticks() {
        let mut p = process(Role::Defense);
        p.act(0, &Event::Tick { match_day: 0 });
        p.halt(1);
        assert_eq!(p.state(), ProcessState::Finished);

        assert!(!p.advance(1));
        p.act(1, &Event::Tick { match_day: 1 });
        assert_eq!(p.player().history().len(), 1);
    }

    #[test]
    fn test_stats_snapshot_player() {
        let mut p = process(Role::Attack);
        p.act(0, &Event::Tick { match_day: 0 });
        match p.stats() {
            Stats::Player(stats) => {
                assert_eq!(stats.player.history().len(), 1);
                assert_eq!(stats.state, ProcessState::AwaitingTick);
            }
            _ => panic!("Expected player stats"),
        }
    }
}
