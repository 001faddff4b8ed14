use des::{Agent, Response};

use crate::{ClockStats, Event, Stats};

/// Re-emits the tick event once per unit of simulated time
#[derive(Default)]
pub struct MatchClock {
    ticks_emitted: usize,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent<Event, Stats> for MatchClock {
    fn act(&mut self, current_t: usize, data: &Event) -> Response<Event, Stats> {
        match data {
            Event::Tick { match_day } => {
                self.ticks_emitted += 1;
                Response::event(
                    current_t + 1,
                    Event::Tick {
                        match_day: match_day + 1,
                    },
                )
            }
        }
    }

    fn stats(&self) -> Stats {
        Stats::Clock(ClockStats {
            ticks_emitted: self.ticks_emitted,
        })
    }
}
