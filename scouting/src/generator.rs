use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{MatchRecord, Role};

/// Minutes a player spends on the pitch in one match
pub const MINUTES_PLAYED: RangeInclusive<u32> = 45..=90;

/// Role-relevant actions attempted in one match
pub const ATTEMPTS_PER_MATCH: RangeInclusive<u32> = 10..=15;

/// Source of match outcomes for a player process
pub trait OutcomeGenerator {
    fn generate(&mut self, role: Role) -> MatchRecord;
}

/// Draws bounded uniform outcomes from its own random stream
///
/// Per record the draw order is fixed (minutes, attempts, successes), so a
/// seeded generator replays the same season.
pub struct RandomMatchOutcomeGenerator<R = StdRng> {
    rng: R,
}

impl RandomMatchOutcomeGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMatchOutcomeGenerator<R> {
    pub fn new(rng: R) -> Self {
        RandomMatchOutcomeGenerator { rng }
    }
}

impl<R: Rng> OutcomeGenerator for RandomMatchOutcomeGenerator<R> {
    fn generate(&mut self, role: Role) -> MatchRecord {
        let minutes = self.rng.random_range(MINUTES_PLAYED);
        let attempts = self.rng.random_range(ATTEMPTS_PER_MATCH);
        let successes = self.rng.random_range(0..=attempts);
        MatchRecord::for_role(role, minutes, attempts, successes)
    }
}
