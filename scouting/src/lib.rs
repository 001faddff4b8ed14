//! Season simulation for scouting football players.
//!
//! Every player on a roster gets a [`process::PlayerProcess`] that plays one
//! simulated match per tick of the discrete-event loop. Once the season is
//! over each player's history is reduced to an effectiveness ratio and a
//! cost-per-effectiveness figure, and players are ranked within their role.
//!
//! Key agents:
//! - PlayerProcess: draws one match outcome per tick into the player's history
//! - MatchClock: keeps the tick event going, one per unit of simulated time

pub mod clock;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod process;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod scheduler;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use config::{ScoutingConfig, SimulationConfig};
pub use error::{Result, ScoutingError};
pub use evaluation::{Evaluation, evaluate_player};
pub use process::ProcessState;
pub use ranking::{Ranking, rank, rank_players};
pub use scheduler::EventScheduler;

/// Which side of the ball a player is judged on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Attack,
    Defense,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Attack => write!(f, "Attack"),
            Role::Defense => write!(f, "Defense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts the English names and the Spanish ones used by older rosters.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" | "ataque" => Ok(Role::Attack),
            "defense" | "defensa" => Ok(Role::Defense),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Outcome of one simulated match for one player
///
/// Only the pair matching the player's role is populated; the other pair
/// stays at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    pub minutes: u32,
    pub defensive_attempts: u32,
    pub defensive_successes: u32,
    pub offensive_attempts: u32,
    pub offensive_successes: u32,
}

impl MatchRecord {
    pub fn for_role(role: Role, minutes: u32, attempts: u32, successes: u32) -> Self {
        debug_assert!(successes <= attempts);
        match role {
            Role::Defense => MatchRecord {
                minutes,
                defensive_attempts: attempts,
                defensive_successes: successes,
                ..Default::default()
            },
            Role::Attack => MatchRecord {
                minutes,
                offensive_attempts: attempts,
                offensive_successes: successes,
                ..Default::default()
            },
        }
    }

    pub fn attempts(&self, role: Role) -> u32 {
        match role {
            Role::Defense => self.defensive_attempts,
            Role::Attack => self.offensive_attempts,
        }
    }

    pub fn successes(&self, role: Role) -> u32 {
        match role {
            Role::Defense => self.defensive_successes,
            Role::Attack => self.offensive_successes,
        }
    }
}

/// A rostered player and the matches simulated for them so far
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub price: f64,
    history: Vec<MatchRecord>,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role, price: f64) -> Self {
        Player {
            name: name.into(),
            role,
            price,
            history: Vec::new(),
        }
    }

    /// Build a player with an already-played history
    pub fn with_history(
        name: impl Into<String>,
        role: Role,
        price: f64,
        history: Vec<MatchRecord>,
    ) -> Self {
        Player {
            history,
            ..Player::new(name, role, price)
        }
    }

    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    pub(crate) fn record(&mut self, record: MatchRecord) {
        self.history.push(record);
    }
}

/// All events in the season simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One unit of simulated time: every active player plays a match
    Tick { match_day: usize },
}

/// Observable state of a player process
#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub player: Player,
    pub state: ProcessState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStats {
    pub ticks_emitted: usize,
}

/// Combined stats enum for DES framework compatibility
#[derive(Debug, Clone)]
pub enum Stats {
    Player(PlayerStats),
    Clock(ClockStats),
}
