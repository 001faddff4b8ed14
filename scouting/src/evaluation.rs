use tracing::debug;

use crate::{Player, Role};

/// Season summary for one player
///
/// `cost_per_effectiveness` is `f64::INFINITY` when the player never
/// succeeded (or never attempted anything). Values are unrounded; round only
/// for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub name: String,
    pub role: Role,
    pub price: f64,
    pub effectiveness: f64,
    pub minutes_played: u64,
    pub cost_per_effectiveness: f64,
}

impl Evaluation {
    pub fn has_finite_cost(&self) -> bool {
        self.cost_per_effectiveness.is_finite()
    }
}

/// Reduce a completed history to effectiveness and cost per effectiveness
pub fn evaluate_player(player: &Player) -> Evaluation {
    let role = player.role;
    let (minutes_played, attempts, successes) = player.history().iter().fold(
        (0u64, 0u64, 0u64),
        |(minutes, attempts, successes), record| {
            (
                minutes + u64::from(record.minutes),
                attempts + u64::from(record.attempts(role)),
                successes + u64::from(record.successes(role)),
            )
        },
    );

    let effectiveness = if attempts > 0 {
        successes as f64 / attempts as f64
    } else {
        0.0
    };
    // Saturate so that infinity only ever means "never succeeded"
    let cost_per_effectiveness = if effectiveness > 0.0 {
        (player.price / effectiveness).min(f64::MAX)
    } else {
        f64::INFINITY
    };

    debug!(
        player = %player.name,
        %role,
        attempts,
        successes,
        effectiveness,
        cost_per_effectiveness,
        "player evaluated"
    );

    Evaluation {
        name: player.name.clone(),
        role,
        price: player.price,
        effectiveness,
        minutes_played,
        cost_per_effectiveness,
    }
}

pub fn evaluate_all(players: &[Player]) -> Vec<Evaluation> {
    players.iter().map(evaluate_player).collect()
}

/// Round to two decimals for tables and exports
pub fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchRecord;
    use approx::assert_relative_eq;

    #[test]
    fn test_defender_single_match() {
        let player = Player::with_history(
            "A",
            Role::Defense,
            1000.0,
            vec![MatchRecord::for_role(Role::Defense, 60, 10, 5)],
        );
        let eval = evaluate_player(&player);
        assert_relative_eq!(eval.effectiveness, 0.5);
        assert_eq!(eval.minutes_played, 60);
        assert_relative_eq!(eval.cost_per_effectiveness, 2000.0);
        assert!(eval.has_finite_cost());
    }

    #[test]
    fn test_totals_across_history() {
        let player = Player::with_history(
            "B",
            Role::Attack,
            900.0,
            vec![
                MatchRecord::for_role(Role::Attack, 90, 12, 3),
                MatchRecord::for_role(Role::Attack, 45, 12, 6),
            ],
        );
        let eval = evaluate_player(&player);
        assert_eq!(eval.minutes_played, 135);
        assert_relative_eq!(eval.effectiveness, 9.0 / 24.0);
        assert_relative_eq!(eval.cost_per_effectiveness, 2400.0);
    }

    #[test]
    fn test_ignores_other_role_counters() {
        // an attacker is judged only on offensive counters
        let record = MatchRecord {
            minutes: 80,
            defensive_attempts: 10,
            defensive_successes: 10,
            offensive_attempts: 10,
            offensive_successes: 2,
        };
        let player = Player::with_history("C", Role::Attack, 100.0, vec![record]);
        assert_relative_eq!(evaluate_player(&player).effectiveness, 0.2);
    }

    #[test]
    fn test_no_attempts_is_infinite_cost() {
        let player = Player::with_history(
            "D",
            Role::Defense,
            5000.0,
            vec![MatchRecord {
                minutes: 90,
                ..Default::default()
            }],
        );
        let eval = evaluate_player(&player);
        assert_eq!(eval.effectiveness, 0.0);
        assert_eq!(eval.minutes_played, 90);
        assert!(eval.cost_per_effectiveness.is_infinite());
        assert!(!eval.has_finite_cost());
    }

    #[test]
    fn test_no_successes_is_infinite_cost() {
        let player = Player::with_history(
            "E",
            Role::Attack,
            5000.0,
            vec![MatchRecord::for_role(Role::Attack, 70, 14, 0)],
        );
        let eval = evaluate_player(&player);
        assert_eq!(eval.effectiveness, 0.0);
        assert_eq!(eval.cost_per_effectiveness, f64::INFINITY);
    }

    #[test]
    fn test_huge_price_stays_finite() {
        let player = Player::with_history(
            "Big",
            Role::Defense,
            1e308,
            vec![MatchRecord::for_role(Role::Defense, 90, 13, 6)],
        );
        let eval = evaluate_player(&player);
        assert!(eval.effectiveness > 0.0);
        assert!(eval.has_finite_cost());
        assert_eq!(eval.cost_per_effectiveness, f64::MAX);
    }

    #[test]
    fn test_empty_history() {
        let eval = evaluate_player(&Player::new("F", Role::Defense, 10.0));
        assert_eq!(eval.minutes_played, 0);
        assert_eq!(eval.effectiveness, 0.0);
        assert!(eval.cost_per_effectiveness.is_infinite());
    }

    #[test]
    fn test_evaluation_is_pure() {
        let player = Player::with_history(
            "G",
            Role::Defense,
            750.0,
            vec![
                MatchRecord::for_role(Role::Defense, 66, 13, 7),
                MatchRecord::for_role(Role::Defense, 52, 11, 9),
            ],
        );
        assert_eq!(evaluate_player(&player), evaluate_player(&player));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }
}
