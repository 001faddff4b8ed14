use std::cmp::Ordering;

use crate::evaluation::{Evaluation, evaluate_all};
use crate::{Player, Role};

/// Evaluations split by role, cheapest effectiveness first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub attackers: Vec<Evaluation>,
    pub defenders: Vec<Evaluation>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.attackers.len() + self.defenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn by_role(&self, role: Role) -> &[Evaluation] {
        match role {
            Role::Attack => &self.attackers,
            Role::Defense => &self.defenders,
        }
    }
}

/// Lower cost first, then more minutes. Infinite cost sorts last.
pub fn compare_evaluations(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cost_per_effectiveness
        .total_cmp(&b.cost_per_effectiveness)
        .then_with(|| b.minutes_played.cmp(&a.minutes_played))
}

/// Partition by role and sort each side. Full ties keep their input order.
pub fn rank(evaluations: Vec<Evaluation>) -> Ranking {
    let (mut attackers, mut defenders): (Vec<_>, Vec<_>) = evaluations
        .into_iter()
        .partition(|evaluation| evaluation.role == Role::Attack);
    attackers.sort_by(compare_evaluations);
    defenders.sort_by(compare_evaluations);
    Ranking {
        attackers,
        defenders,
    }
}

pub fn rank_players(players: &[Player]) -> Ranking {
    rank(evaluate_all(players))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(name: &str, role: Role, cost: f64, minutes: u64) -> Evaluation {
        Evaluation {
            name: name.to_string(),
            role,
            price: 1000.0,
            effectiveness: 0.5,
            minutes_played: minutes,
            cost_per_effectiveness: cost,
        }
    }

    fn names(evaluations: &[Evaluation]) -> Vec<&str> {
        evaluations.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_partition_by_role() {
        let ranking = rank(vec![
            eval("a1", Role::Attack, 10.0, 90),
            eval("d1", Role::Defense, 10.0, 90),
            eval("a2", Role::Attack, 5.0, 90),
        ]);
        assert_eq!(names(&ranking.attackers), vec!["a2", "a1"]);
        assert_eq!(names(&ranking.defenders), vec!["d1"]);
        assert_eq!(ranking.len(), 3);
        assert_eq!(names(ranking.by_role(Role::Defense)), vec!["d1"]);
    }

    #[test]
    fn test_cheaper_player_first() {
        let ranking = rank(vec![
            eval("pricey", Role::Defense, 2000.0, 600),
            eval("cheap", Role::Defense, 1000.0, 600),
        ]);
        assert_eq!(names(&ranking.defenders), vec!["cheap", "pricey"]);
    }

    #[test]
    fn test_minutes_break_cost_ties() {
        let ranking = rank(vec![
            eval("few", Role::Attack, 1500.0, 500),
            eval("many", Role::Attack, 1500.0, 800),
        ]);
        assert_eq!(names(&ranking.attackers), vec!["many", "few"]);
    }

    #[test]
    fn test_infinite_cost_sorts_last() {
        let ranking = rank(vec![
            eval("never", Role::Attack, f64::INFINITY, 900),
            eval("ok", Role::Attack, 1e12, 100),
            eval("free", Role::Attack, 0.0, 100),
        ]);
        assert_eq!(names(&ranking.attackers), vec!["free", "ok", "never"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let ranking = rank(vec![
            eval("first", Role::Defense, 700.0, 600),
            eval("second", Role::Defense, 700.0, 600),
            eval("third", Role::Defense, 700.0, 600),
            eval("inf1", Role::Defense, f64::INFINITY, 600),
            eval("inf2", Role::Defense, f64::INFINITY, 600),
        ]);
        assert_eq!(
            names(&ranking.defenders),
            vec!["first", "second", "third", "inf1", "inf2"]
        );
    }

    #[test]
    fn test_unrounded_costs_decide_order() {
        // both display as 1000.00 but the second is genuinely cheaper
        let ranking = rank(vec![
            eval("x", Role::Attack, 1000.004, 900),
            eval("y", Role::Attack, 1000.001, 100),
        ]);
        assert_eq!(names(&ranking.attackers), vec!["y", "x"]);
    }

    #[test]
    fn test_empty() {
        let ranking = rank(Vec::new());
        assert!(ranking.is_empty());
    }
}
