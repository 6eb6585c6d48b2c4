//! Combat result types and attack resolution.

use crate::config::BattleConfig;
use crate::rng::RngOracle;
use crate::stats::{BattleStats, Move, StatusCondition};

use super::damage::roll_damage;
use super::hit::check_accuracy;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Move missed the target.
    Miss,
    /// Move hit the target.
    Hit,
    /// Move hit and the critical roll succeeded.
    Critical,
}

/// Result of resolving one move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Health removed from the defender (None if miss).
    pub damage: Option<u32>,

    /// Condition newly applied to the defender.
    pub inflicted: Option<StatusCondition>,
}

impl AttackResult {
    pub const MISS: Self = Self {
        outcome: AttackOutcome::Miss,
        damage: None,
        inflicted: None,
    };

    pub fn landed(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }
}

/// Resolve a complete move: accuracy, damage, critical, condition.
///
/// Mutates `defender` in place: health is reduced (floored at 0) and the
/// move's condition, if any, replaces the defender's current one.
///
/// Draw order: accuracy, then random factor and critical for damaging moves.
/// Status moves skip the damage rolls entirely.
pub fn resolve_attack(
    mv: &Move,
    attacker: &BattleStats,
    defender: &mut BattleStats,
    defender_status: &mut StatusCondition,
    rng: &mut impl RngOracle,
    config: &BattleConfig,
) -> AttackResult {
    // 1. Check if the move lands
    if !check_accuracy(mv.accuracy, rng) {
        return AttackResult::MISS;
    }

    // 2. Damage
    let (outcome, damage) = if mv.is_status_move() {
        (AttackOutcome::Hit, None)
    } else {
        let roll = roll_damage(mv.power, attacker, defender, rng, config);
        let dealt = defender.take_damage(roll.amount);
        let outcome = if roll.critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        };
        (outcome, Some(dealt))
    };

    // 3. Condition
    let inflicted = mv
        .inflicts
        .filter(|c| !c.is_none() && *c != *defender_status);
    if let Some(condition) = inflicted {
        *defender_status = condition;
    }

    AttackResult {
        outcome,
        damage,
        inflicted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use crate::stats::Element;

    fn sure_hit_config() -> BattleConfig {
        BattleConfig {
            critical_percent: 0.0,
            random_factor_min: 1.0,
            random_factor_max: 1.0,
            ..BattleConfig::default()
        }
    }

    #[test]
    fn damage_is_clamped_to_remaining_health() {
        let mv = Move::new("Quake", Element::Ground, 40, 100.0, 5);
        let attacker = BattleStats::new(100, 80, 10, 10);
        let mut defender = BattleStats::new(50, 10, 40, 10);
        let mut status = StatusCondition::None;

        let result = resolve_attack(
            &mv,
            &attacker,
            &mut defender,
            &mut status,
            &mut PcgRng::new(0),
            &sure_hit_config(),
        );

        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, Some(50));
        assert_eq!(defender.health, 0);
    }

    #[test]
    fn status_move_applies_condition_without_damage() {
        let mv = Move::new("Spore", Element::Insect, 0, 100.0, 5).inflicting(StatusCondition::Poison);
        let attacker = BattleStats::default();
        let mut defender = BattleStats::default();
        let mut status = StatusCondition::None;

        let result = resolve_attack(
            &mv,
            &attacker,
            &mut defender,
            &mut status,
            &mut PcgRng::new(0),
            &sure_hit_config(),
        );

        assert_eq!(result.damage, None);
        assert_eq!(result.inflicted, Some(StatusCondition::Poison));
        assert_eq!(status, StatusCondition::Poison);
        assert_eq!(defender.health, defender.max_health);
    }

    #[test]
    fn miss_changes_nothing() {
        let mv = Move::new("Whiff", Element::Normal, 90, 0.0, 5).inflicting(StatusCondition::Burn);
        let attacker = BattleStats::default();
        let mut defender = BattleStats::default();
        let mut status = StatusCondition::None;

        let result = resolve_attack(
            &mv,
            &attacker,
            &mut defender,
            &mut status,
            &mut PcgRng::new(0),
            &BattleConfig::default(),
        );

        assert_eq!(result, AttackResult::MISS);
        assert_eq!(defender, BattleStats::default());
        assert_eq!(status, StatusCondition::None);
    }

    #[test]
    fn health_never_exceeds_bounds_over_many_hits() {
        let config = BattleConfig::default();
        let mut rng = PcgRng::new(77);
        let mv = Move::new("Slam", Element::Normal, 35, 90.0, 99);
        let attacker = BattleStats::new(100, 60, 30, 10);
        for _ in 0..300 {
            let mut defender = BattleStats::new(120, 10, 25, 10);
            let mut status = StatusCondition::None;
            while !defender.is_fainted() {
                resolve_attack(&mv, &attacker, &mut defender, &mut status, &mut rng, &config);
                assert!(defender.health <= defender.max_health);
            }
        }
    }
}
