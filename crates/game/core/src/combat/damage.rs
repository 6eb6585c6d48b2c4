//! Damage calculation and application.

use crate::config::BattleConfig;
use crate::rng::RngOracle;
use crate::stats::BattleStats;

use super::hit::check_critical;

/// Calculate damage from a move.
///
/// # Formula
///
/// ```text
/// damage = floor(power * (attack / defense) * random_factor)
///
/// if critical:
///     damage *= crit_multiplier
/// ```
///
/// A defense of 0 is treated as 1.
pub fn calculate_damage(
    power: u32,
    attacker: &BattleStats,
    defender: &BattleStats,
    random_factor: f32,
    critical: Option<u32>,
) -> u32 {
    let ratio = attacker.attack as f32 / defender.defense.max(1) as f32;
    let damage = (power as f32 * ratio * random_factor).max(0.0) as u32;

    match critical {
        Some(multiplier) => damage.saturating_mul(multiplier),
        None => damage,
    }
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

/// A fully rolled damage value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRoll {
    pub amount: u32,
    pub random_factor: f32,
    pub critical: bool,
}

/// Roll the random factor and critical hit, then compute damage.
///
/// Draw order: random factor, then critical.
pub fn roll_damage(
    power: u32,
    attacker: &BattleStats,
    defender: &BattleStats,
    rng: &mut impl RngOracle,
    config: &BattleConfig,
) -> DamageRoll {
    let random_factor = rng.uniform(config.random_factor_min, config.random_factor_max);
    let critical = check_critical(config.critical_percent, rng);
    let amount = calculate_damage(
        power,
        attacker,
        defender,
        random_factor,
        critical.then_some(config.critical_multiplier),
    );

    DamageRoll {
        amount,
        random_factor,
        critical,
    }
}
