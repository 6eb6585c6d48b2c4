//! Mutable battle statistics and level-up growth.

use crate::rng::RngOracle;

/// Health, attack, defense and speed of a combatant.
///
/// Invariant: `health <= max_health`. Every mutator below preserves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl BattleStats {
    /// Create stats at full health.
    pub const fn new(max_health: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            attack,
            defense,
            speed,
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// Health as a fraction of maximum (0 when `max_health` is 0).
    pub fn health_ratio(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    /// Subtract damage, flooring health at 0. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    /// Lower attack, flooring at 0. Returns the attack actually lost.
    pub fn weaken_attack(&mut self, amount: u32) -> u32 {
        let before = self.attack;
        self.attack = self.attack.saturating_sub(amount);
        before - self.attack
    }

    /// Restore health to maximum.
    pub fn heal_full(&mut self) {
        self.health = self.max_health;
    }

    /// Re-establish `health <= max_health` after direct field edits.
    pub fn clamp(&mut self) {
        self.health = self.health.min(self.max_health);
    }
}

impl Default for BattleStats {
    fn default() -> Self {
        Self::new(100, 50, 40, 45)
    }
}

/// Stat increases granted by one level-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelUp {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl LevelUp {
    pub const MAX_HEALTH_GAIN: u32 = 40;
    pub const MAX_STAT_GAIN: u32 = 8;

    /// Roll random growth: health +[0,40], the other stats +[0,8] each.
    pub fn roll(rng: &mut impl RngOracle) -> Self {
        Self {
            health: rng.range(0, Self::MAX_HEALTH_GAIN),
            attack: rng.range(0, Self::MAX_STAT_GAIN),
            defense: rng.range(0, Self::MAX_STAT_GAIN),
            speed: rng.range(0, Self::MAX_STAT_GAIN),
        }
    }

    /// Apply growth and heal to the new maximum.
    pub fn apply(&self, stats: &mut BattleStats) {
        stats.max_health = stats.max_health.saturating_add(self.health);
        stats.attack = stats.attack.saturating_add(self.attack);
        stats.defense = stats.defense.saturating_add(self.defense);
        stats.speed = stats.speed.saturating_add(self.speed);
        stats.heal_full();
    }
}
