//! Game configuration constants and tunable parameters.

use glam::Vec2;

/// Top-level configuration shared by every frame-driven system.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub battle: BattleConfig,
    pub collider: ColliderConfig,
    pub dialogue: DialogueConfig,
    pub encounter: EncounterConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of moves a combatant can know.
    pub const MAX_MOVES: usize = 4;
    /// Battle log capacity; the oldest entry is evicted first.
    pub const MAX_LOG_ENTRIES: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }
}

/// Timings, probabilities and formula constants for the battle state machine.
///
/// Percentages are expressed on a 0-100 scale to match move accuracy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Seconds spent in `Start` before the player's first turn.
    pub start_delay: f32,
    /// Seconds the enemy "thinks" before acting.
    pub turn_delay: f32,
    /// Seconds `Win`/`Lose` stay on screen before the battle finishes.
    pub outcome_delay: f32,

    pub critical_percent: f32,
    pub critical_multiplier: u32,
    pub random_factor_min: f32,
    pub random_factor_max: f32,

    pub run_success_percent: f32,

    /// Enemy gets more aggressive once the player's health ratio drops below this.
    pub aggression_threshold: f32,
    pub aggression_multiplier: f32,

    pub status_damage: u32,
    pub burn_attack_penalty: u32,
    pub paralysis_percent: f32,

    pub player_battle_position: Vec2,
    pub enemy_battle_position: Vec2,
}

impl BattleConfig {
    pub const DEFAULT_STATE_DELAY: f32 = 2.0;
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            start_delay: Self::DEFAULT_STATE_DELAY,
            turn_delay: Self::DEFAULT_STATE_DELAY,
            outcome_delay: Self::DEFAULT_STATE_DELAY,
            critical_percent: 15.0,
            critical_multiplier: 2,
            random_factor_min: 0.85,
            random_factor_max: 1.0,
            run_success_percent: 40.0,
            aggression_threshold: 0.5,
            aggression_multiplier: 1.2,
            status_damage: 5,
            burn_attack_penalty: 2,
            paralysis_percent: 25.0,
            player_battle_position: Vec2::new(200.0, 300.0),
            enemy_battle_position: Vec2::new(600.0, 150.0),
        }
    }
}

/// Movement and interaction parameters for [`crate::collider::Collider`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColliderConfig {
    /// Center-to-center distance within which interactables are considered.
    pub interaction_radius: f32,
    /// Seconds between two interactions.
    pub interaction_cooldown: f32,
    /// Minimum dot product between facing and direction-to-target.
    pub facing_threshold: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            interaction_radius: 20.0,
            interaction_cooldown: 0.5,
            facing_threshold: 0.5,
        }
    }
}

/// Random encounter tuning used by [`crate::session::GameSession`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterConfig {
    /// Player walking speed in world units per second.
    pub walk_speed: f32,
    /// Grace period after a battle during which no encounter can trigger.
    pub grace_period: f32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            walk_speed: 225.0,
            grace_period: 3.0,
        }
    }
}

/// Text reveal and auto-close timing for [`crate::dialogue::DialogueSystem`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogueConfig {
    /// Typewriter speed. Zero or less reveals each node at once.
    pub chars_per_second: f32,
    /// Seconds a fully revealed end node stays open without input.
    pub auto_close_after: f32,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            chars_per_second: 40.0,
            auto_close_after: 5.0,
        }
    }
}
