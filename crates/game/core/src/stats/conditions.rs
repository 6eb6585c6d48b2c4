//! Conditions - standing status effects ticked at the start of a turn.
//!
//! A combatant carries at most one condition. It persists across turns until
//! the battle finishes or a new condition replaces it.

use crate::config::BattleConfig;
use crate::rng::RngOracle;

use super::battle::BattleStats;

/// Status condition carried by a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatusCondition {
    #[default]
    None,
    /// Flat health loss each turn.
    Poison,
    /// Chance to lose the turn.
    Paralysis,
    /// Flat health loss and attack decay each turn.
    Burn,
}

/// What a condition did to its carrier this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTick {
    pub damage: u32,
    pub attack_lost: u32,
    /// The carrier loses its action this turn.
    pub skip_turn: bool,
}

impl StatusTick {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

impl StatusCondition {
    pub fn is_none(self) -> bool {
        matches!(self, StatusCondition::None)
    }

    /// Adjective used in "X is now ..." log lines.
    pub fn describe(self) -> &'static str {
        match self {
            StatusCondition::None => "healthy",
            StatusCondition::Poison => "poisoned",
            StatusCondition::Paralysis => "paralyzed",
            StatusCondition::Burn => "burned",
        }
    }

    /// Apply one turn of this condition to `stats`.
    ///
    /// Only paralysis consumes a roll, so battles without paralysis keep the
    /// same random sequence regardless of other conditions.
    pub fn tick(
        self,
        stats: &mut BattleStats,
        rng: &mut impl RngOracle,
        config: &BattleConfig,
    ) -> StatusTick {
        match self {
            StatusCondition::None => StatusTick::default(),
            StatusCondition::Poison => StatusTick {
                damage: stats.take_damage(config.status_damage),
                ..StatusTick::default()
            },
            StatusCondition::Paralysis => StatusTick {
                skip_turn: rng.chance(config.paralysis_percent),
                ..StatusTick::default()
            },
            StatusCondition::Burn => {
                let attack_lost = stats.weaken_attack(config.burn_attack_penalty);
                StatusTick {
                    damage: stats.take_damage(config.status_damage),
                    attack_lost,
                    skip_turn: false,
                }
            }
        }
    }
}
