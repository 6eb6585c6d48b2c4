//! Battle state machine states and outcomes.

/// Phase of a battle session.
///
/// ```text
/// Start ──delay──▶ PlayerTurn ──move──▶ EnemyTurn ──delay──▶ PlayerTurn ...
///                      │                    │
///                      ├──enemy faints──▶ Win ──delay──▶ Finished
///                      ├──run ok─────────────────────▶ Finished
///                      └──run failed──▶ EnemyTurn
///                                           └──player faints──▶ Lose ──delay──▶ Finished
/// ```
///
/// `Finished` is terminal until the next [`super::Battle::start`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleState {
    #[default]
    Start,
    PlayerTurn,
    EnemyTurn,
    Win,
    Lose,
    Finished,
}

impl BattleState {
    /// States whose exit is driven by the countdown timer.
    pub const fn is_timed(self) -> bool {
        matches!(
            self,
            BattleState::Start | BattleState::EnemyTurn | BattleState::Win | BattleState::Lose
        )
    }
}

/// How a battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory,
    Defeat,
    /// Escaped with `run_away`. Kept apart from `Defeat` so the game loop does
    /// not send the player back to spawn.
    Fled,
}

impl BattleOutcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, BattleOutcome::Victory)
    }
}
