//! Errors returned by the battle's UI entry points.

use crate::error::{ErrorSeverity, GameError};
use crate::roster::CombatantId;

use super::state::BattleState;

/// Rejected battle input. The battle state is unchanged when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("battle is not active")]
    NotActive,

    #[error("not the player's turn (state: {state})")]
    NotPlayerTurn { state: BattleState },

    #[error("unknown move '{0}'")]
    UnknownMove(String),

    #[error("move '{0}' has no uses left")]
    MoveExhausted(String),

    #[error("combatant {0} is missing from the roster")]
    MissingCombatant(CombatantId),

    #[error("there is no opponent to target")]
    NoOpponent,
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActive | Self::NotPlayerTurn { .. } | Self::MoveExhausted(_) => {
                ErrorSeverity::Recoverable
            }
            Self::UnknownMove(_) | Self::NoOpponent => ErrorSeverity::Validation,
            Self::MissingCombatant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActive => "BATTLE_NOT_ACTIVE",
            Self::NotPlayerTurn { .. } => "BATTLE_NOT_PLAYER_TURN",
            Self::UnknownMove(_) => "BATTLE_UNKNOWN_MOVE",
            Self::MoveExhausted(_) => "BATTLE_MOVE_EXHAUSTED",
            Self::MissingCombatant(_) => "BATTLE_MISSING_COMBATANT",
            Self::NoOpponent => "BATTLE_NO_OPPONENT",
        }
    }
}
