//! Enemy move selection.
//!
//! The enemy picks a move by weighted random choice:
//!
//! ```text
//! weight = accuracy
//!        × 0            if the move has no uses left
//!        × aggression   if the player's health ratio < threshold
//!        × type modifier of move element vs player element
//! ```

use arrayvec::ArrayVec;

use crate::config::{BattleConfig, GameConfig};
use crate::rng::RngOracle;
use crate::stats::{BattleStats, Element, MoveSet};

/// Per-move selection weights, index-aligned with the move set.
pub fn move_weights(
    moves: &MoveSet,
    target: &BattleStats,
    target_element: Element,
    config: &BattleConfig,
) -> ArrayVec<f32, { GameConfig::MAX_MOVES }> {
    let aggressive = target.health_ratio() < config.aggression_threshold;

    moves
        .iter()
        .map(|mv| {
            if !mv.has_uses() {
                return 0.0;
            }
            let mut weight = mv.accuracy;
            if aggressive {
                weight *= config.aggression_multiplier;
            }
            weight * mv.element.modifier_against(target_element)
        })
        .collect()
}

/// Choose the index of the enemy's next move.
///
/// Falls back to the first move with uses left when every weight is zero,
/// and returns `None` only when no move can be used at all.
pub fn choose_enemy_move(
    moves: &MoveSet,
    target: &BattleStats,
    target_element: Element,
    rng: &mut impl RngOracle,
    config: &BattleConfig,
) -> Option<usize> {
    let weights = move_weights(moves, target, target_element, config);
    rng.weighted_index(&weights)
        .or_else(|| moves.first_available())
}
