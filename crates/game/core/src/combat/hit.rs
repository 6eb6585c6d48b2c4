//! Accuracy and critical-hit rolls.

use crate::rng::RngOracle;

/// Check if a move lands: a uniform draw in `[0, 100)` below `accuracy`.
///
/// Accuracy 100 always lands, accuracy 0 never does.
pub fn check_accuracy(accuracy: f32, rng: &mut impl RngOracle) -> bool {
    rng.roll_percent() < accuracy
}

/// Independent critical-hit roll.
pub fn check_critical(critical_percent: f32, rng: &mut impl RngOracle) -> bool {
    rng.chance(critical_percent)
}
