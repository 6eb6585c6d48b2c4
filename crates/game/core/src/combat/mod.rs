//! Combat resolution system.
//!
//! Pure functions for resolving a single move against a target. Randomness is
//! injected through [`crate::rng::RngOracle`]; given the same rolls, results
//! are identical.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (accuracy + damage + critical)
//! - `check_accuracy`: Accuracy roll against a move's hit chance
//! - `calculate_damage`: `power * attack / defense * random_factor`, doubled on a critical
//! - `apply_damage`: Health reduction (clamped to 0)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{DamageRoll, apply_damage, calculate_damage, roll_damage};
pub use hit::{check_accuracy, check_critical};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
