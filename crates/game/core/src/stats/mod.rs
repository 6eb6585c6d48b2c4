//! Battle statistics, elemental types, status conditions and moves.
//!
//! # Layout
//!
//! ```text
//! [ BattleStats ]  health / attack / defense / speed, clamped on every write
//! [ Element     ]  type tag driving the enemy's move preference
//! [ Condition   ]  one standing status, ticked at the start of a turn
//! [ Move        ]  immutable descriptor plus remaining uses
//! ```

pub mod battle;
pub mod conditions;
pub mod element;
pub mod moves;

pub use battle::{BattleStats, LevelUp};
pub use conditions::{StatusCondition, StatusTick};
pub use element::Element;
pub use moves::{Move, MoveSet, default_enemy_moves, default_player_moves};
