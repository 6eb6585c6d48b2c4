//! Frame-driven game rules shared by every tilequest front end.
//!
//! `tilequest-core` owns the rules (battle, movement, dialogue) and performs
//! no I/O. Randomness is injected through [`RngOracle`] so a seeded run
//! replays exactly. Combatants live in a [`Roster`]; systems that act on them
//! hold [`CombatantId`] handles.
pub mod battle;
pub mod collider;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod input;
pub mod level;
pub mod rng;
pub mod roster;
pub mod session;
pub mod stats;

pub use battle::{Battle, BattleError, BattleLog, BattleOutcome, BattleState};
pub use collider::{Aabb2, Actor, Collider, CollisionReport, Facing, Interaction, Obstacle};
pub use combat::{AttackOutcome, AttackResult};
pub use combatant::{BattleFlags, Combatant, Placement, Visibility};
pub use config::{BattleConfig, ColliderConfig, DialogueConfig, EncounterConfig, GameConfig};
pub use dialogue::{DialogueChoice, DialogueError, DialogueNode, DialogueSystem, DialogueTree};
pub use error::{ErrorSeverity, GameError};
pub use input::{HeldKeys, Key, KeyState};
pub use level::Level;
pub use rng::{PcgRng, RngOracle};
pub use roster::{CombatantId, Roster, RosterError};
pub use session::{FrameReport, GameSession, Mode};
pub use stats::{BattleStats, Element, LevelUp, Move, MoveSet, StatusCondition};
