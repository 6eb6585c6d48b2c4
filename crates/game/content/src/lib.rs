//! Data-driven content definitions and loaders.
//!
//! This crate reads the RON/TOML files under a data directory and turns them
//! into `tilequest-core` values:
//! - Game configuration (TOML)
//! - Move catalog (RON)
//! - Combatant templates, resolved against the move catalog into a roster (RON)
//! - Dialogue trees (RON)
//! - Levels: walls, interactables, spawn and wild encounters (RON)
//!
//! Content is validated on load; a bad file fails loudly instead of
//! producing a half-built world.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CombatantLoader, CombatantTemplate, ConfigLoader, ContentFactory, DialogueLoader, GameContent,
    LevelLoader, LoadResult, MoveLoader, StatBlock,
};
