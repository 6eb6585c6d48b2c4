//! Combatants: monsters that fight in battles and stand around in the world.

use bitflags::bitflags;
use glam::Vec2;

use crate::stats::{BattleStats, Element, MoveSet, StatusCondition};

bitflags! {
    /// Outcome markers written on the player-side combatant for the game loop.
    ///
    /// The battle only ever sets bits; the owner of the roster clears them once
    /// it has reacted (reset the world, restore position, ...).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BattleFlags: u8 {
        const WON = 1 << 0;
        const LOST = 1 << 1;
        const FLED = 1 << 2;
        const BATTLE_END = 1 << 3;
    }
}

/// Which scene a combatant's sprite is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    World,
    Battle,
}

/// Where a combatant is drawn in each scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub world: Vec2,
    pub battle: Vec2,
    pub visibility: Visibility,
}

impl Placement {
    /// Position for the scene the combatant is currently shown in.
    pub fn current(&self) -> Vec2 {
        match self.visibility {
            Visibility::World => self.world,
            Visibility::Battle => self.battle,
        }
    }
}

/// An entity with stats, an element and moves that can take part in a battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub element: Element,
    pub level: u32,
    pub stats: BattleStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: StatusCondition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub moves: MoveSet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Placement,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flags: BattleFlags,
}

impl Combatant {
    pub fn new(name: impl Into<String>, element: Element, stats: BattleStats) -> Self {
        Self {
            name: name.into(),
            element,
            level: 1,
            stats,
            status: StatusCondition::None,
            moves: MoveSet::new(),
            placement: Placement::default(),
            flags: BattleFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    #[must_use]
    pub fn at(mut self, world: Vec2) -> Self {
        self.placement.world = world;
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    /// Clear battle leftovers: full health, no condition.
    pub fn restore(&mut self) {
        self.stats.heal_full();
        self.status = StatusCondition::None;
    }
}
