//! A playable area: walls, interactables, spawn point and wild encounters.

use glam::Vec2;

use crate::collider::{Collider, Obstacle};
use crate::config::ColliderConfig;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub name: String,
    /// Where the player appears on entry and after losing a battle.
    pub spawn: Vec2,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Obstacle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interactables: Vec<Obstacle>,
    /// Encounter probability per second of walking, 0 disables encounters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub encounter_rate: f32,
    /// Names of roster combatants that can appear here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wild: Vec<String>,
}

impl Level {
    pub fn new(name: impl Into<String>, spawn: Vec2) -> Self {
        Self {
            name: name.into(),
            spawn,
            walls: Vec::new(),
            interactables: Vec::new(),
            encounter_rate: 0.0,
            wild: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_wall(mut self, wall: Obstacle) -> Self {
        self.walls.push(wall);
        self
    }

    #[must_use]
    pub fn with_interactable(mut self, object: Obstacle) -> Self {
        self.interactables.push(object);
        self
    }

    #[must_use]
    pub fn with_encounters(mut self, rate: f32, wild: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.encounter_rate = rate;
        self.wild = wild.into_iter().map(Into::into).collect();
        self
    }

    /// A collider loaded with this level's obstacles.
    pub fn collider(&self, config: ColliderConfig) -> Collider<'_> {
        let mut collider = Collider::new(config);
        collider.set_level_objects(&self.walls, &self.interactables);
        collider
    }
}
