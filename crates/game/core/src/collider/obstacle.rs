use glam::Vec2;

use super::aabb::Aabb2;

/// A static level object: a wall that blocks movement, or an interactable
/// (sign, NPC, chest) that opens a dialogue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Top-left corner.
    pub position: Vec2,
    pub size: Vec2,
    /// Non-solid walls are skipped by collision resolution.
    #[cfg_attr(feature = "serde", serde(default = "solid_by_default"))]
    pub solid: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dialogue: Option<u32>,
}

#[cfg(feature = "serde")]
fn solid_by_default() -> bool {
    true
}

impl Obstacle {
    pub fn wall(position: Vec2, size: Vec2) -> Self {
        Self {
            name: String::new(),
            position,
            size,
            solid: true,
            dialogue: None,
        }
    }

    pub fn interactable(name: impl Into<String>, position: Vec2, size: Vec2, dialogue: Option<u32>) -> Self {
        Self {
            name: name.into(),
            position,
            size,
            solid: false,
            dialogue,
        }
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_position_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}
