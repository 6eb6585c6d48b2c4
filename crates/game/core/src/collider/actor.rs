//! The moving body the collider resolves: usually the player in the world.

use glam::Vec2;

use crate::input::{Key, KeyState};

use super::aabb::Aabb2;

/// Cardinal facing. Screen space, so `Up` is negative y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub const fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    const fn key(self) -> Key {
        match self {
            Facing::Up => Key::Up,
            Facing::Down => Key::Down,
            Facing::Left => Key::Left,
            Facing::Right => Key::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    /// Top-left corner.
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// World units per second while a direction key is held.
    pub speed: f32,
}

impl Actor {
    pub const DEFAULT_SPEED: f32 = 225.0;

    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            speed: Self::DEFAULT_SPEED,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_position_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Turn and move toward the first held direction key (up, down, left,
    /// right). Returns whether the actor is moving.
    pub fn steer(&mut self, keys: &impl KeyState) -> bool {
        const ORDER: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

        match ORDER.into_iter().find(|f| keys.is_down(f.key())) {
            Some(facing) => {
                self.facing = facing;
                self.velocity = facing.unit() * self.speed;
                true
            }
            None => {
                self.stop();
                false
            }
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeldKeys;

    #[test]
    fn steer_follows_key_priority() {
        let mut actor = Actor::new(Vec2::ZERO, Vec2::splat(16.0));
        assert!(actor.steer(&(HeldKeys::LEFT | HeldKeys::DOWN)));
        assert_eq!(actor.facing, Facing::Down);
        assert_eq!(actor.velocity, Vec2::new(0.0, 225.0));

        assert!(!actor.steer(&HeldKeys::INTERACT));
        assert_eq!(actor.velocity, Vec2::ZERO);
        // Facing is kept when stopping.
        assert_eq!(actor.facing, Facing::Down);
    }
}
