//! Movement, wall collision and interaction for the exploring actor.
//!
//! Per update, in order:
//!
//! 1. tick the shared interaction cooldown
//! 2. integrate `position += velocity * dt`
//! 3. push the actor out of every overlapping solid wall, one wall at a time
//!    in list order, along the axis of least penetration
//! 4. if the interact key is held, the cooldown has expired and no dialogue
//!    is already open, trigger the first interactable that is close enough
//!    and in front of the actor
//!
//! Walls are resolved sequentially rather than as a system; in tight corners a
//! later wall may push the actor back into an earlier one. Levels are built so
//! this does not matter in practice.

mod aabb;
mod actor;
mod obstacle;

pub use aabb::Aabb2;
pub use actor::{Actor, Facing};
pub use obstacle::Obstacle;

use glam::Vec2;

use crate::config::ColliderConfig;
use crate::dialogue::DialogueSystem;
use crate::input::{Key, KeyState};

/// An interactable that fired during an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    /// Index into the interactable list passed to [`Collider::set_level_objects`].
    pub index: usize,
    pub dialogue: Option<u32>,
}

/// What happened to the actor during one [`Collider::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub blocked_x: bool,
    pub blocked_y: bool,
    pub interaction: Option<Interaction>,
}

impl CollisionReport {
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_y
    }
}

/// Resolves one actor against the obstacles of the current level.
///
/// The obstacle slices are borrowed from the level and must be refreshed with
/// [`Collider::set_level_objects`] whenever the level changes.
#[derive(Clone, Debug)]
pub struct Collider<'a> {
    walls: &'a [Obstacle],
    interactables: &'a [Obstacle],
    cooldown: f32,
    hitbox_offset: Vec2,
    hitbox_size: Vec2,
    config: ColliderConfig,
}

impl<'a> Collider<'a> {
    pub fn new(config: ColliderConfig) -> Self {
        Self {
            walls: &[],
            interactables: &[],
            cooldown: 0.0,
            hitbox_offset: Vec2::ZERO,
            hitbox_size: Vec2::ZERO,
            config,
        }
    }

    pub fn set_level_objects(&mut self, walls: &'a [Obstacle], interactables: &'a [Obstacle]) {
        self.walls = walls;
        self.interactables = interactables;
        tracing::debug!(
            walls = walls.len(),
            interactables = interactables.len(),
            "collider level objects replaced"
        );
    }

    /// Use a hitbox smaller than the sprite, e.g. only the actor's feet.
    ///
    /// `offset` is relative to the actor's top-left corner. A zero `size`
    /// falls back to the actor's own size.
    pub fn set_bounding_box(&mut self, offset: Vec2, size: Vec2) {
        self.hitbox_offset = offset;
        self.hitbox_size = size;
    }

    /// Seconds until the next interaction is allowed.
    pub fn cooldown(&self) -> f32 {
        self.cooldown.max(0.0)
    }

    pub fn hitbox(&self, actor: &Actor) -> Aabb2 {
        let size = if self.hitbox_size == Vec2::ZERO {
            actor.size
        } else {
            self.hitbox_size
        };
        Aabb2::from_position_size(actor.position + self.hitbox_offset, size)
    }

    pub fn update(
        &mut self,
        actor: &mut Actor,
        keys: &impl KeyState,
        dialogue: &mut DialogueSystem,
        dt: f32,
    ) -> CollisionReport {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }

        let old_position = actor.position;
        actor.position += actor.velocity * dt;

        let mut report = self.resolve_walls(actor, old_position);
        report.interaction = self.interact(actor, keys, dialogue);
        report
    }

    fn resolve_walls(&self, actor: &mut Actor, old_position: Vec2) -> CollisionReport {
        let mut report = CollisionReport::default();
        let offset = self.hitbox_offset;

        for wall in self.walls.iter().filter(|w| w.solid) {
            let hitbox = self.hitbox(actor);
            let bounds = wall.bounds();
            if !hitbox.overlaps(&bounds) {
                continue;
            }

            let size = hitbox.size();
            let overlap = hitbox.overlap_extent(&bounds);
            if overlap.x < overlap.y {
                actor.position.x = if old_position.x + offset.x < wall.position.x {
                    wall.position.x - size.x - offset.x
                } else {
                    bounds.max.x - offset.x
                };
                actor.velocity.x = 0.0;
                report.blocked_x = true;
            } else {
                actor.position.y = if old_position.y + offset.y < wall.position.y {
                    wall.position.y - size.y - offset.y
                } else {
                    bounds.max.y - offset.y
                };
                actor.velocity.y = 0.0;
                report.blocked_y = true;
            }
        }
        report
    }

    fn interact(
        &mut self,
        actor: &Actor,
        keys: &impl KeyState,
        dialogue: &mut DialogueSystem,
    ) -> Option<Interaction> {
        if self.cooldown > 0.0 || !keys.is_down(Key::Interact) || dialogue.is_active() {
            return None;
        }

        let center = self.hitbox(actor).center();
        let facing = actor.facing.unit();
        let radius = self.config.interaction_radius;

        let (index, target) = self.interactables.iter().enumerate().find(|(_, obj)| {
            let to_target = obj.center() - center;
            to_target.length() <= radius
                && facing.dot(to_target.normalize_or_zero()) > self.config.facing_threshold
        })?;

        self.cooldown = self.config.interaction_cooldown;
        if let Some(Err(err)) = target.dialogue.map(|id| dialogue.start_dialogue(id)) {
            tracing::warn!(object = %target.name, %err, "interaction could not open dialogue");
        }
        tracing::debug!(object = %target.name, dialogue = ?target.dialogue, "interaction triggered");

        Some(Interaction {
            index,
            dialogue: target.dialogue,
        })
    }
}
