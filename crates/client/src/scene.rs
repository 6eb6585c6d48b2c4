//! Headless rendering of a session into recorded draw calls.
//!
//! Level objects that can be seen through (non-solid walls such as tall
//! grass, and interactables) become transparent quads. Grass is drawn as a
//! ground layer plus a canopy layer whose boxes overlap, so the renderer has
//! real ordering constraints to solve as the camera follows the actor.

use glam::{Vec2, Vec3, Vec4};
use tilequest_core::{GameSession, Level, Mode};
use tilequest_render::{
    Bounds3, CommandRecorder, Drawable, MeshId, SpriteDrawable, TextureId, TransparencyRenderer,
    TransparentObject,
};

const PLAYER_TEXTURE: TextureId = TextureId(0);
const ENEMY_TEXTURE: TextureId = TextureId(1);

/// Camera offset from the actor, looking down at it.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 120.0, 400.0);

/// What one rendered frame cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: usize,
    pub resorted: bool,
    pub fallback: bool,
}

pub struct Scene {
    transparency: TransparencyRenderer,
    recorder: CommandRecorder,
}

impl Scene {
    pub fn from_level(level: &Level) -> Self {
        let mut transparency = TransparencyRenderer::new();
        let mut mesh = 0;
        let mut next_mesh = || {
            mesh += 1;
            MeshId(mesh)
        };

        for grass in level.walls.iter().filter(|w| !w.solid) {
            let center = grass.center();
            let half = (grass.size * 0.5).extend(0.6);
            for (layer, opacity) in [(0.0, 0.8), (1.0, 0.4)] {
                let position = center.extend(layer);
                transparency.add_object(TransparentObject::new(
                    position,
                    Bounds3::around(position, half),
                    opacity,
                    next_mesh(),
                ));
            }
        }
        for object in &level.interactables {
            let position = object.center().extend(0.5);
            transparency.add_object(TransparentObject::new(
                position,
                Bounds3::around(position, (object.size * 0.5).extend(0.5)),
                0.9,
                next_mesh(),
            ));
        }

        tracing::debug!(
            level = %level.name,
            transparent = transparency.object_count(),
            "scene built"
        );
        Self {
            transparency,
            recorder: CommandRecorder::new(),
        }
    }

    pub fn transparency(&self) -> &TransparencyRenderer {
        &self.transparency
    }

    /// Draw calls of the last rendered frame.
    pub fn recorder(&self) -> &CommandRecorder {
        &self.recorder
    }

    /// Record one frame: sprites for the current mode, then (while
    /// exploring) transparent objects back to front.
    pub fn render(&mut self, session: &GameSession<'_>) -> FrameStats {
        self.recorder.clear();
        let mut stats = FrameStats::default();

        match session.mode() {
            Mode::Exploration => {
                let actor = session.actor();
                SpriteDrawable::new(PLAYER_TEXTURE, actor.position, actor.size)
                    .draw(&mut self.recorder);

                let focus = actor.center().extend(0.0);
                let camera = focus + CAMERA_OFFSET;
                stats.resorted = self.transparency.update(camera, focus - camera);
                stats.fallback = self.transparency.used_fallback();
                self.transparency.draw(&mut self.recorder);
            }
            Mode::Battle => {
                let battle = session.battle();
                let fighters = [
                    (Some(session.player()), PLAYER_TEXTURE),
                    (battle.and_then(|b| b.enemy()), ENEMY_TEXTURE),
                ];
                for (id, texture) in fighters {
                    if let Some(combatant) = id.and_then(|id| session.roster().get(id)) {
                        let mut sprite = SpriteDrawable::new(
                            texture,
                            combatant.placement.current(),
                            Vec2::splat(96.0),
                        );
                        sprite.color = health_tint(combatant.stats.health_ratio());
                        sprite.draw(&mut self.recorder);
                    }
                }
            }
        }

        stats.draw_calls = self.recorder.len();
        stats
    }
}

/// Fade toward red as health drops.
fn health_tint(ratio: f32) -> Vec4 {
    let ratio = ratio.clamp(0.0, 1.0);
    Vec4::new(1.0, ratio, ratio, 1.0)
}
