//! Capability interface for anything that can be drawn.
//!
//! A [`Drawable`] knows its model matrix and how to issue its own draw calls
//! against a [`DrawContext`]. The context is the only place that talks to a
//! graphics API; [`CommandRecorder`] is a context that just records calls,
//! used headless and in tests.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Receives draw calls. Implemented by the backend.
pub trait DrawContext {
    fn draw_sprite(&mut self, texture: TextureId, model: Mat4, color: Vec4);

    fn draw_mesh(&mut self, mesh: MeshId, model: Mat4, opacity: f32);
}

pub trait Drawable {
    fn model_matrix(&self) -> Mat4;

    fn draw(&self, ctx: &mut dyn DrawContext);
}

/// Screen-space textured quad. Position is the top-left corner; rotation is
/// in degrees around the quad's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDrawable {
    pub texture: TextureId,
    pub position: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub color: Vec4,
}

impl SpriteDrawable {
    pub fn new(texture: TextureId, position: Vec2, size: Vec2) -> Self {
        Self {
            texture,
            position,
            size,
            rotation: 0.0,
            color: Vec4::ONE,
        }
    }
}

impl Drawable for SpriteDrawable {
    fn model_matrix(&self) -> Mat4 {
        let half = (self.size * 0.5).extend(0.0);
        Mat4::from_translation(self.position.extend(0.0))
            * Mat4::from_translation(half)
            * Mat4::from_rotation_z(self.rotation.to_radians())
            * Mat4::from_translation(-half)
            * Mat4::from_scale(self.size.extend(1.0))
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_sprite(self.texture, self.model_matrix(), self.color);
    }
}

/// A mesh placed in the 3D scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshDrawable {
    pub mesh: MeshId,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub opacity: f32,
}

impl MeshDrawable {
    pub fn new(mesh: MeshId, translation: Vec3) -> Self {
        Self {
            mesh,
            translation,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            opacity: 1.0,
        }
    }
}

impl Drawable for MeshDrawable {
    fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_mesh(self.mesh, self.model_matrix(), self.opacity);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Sprite {
        texture: TextureId,
        model: Mat4,
        color: Vec4,
    },
    Mesh {
        mesh: MeshId,
        model: Mat4,
        opacity: f32,
    },
}

/// A [`DrawContext`] that keeps every call in order.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Meshes in the order they were drawn.
    pub fn mesh_sequence(&self) -> Vec<MeshId> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Mesh { mesh, .. } => Some(*mesh),
                DrawCommand::Sprite { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawContext for CommandRecorder {
    fn draw_sprite(&mut self, texture: TextureId, model: Mat4, color: Vec4) {
        self.commands.push(DrawCommand::Sprite {
            texture,
            model,
            color,
        });
    }

    fn draw_mesh(&mut self, mesh: MeshId, model: Mat4, opacity: f32) {
        self.commands.push(DrawCommand::Mesh {
            mesh,
            model,
            opacity,
        });
    }
}
