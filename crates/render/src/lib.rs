//! Rendering-side logic for tilequest that does not need a GPU.
//!
//! - [`transparency`]: back-to-front ordering of transparent draw calls
//! - [`drawable`]: the `Drawable` / `DrawContext` capability interface
pub mod drawable;
pub mod transparency;

pub use drawable::{
    CommandRecorder, DrawCommand, DrawContext, Drawable, MeshDrawable, MeshId, SpriteDrawable,
    TextureId,
};
pub use transparency::{
    Bounds3, CycleDetected, DependencyGraph, DepthOrder, SortSettings, TransparencyRenderer,
    TransparentObject, View, ViewDepth,
};
