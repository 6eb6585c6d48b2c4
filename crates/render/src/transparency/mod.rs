//! Back-to-front ordering of transparent draw calls.
//!
//! Blending is order dependent, so transparent objects have to be drawn from
//! the farthest to the nearest. A plain distance sort gets partially
//! overlapping objects wrong; instead, for every pair of objects whose boxes
//! overlap, the farther one (along the view direction) gets an edge to the
//! nearer one, and the draw order is a topological sort of that graph.
//!
//! If the constraints contain a cycle, every object is sorted by squared
//! distance from the camera instead, farthest first.
//!
//! Sorting is O(n²) in the number of objects, so it is skipped unless the
//! object set changed or the camera moved more than
//! [`SortSettings::resort_distance`] since the last sort.

mod graph;
mod order;

pub use graph::{CycleDetected, DependencyGraph};
pub use order::{DepthOrder, View, ViewDepth};

use glam::{Mat4, Vec3};

use crate::drawable::{DrawContext, Drawable, MeshId};

/// World-space axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn around(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Inclusive: touching boxes count as overlapping.
    pub fn overlaps(&self, other: &Bounds3) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// One transparent draw request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransparentObject {
    pub position: Vec3,
    pub bounds: Bounds3,
    pub opacity: f32,
    pub mesh: MeshId,
    pub model: Mat4,
}

impl TransparentObject {
    pub fn new(position: Vec3, bounds: Bounds3, opacity: f32, mesh: MeshId) -> Self {
        Self {
            position,
            bounds,
            opacity,
            mesh,
            model: Mat4::from_translation(position),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = model;
        self
    }
}

impl Drawable for TransparentObject {
    fn model_matrix(&self) -> Mat4 {
        self.model
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.draw_mesh(self.mesh, self.model, self.opacity);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortSettings {
    /// Camera travel that invalidates the cached order.
    pub resort_distance: f32,
    /// Depth difference below which two objects are left unordered.
    pub depth_epsilon: f32,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            resort_distance: 0.1,
            depth_epsilon: 0.001,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TransparencyRenderer<O = ViewDepth> {
    objects: Vec<TransparentObject>,
    graph: DependencyGraph,
    render_order: Vec<usize>,
    last_camera: Vec3,
    needs_resort: bool,
    used_fallback: bool,
    settings: SortSettings,
    order: O,
}

impl TransparencyRenderer<ViewDepth> {
    pub fn new() -> Self {
        Self::with_settings(SortSettings::default())
    }

    pub fn with_settings(settings: SortSettings) -> Self {
        let order = ViewDepth {
            epsilon: settings.depth_epsilon,
        };
        Self::with_order(settings, order)
    }
}

impl Default for TransparencyRenderer<ViewDepth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: DepthOrder> TransparencyRenderer<O> {
    /// Use a custom pairwise ordering instead of view depth.
    pub fn with_order(settings: SortSettings, order: O) -> Self {
        Self {
            objects: Vec::new(),
            graph: DependencyGraph::default(),
            render_order: Vec::new(),
            last_camera: Vec3::ZERO,
            needs_resort: true,
            used_fallback: false,
            settings,
            order,
        }
    }

    /// Register an object for this frame. Returns its index.
    pub fn add_object(&mut self, object: TransparentObject) -> usize {
        self.objects.push(object);
        self.needs_resort = true;
        self.objects.len() - 1
    }

    pub fn clear_objects(&mut self) {
        self.objects.clear();
        self.render_order.clear();
        self.needs_resort = true;
    }

    pub fn object(&self, index: usize) -> Option<&TransparentObject> {
        self.objects.get(index)
    }

    pub fn objects(&self) -> &[TransparentObject] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Indices into the object list, farthest first.
    ///
    /// Reflects the object set as of the last [`TransparencyRenderer::update`].
    pub fn render_order(&self) -> &[usize] {
        &self.render_order
    }

    /// Whether the last sort hit a cycle and fell back to distance order.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Re-sort if the objects changed or the camera moved far enough.
    /// Returns whether a sort happened.
    pub fn update(&mut self, camera_position: Vec3, camera_direction: Vec3) -> bool {
        let moved = camera_position.distance(self.last_camera) > self.settings.resort_distance;
        if !self.needs_resort && !moved {
            return false;
        }

        let view = View::new(camera_position, camera_direction);
        self.build_dependency_graph(&view);
        match self.graph.topological_order() {
            Ok(order) => {
                self.render_order = order;
                self.used_fallback = false;
            }
            Err(cycle) => {
                tracing::warn!(%cycle, objects = self.objects.len(), "falling back to distance sort");
                self.render_order = self.distance_order(camera_position);
                self.used_fallback = true;
            }
        }

        self.last_camera = camera_position;
        self.needs_resort = false;
        tracing::trace!(
            objects = self.objects.len(),
            edges = self.graph.edge_count(),
            "transparent objects sorted"
        );
        true
    }

    /// Replay every object in render order.
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        for object in self.render_order.iter().filter_map(|&i| self.objects.get(i)) {
            object.draw(ctx);
        }
    }

    fn build_dependency_graph(&mut self, view: &View) {
        self.graph.reset(self.objects.len());

        for (i, a) in self.objects.iter().enumerate() {
            for (j, b) in self.objects.iter().enumerate().skip(i + 1) {
                if !a.bounds.overlaps(&b.bounds) {
                    continue;
                }
                match self.order.compare(a, b, view) {
                    std::cmp::Ordering::Greater => {
                        self.graph.add_edge(i, j);
                    }
                    std::cmp::Ordering::Less => {
                        self.graph.add_edge(j, i);
                    }
                    std::cmp::Ordering::Equal => {}
                }
            }
        }
    }

    /// Farthest first by squared distance; ties keep insertion order.
    fn distance_order(&self, camera_position: Vec3) -> Vec<usize> {
        let mut keyed: Vec<(f32, usize)> = self
            .objects
            .iter()
            .enumerate()
            .map(|(i, obj)| (obj.position.distance_squared(camera_position), i))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, i)| i).collect()
    }
}
