use std::cmp::Ordering;

use glam::Vec3;

use super::TransparentObject;

/// Camera pose used for one sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub position: Vec3,
    /// Unit view direction. A zero vector makes every depth zero.
    pub forward: Vec3,
}

impl View {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            forward: direction.normalize_or_zero(),
        }
    }

    /// Distance along the view direction.
    pub fn depth(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.forward)
    }
}

/// Decides which of two overlapping objects must be drawn first.
pub trait DepthOrder {
    /// `Greater` when `a` is farther than `b` (so `a` is drawn first),
    /// `Less` for the opposite, `Equal` when no constraint is needed.
    fn compare(&self, a: &TransparentObject, b: &TransparentObject, view: &View) -> Ordering;
}

/// Compares object positions along the view direction, treating depths
/// within `epsilon` of each other as unordered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewDepth {
    pub epsilon: f32,
}

impl Default for ViewDepth {
    fn default() -> Self {
        Self { epsilon: 0.001 }
    }
}

impl DepthOrder for ViewDepth {
    fn compare(&self, a: &TransparentObject, b: &TransparentObject, view: &View) -> Ordering {
        let depth_a = view.depth(a.position);
        let depth_b = view.depth(b.position);
        if depth_a > depth_b + self.epsilon {
            Ordering::Greater
        } else if depth_b > depth_a + self.epsilon {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl<F> DepthOrder for F
where
    F: Fn(&TransparentObject, &TransparentObject, &View) -> Ordering,
{
    fn compare(&self, a: &TransparentObject, b: &TransparentObject, view: &View) -> Ordering {
        self(a, b, view)
    }
}
