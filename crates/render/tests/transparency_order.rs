use std::cmp::Ordering;

use glam::Vec3;
use tilequest_render::{
    Bounds3, CommandRecorder, MeshId, SortSettings, TransparencyRenderer, TransparentObject, View,
};

const CAMERA: Vec3 = Vec3::new(0.0, 0.0, 10.0);
const FORWARD: Vec3 = Vec3::NEG_Z;

fn pane(center: Vec3, mesh: u32) -> TransparentObject {
    TransparentObject::new(center, Bounds3::around(center, Vec3::new(1.0, 1.0, 0.3)), 0.5, MeshId(mesh))
}

fn position(order: &[usize], index: usize) -> usize {
    order.iter().position(|&i| i == index).unwrap()
}

fn assert_permutation(order: &[usize], count: usize) {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..count).collect::<Vec<_>>());
}

#[test]
fn farther_overlapping_object_is_drawn_first() {
    let mut renderer = TransparencyRenderer::new();
    let near = renderer.add_object(pane(Vec3::new(0.0, 0.0, 0.0), 0));
    let far = renderer.add_object(pane(Vec3::new(0.5, 0.0, -0.4), 1));

    renderer.update(CAMERA, FORWARD);
    let order = renderer.render_order();
    assert!(position(order, far) < position(order, near));
    assert!(!renderer.used_fallback());
}

#[test]
fn overlapping_chain_is_sorted_back_to_front() {
    let mut renderer = TransparencyRenderer::new();
    let insertion = [3, 7, 0, 5, 1, 6, 2, 4];
    for &step in &insertion {
        renderer.add_object(pane(Vec3::new(0.1 * step as f32, 0.0, -0.5 * step as f32), step));
    }

    renderer.update(CAMERA, FORWARD);
    let order = renderer.render_order();
    assert_permutation(order, insertion.len());

    let meshes: Vec<u32> = order
        .iter()
        .map(|&i| renderer.object(i).unwrap().mesh.0)
        .collect();
    assert_eq!(meshes, vec![7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn separate_objects_keep_insertion_order() {
    let mut renderer = TransparencyRenderer::new();
    for i in 0..4 {
        renderer.add_object(pane(Vec3::new(5.0 * i as f32, 0.0, -(i as f32)), i));
    }
    renderer.update(CAMERA, FORWARD);
    assert_eq!(renderer.render_order(), &[0, 1, 2, 3]);
}

#[test]
fn cyclic_constraints_fall_back_to_distance() {
    // a before b whenever b's mesh follows a's in the cycle 0 -> 1 -> 2 -> 0.
    let cyclic = |a: &TransparentObject, b: &TransparentObject, _: &View| {
        let (x, y) = (a.mesh.0, b.mesh.0);
        if (x + 1) % 3 == y {
            Ordering::Greater
        } else if (y + 1) % 3 == x {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    };
    let mut renderer = TransparencyRenderer::with_order(SortSettings::default(), cyclic);
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -1.0), 0));
    renderer.add_object(pane(Vec3::new(0.2, 0.0, -1.2), 1));
    renderer.add_object(pane(Vec3::new(0.1, 0.1, -0.8), 2));

    renderer.update(CAMERA, FORWARD);
    assert!(renderer.used_fallback());
    assert_permutation(renderer.render_order(), 3);
    // Farthest from the camera first.
    assert_eq!(renderer.render_order(), &[1, 0, 2]);
}

#[test]
fn fallback_uses_the_current_camera() {
    let cyclic = |a: &TransparentObject, b: &TransparentObject, _: &View| {
        if (a.mesh.0 + 1) % 3 == b.mesh.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    };
    let mut renderer = TransparencyRenderer::with_order(SortSettings::default(), cyclic);
    renderer.add_object(pane(Vec3::new(0.0, 0.0, 0.0), 0));
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -0.2), 1));
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -0.4), 2));

    renderer.update(CAMERA, FORWARD);
    assert!(renderer.used_fallback());
    assert_eq!(renderer.render_order(), &[2, 1, 0]);

    renderer.update(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
    assert!(renderer.used_fallback());
    assert_eq!(renderer.render_order(), &[0, 1, 2]);
}

#[test]
fn draw_replays_in_render_order() {
    let mut renderer = TransparencyRenderer::new();
    renderer.add_object(pane(Vec3::new(0.0, 0.0, 0.0), 10));
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -0.5), 11));
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -1.0), 12));
    renderer.update(CAMERA, FORWARD);

    let mut recorder = CommandRecorder::new();
    renderer.draw(&mut recorder);
    assert_eq!(recorder.mesh_sequence(), vec![MeshId(12), MeshId(11), MeshId(10)]);
}

#[test]
fn turning_around_reverses_the_order() {
    let mut renderer = TransparencyRenderer::new();
    renderer.add_object(pane(Vec3::new(0.0, 0.0, 0.0), 0));
    renderer.add_object(pane(Vec3::new(0.0, 0.0, -0.5), 1));

    renderer.update(CAMERA, FORWARD);
    assert_eq!(renderer.render_order(), &[1, 0]);

    renderer.update(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
    assert_eq!(renderer.render_order(), &[0, 1]);
}
