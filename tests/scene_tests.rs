// Host-side tests for the hero scene: camera, motion, meshes and dust.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use camera::*;
use constants::*;
use geometry::*;
use glam::{Vec2, Vec3};
use particles::*;
use scene::*;

#[test]
fn camera_sits_on_z_axis() {
    let cam = Camera::new(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert_eq!(cam.target, Vec3::ZERO);
    // origin projects to the center of clip space
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn viewport_matches_fov() {
    let mut cam = Camera::new(1.0);
    cam.set_aspect(1600, 800);
    let vp = cam.viewport_at_target();
    let expected_h = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_Z;
    assert!((vp.y - expected_h).abs() < 1e-4);
    assert!((vp.x - expected_h * 2.0).abs() < 1e-4);
}

#[test]
fn set_aspect_survives_zero_height() {
    let mut cam = Camera::new(1.0);
    cam.set_aspect(800, 0);
    assert!(cam.aspect.is_finite());
}

#[test]
fn core_rotation_rates() {
    let r = CoreRotation::at(10.0);
    assert!((r.inner.x - 1.2).abs() < 1e-5);
    assert!((r.inner.y - 1.8).abs() < 1e-5);
    assert_eq!(r.inner.z, 0.0);
    assert_eq!(r.outer.x, 0.0);
    assert!((r.outer.y + 1.0).abs() < 1e-5);
    assert!((r.outer.z + 0.6).abs() < 1e-5);
    assert_eq!(CoreRotation::at(0.0).inner, Vec3::ZERO);
}

#[test]
fn float_motion_is_bounded() {
    for i in 0..200 {
        let m = FloatMotion::at(i as f32 * 0.37);
        assert!(m.offset_y.abs() <= FLOAT_INTENSITY / 10.0 + 1e-6);
        assert!(m.rotation.x.abs() <= FLOAT_ROTATION_INTENSITY / 8.0 + 1e-6);
    }
}

#[test]
fn pointer_target_scales_with_viewport() {
    let vp = Vec2::new(12.0, 6.0);
    let (pos, rot) = pointer_target(Vec2::new(1.0, 1.0), vp);
    assert!((pos.x - 1.0).abs() < 1e-6);
    assert!((pos.y - 0.5).abs() < 1e-6);
    assert!((rot.x + PARALLAX_TILT).abs() < 1e-6);
    assert!((rot.y - PARALLAX_TILT).abs() < 1e-6);
}

#[test]
fn group_converges_without_overshoot() {
    let vp = Vec2::new(12.0, 6.0);
    let pointer = Vec2::new(1.0, -1.0);
    let (target, _) = pointer_target(pointer, vp);
    let mut g = SceneGroup::default();
    let mut prev_err = f32::MAX;
    for _ in 0..400 {
        g.step(pointer, vp);
        let err = (g.position - target).length();
        assert!(err <= prev_err);
        assert!(g.position.x <= target.x + 1e-6);
        assert!(g.position.y >= target.y - 1e-6);
        prev_err = err;
    }
    assert!(prev_err < 1e-3);
}

#[test]
fn single_step_moves_by_lerp_factor() {
    let vp = Vec2::new(12.0, 12.0);
    let mut g = SceneGroup::default();
    g.step(Vec2::new(1.0, 0.0), vp);
    assert!((g.position.x - POSITION_LERP).abs() < 1e-6);
    assert!((g.rotation.y - PARALLAX_TILT * ROTATION_LERP).abs() < 1e-6);
}

#[test]
fn resting_group_is_identity() {
    let g = SceneGroup::default();
    assert!(g.matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn icosahedron_triangle_counts() {
    assert_eq!(triangle_count(0), 20);
    assert_eq!(triangle_count(1), 80);
    assert_eq!(icosahedron(INNER_RADIUS, INNER_DETAIL).len(), 60);
    assert_eq!(icosahedron(OUTER_RADIUS, OUTER_DETAIL).len(), 240);
}

#[test]
fn icosahedron_vertices_on_sphere() {
    for (radius, detail) in [(INNER_RADIUS, 0), (OUTER_RADIUS, 1), (1.0, 2)] {
        for v in icosahedron(radius, detail) {
            let len = Vec3::from(v.position).length();
            assert!((len - radius).abs() < 1e-4, "{len} vs {radius}");
        }
    }
}

#[test]
fn icosahedron_faces_point_outward() {
    let verts = icosahedron(OUTER_RADIUS, OUTER_DETAIL);
    for tri in verts.chunks_exact(3) {
        let p: Vec<Vec3> = tri.iter().map(|v| Vec3::from(v.position)).collect();
        let centroid = (p[0] + p[1] + p[2]) / 3.0;
        let n = Vec3::from(tri[0].normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.dot(centroid) > 0.0);
        // winding agrees with the stored normal
        let wound = (p[1] - p[0]).cross(p[2] - p[0]);
        assert!(wound.dot(n) > 0.0);
    }
}

#[test]
fn dust_count_and_bounds() {
    let field = DustField::seeded(7);
    assert_eq!(field.len(), DUST_COUNT);
    let half = DUST_EXTENT / 2.0;
    for p in field.particles() {
        assert!(p.position.abs().max_element() <= half);
        assert!(p.scale >= 0.0 && p.scale < DUST_MAX_SCALE);
    }
}

#[test]
fn dust_seed_is_deterministic() {
    let a = DustField::seeded(42);
    let b = DustField::seeded(42);
    let c = DustField::seeded(43);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn dust_spreads_through_volume() {
    let field = DustField::seeded(1);
    let mean = field
        .particles()
        .iter()
        .fold(Vec3::ZERO, |acc, p| acc + p.position)
        / field.len() as f32;
    assert!(mean.length() < 2.0);
    let spread = field
        .particles()
        .iter()
        .map(|p| p.position.x)
        .fold(f32::MIN, f32::max);
    assert!(spread > DUST_EXTENT * 0.4);
}
