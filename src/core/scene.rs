// Per-frame transforms for the hero scene.
//
// Everything here is a function of elapsed time and pointer position. The
// only carried state is the group's smoothed transform, which lerps toward
// a pointer-derived target each frame.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Independent spins of the inner core and its outer shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoreRotation {
    pub inner: Vec3,
    pub outer: Vec3,
}

impl CoreRotation {
    pub fn at(elapsed_sec: f32) -> Self {
        Self {
            inner: Vec3::new(elapsed_sec * INNER_SPIN_X, elapsed_sec * INNER_SPIN_Y, 0.0),
            outer: Vec3::new(0.0, elapsed_sec * OUTER_SPIN_Y, elapsed_sec * OUTER_SPIN_Z),
        }
    }
}

/// Gentle bob and sway applied around both polyhedra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub rotation: Vec3,
    pub offset_y: f32,
}

impl FloatMotion {
    pub fn at(elapsed_sec: f32) -> Self {
        let phase = elapsed_sec / 4.0 * FLOAT_SPEED;
        let (s, c) = phase.sin_cos();
        Self {
            rotation: Vec3::new(
                c / 8.0 * FLOAT_ROTATION_INTENSITY,
                s / 8.0 * FLOAT_ROTATION_INTENSITY,
                s / 20.0 * FLOAT_ROTATION_INTENSITY,
            ),
            offset_y: s / 10.0 * FLOAT_INTENSITY,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(euler_xyz(self.rotation), Vec3::new(0.0, self.offset_y, 0.0))
    }
}

/// Where the group should sit for a pointer at `pointer_ndc` given the
/// world-space viewport size. Returns `(position_xy, rotation_xy)`.
pub fn pointer_target(pointer_ndc: Vec2, viewport: Vec2) -> (Vec2, Vec2) {
    let position = Vec2::new(
        pointer_ndc.x * (viewport.x / PARALLAX_DIVISOR),
        pointer_ndc.y * (viewport.y / PARALLAX_DIVISOR),
    );
    // rotation.x tilts against vertical pointer motion
    let rotation = Vec2::new(-pointer_ndc.y * PARALLAX_TILT, pointer_ndc.x * PARALLAX_TILT);
    (position, rotation)
}

/// Smoothed transform of the whole scene group (core and dust).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneGroup {
    pub position: Vec2,
    pub rotation: Vec2,
}

impl SceneGroup {
    /// One first-order low-pass step toward the pointer target.
    pub fn step(&mut self, pointer_ndc: Vec2, viewport: Vec2) {
        let (target_pos, target_rot) = pointer_target(pointer_ndc, viewport);
        self.position.x = lerp(self.position.x, target_pos.x, POSITION_LERP);
        self.position.y = lerp(self.position.y, target_pos.y, POSITION_LERP);
        self.rotation.x = lerp(self.rotation.x, target_rot.x, ROTATION_LERP);
        self.rotation.y = lerp(self.rotation.y, target_rot.y, ROTATION_LERP);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            euler_xyz(Vec3::new(self.rotation.x, self.rotation.y, 0.0)),
            Vec3::new(self.position.x, self.position.y, 0.0),
        )
    }
}

#[inline]
pub fn euler_xyz(r: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

/// World matrices for the two core meshes at a given moment.
#[derive(Clone, Copy, Debug)]
pub struct CoreTransforms {
    pub inner: Mat4,
    pub outer: Mat4,
}

pub fn core_transforms(group: &SceneGroup, elapsed_sec: f32) -> CoreTransforms {
    let spins = CoreRotation::at(elapsed_sec);
    let base = group.matrix() * FloatMotion::at(elapsed_sec).matrix();
    CoreTransforms {
        inner: base * Mat4::from_quat(euler_xyz(spins.inner)),
        outer: base * Mat4::from_quat(euler_xyz(spins.outer)),
    }
}
