use crate::constants::{DUST_COUNT, DUST_EXTENT, DUST_MAX_SCALE};
use glam::{Mat4, Vec3};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParticle {
    pub position: Vec3,
    pub scale: f32,
}

impl DustParticle {
    /// Model matrix relative to the scene group.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            glam::Quat::IDENTITY,
            self.position,
        )
    }
}

/// Static decoration: generated once at mount, never updated.
#[derive(Clone, Debug)]
pub struct DustField {
    particles: Vec<DustParticle>,
}

impl DustField {
    pub fn random() -> Self {
        Self::generate(&mut thread_rng(), DUST_COUNT)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed), DUST_COUNT)
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let half = DUST_EXTENT * 0.5;
        let particles = (0..count)
            .map(|_| DustParticle {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                    (rng.gen::<f32>() - 0.5) * DUST_EXTENT,
                )
                .clamp(Vec3::splat(-half), Vec3::splat(half)),
                scale: rng.gen::<f32>() * DUST_MAX_SCALE,
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[DustParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
