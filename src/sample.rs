//! Random sampling of points inside geometric volumes.
//!
//! Every sketch draws its randomness through a [`CloudRng`], so a whole
//! generation pass can be replayed exactly by seeding one value.

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Random source for cloud generation.
///
/// Wraps a small, fast PRNG and exposes the sampling patterns the sketches
/// need. Construct with [`CloudRng::seeded`] for reproducible output or
/// [`CloudRng::from_entropy`] for a different cloud on every run:
///
/// ```ignore
/// let mut rng = CloudRng::seeded(7);
/// let centers = rng.points_in_cone(100.0, 30.0, 9);
/// ```
pub struct CloudRng {
    rng: SmallRng,
}

impl CloudRng {
    /// Create a generator from an explicit seed. Identical seeds yield
    /// identical sample sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    // ========== Random primitives ==========

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random integer in `[min, max]`, inclusive on both ends.
    #[inline]
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// Random velocity with each component uniform in `[-speed/2, speed/2)`.
    pub fn random_velocity(&mut self, speed: f32) -> Vec3 {
        Vec3::new(
            -speed / 2.0 + self.random() * speed,
            -speed / 2.0 + self.random() * speed,
            -speed / 2.0 + self.random() * speed,
        )
    }

    // ========== Volume sampling ==========

    /// Random point inside an origin-centered cube, each coordinate uniform
    /// in `[-dim/2, dim/2]`.
    pub fn point_in_cube(&mut self, dim: f32) -> Vec3 {
        Vec3::new(
            (self.random() - 0.5) * dim,
            (self.random() - 0.5) * dim,
            (self.random() - 0.5) * dim,
        )
    }

    /// A batch of cube samples. The batch size itself is random, uniform in
    /// `[count_min, count_max]` inclusive.
    pub fn points_in_cube(&mut self, count_min: usize, count_max: usize, dim: f32) -> Vec<Vec3> {
        let count = self.random_int(count_min.min(count_max), count_max.max(count_min));
        (0..count).map(|_| self.point_in_cube(dim)).collect()
    }

    /// `n` points inside a cone whose tip sits at the origin and whose axis
    /// runs along +X.
    ///
    /// Height is sampled uniformly; the radial coordinate is weighted by
    /// `sqrt(u)` so density is uniform across each circular cross-section
    /// (not uniform along the axis).
    pub fn points_in_cone(&mut self, height: f32, radius: f32, n: usize) -> Vec<Vec3> {
        (0..n)
            .map(|_| {
                let h = self.random() * height;
                let r = (h / height) * radius * self.random().sqrt();
                let theta = self.random() * TAU;
                Vec3::new(h, r * theta.cos(), r * theta.sin())
            })
            .collect()
    }

    /// Random point within `max_radius` of `center`.
    ///
    /// Direction is uniform on the sphere; distance is uniform in
    /// `[0, max_radius)`, which biases density toward the center. That bias
    /// is part of the look and is kept on purpose.
    pub fn point_in_shell(&mut self, center: Vec3, max_radius: f32) -> Vec3 {
        let theta = self.random() * TAU;
        let phi = (2.0 * self.random() - 1.0).acos();
        let distance = self.random() * max_radius;
        center
            + Vec3::new(
                distance * phi.sin() * theta.cos(),
                distance * phi.sin() * theta.sin(),
                distance * phi.cos(),
            )
    }
}
