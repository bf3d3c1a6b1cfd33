//! Particle clusters and their ordering.
//!
//! A [`Cluster`] is a localized group of particles sharing a center and a
//! containment radius. Clusters are regenerated wholesale whenever the
//! configuration that produced them changes; nothing patches one in place.

use crate::sample::CloudRng;
use crate::Vec3;

/// A single moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub location: Vec3,
    pub velocity: Vec3,
}

/// A group of particles around a shared center.
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Nominal center at generation time.
    pub center: Vec3,
    /// Containment radius (sphere) or half-extent source (box, via `dim`).
    pub radius: f32,
    pub particles: Vec<Particle>,
}

impl Cluster {
    /// Generate a cluster of `[min_pts, max_pts]` particles scattered in a
    /// sphere around `center`, each with a random starting velocity.
    pub fn generate(
        rng: &mut CloudRng,
        center: Vec3,
        radius: f32,
        min_pts: usize,
        max_pts: usize,
        speed: f32,
    ) -> Self {
        let count = rng.random_int(min_pts.min(max_pts), max_pts.max(min_pts));
        let particles = (0..count)
            .map(|_| Particle {
                location: rng.point_in_shell(center, radius),
                velocity: rng.random_velocity(speed),
            })
            .collect();
        Self {
            center,
            radius,
            particles,
        }
    }

    /// Generate a box-contained cluster: `[min_pts, max_pts]` particles
    /// uniform in a `dim`-sized cube around `center`.
    pub fn generate_boxed(
        rng: &mut CloudRng,
        center: Vec3,
        dim: f32,
        min_pts: usize,
        max_pts: usize,
        speed: f32,
    ) -> Self {
        let particles = rng
            .points_in_cube(min_pts, max_pts, dim)
            .into_iter()
            .map(|offset| Particle {
                location: center + offset,
                velocity: rng.random_velocity(speed),
            })
            .collect();
        Self {
            center,
            radius: dim / 2.0,
            particles,
        }
    }

    /// Mean of the current particle locations. Zero for an empty cluster.
    pub fn centroid(&self) -> Vec3 {
        if self.particles.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.particles.iter().map(|p| p.location).sum();
        sum / self.particles.len() as f32
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Permutation of cluster indices sorted by ascending squared distance from
/// the origin. Consecutive entries are the pairs that inter-cluster edges
/// connect.
pub fn stack_order(centers: &[Vec3]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..centers.len()).collect();
    order.sort_by(|&a, &b| {
        centers[a]
            .length_squared()
            .total_cmp(&centers[b].length_squared())
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_count_stays_in_bounds() {
        let mut rng = CloudRng::seeded(10);
        for _ in 0..25 {
            let c = Cluster::generate(&mut rng, Vec3::ZERO, 4.0, 4, 9, 0.02);
            assert!(c.len() >= 4 && c.len() <= 9);
        }
    }

    #[test]
    fn generated_particles_start_inside_radius() {
        let mut rng = CloudRng::seeded(11);
        let center = Vec3::new(5.0, 1.0, -2.0);
        let c = Cluster::generate(&mut rng, center, 3.0, 50, 50, 0.02);
        for p in &c.particles {
            assert!((p.location - center).length() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn boxed_particles_start_inside_half_extent() {
        let mut rng = CloudRng::seeded(12);
        let center = Vec3::new(-1.0, 2.0, 0.5);
        let c = Cluster::generate_boxed(&mut rng, center, 4.0, 30, 30, 0.02);
        for p in &c.particles {
            let d = p.location - center;
            assert!(d.x.abs() <= 2.0 && d.y.abs() <= 2.0 && d.z.abs() <= 2.0);
        }
    }

    #[test]
    fn swapped_count_bounds_are_tolerated() {
        let mut rng = CloudRng::seeded(13);
        let c = Cluster::generate(&mut rng, Vec3::ZERO, 1.0, 9, 4, 0.02);
        assert!(c.len() >= 4 && c.len() <= 9);
    }

    #[test]
    fn centroid_of_empty_cluster_is_zero() {
        let c = Cluster {
            center: Vec3::ONE,
            radius: 1.0,
            particles: Vec::new(),
        };
        assert_eq!(c.centroid(), Vec3::ZERO);
    }

    #[test]
    fn centroid_is_location_mean() {
        let c = Cluster {
            center: Vec3::ZERO,
            radius: 1.0,
            particles: vec![
                Particle {
                    location: Vec3::new(1.0, 0.0, 0.0),
                    velocity: Vec3::ZERO,
                },
                Particle {
                    location: Vec3::new(3.0, 2.0, -4.0),
                    velocity: Vec3::ZERO,
                },
            ],
        };
        assert_eq!(c.centroid(), Vec3::new(2.0, 1.0, -2.0));
    }

    #[test]
    fn stack_order_sorts_by_squared_distance() {
        let centers = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        ];
        assert_eq!(stack_order(&centers), vec![1, 2, 0]);
    }

    #[test]
    fn stack_order_is_a_permutation() {
        let mut rng = CloudRng::seeded(14);
        let centers = rng.points_in_cone(100.0, 30.0, 20);
        let mut order = stack_order(&centers);
        order.sort_unstable();
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }
}
