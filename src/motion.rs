//! Per-frame particle motion with boundary reflection.
//!
//! Each call advances every particle by exactly one velocity step. The step
//! is deliberately independent of elapsed time, so animation speed tracks
//! the host's frame rate — the same quirk the sketches have always had.
//! Reflection corrects velocity only; an overshoot position is kept as-is
//! and pulled back inside over the following ticks ("soft wall").

use crate::cluster::Cluster;

/// Advance a box-contained cluster one tick.
///
/// After integration, any coordinate outside `center ± dim/2` flips the
/// velocity on that axis alone.
pub fn step_box(cluster: &mut Cluster, dim: f32) {
    let half = dim / 2.0;
    let center = cluster.center;
    for p in &mut cluster.particles {
        p.location += p.velocity;
        if p.location.x < center.x - half || p.location.x > center.x + half {
            p.velocity.x = -p.velocity.x;
        }
        if p.location.y < center.y - half || p.location.y > center.y + half {
            p.velocity.y = -p.velocity.y;
        }
        if p.location.z < center.z - half || p.location.z > center.z + half {
            p.velocity.z = -p.velocity.z;
        }
    }
}

/// Advance a sphere-contained cluster one tick.
///
/// The containment sphere is centered on the live centroid, computed once
/// from the locations at the start of the tick. A particle ending the tick
/// outside `radius` has its whole velocity vector reversed, not just one
/// axis.
pub fn step_sphere(cluster: &mut Cluster) {
    if cluster.is_empty() {
        return;
    }
    let centroid = cluster.centroid();
    let radius_sq = cluster.radius * cluster.radius;
    for p in &mut cluster.particles {
        p.location += p.velocity;
        if p.location.distance_squared(centroid) > radius_sq {
            p.velocity = -p.velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Particle;
    use crate::Vec3;

    fn single(location: Vec3, velocity: Vec3, center: Vec3, radius: f32) -> Cluster {
        Cluster {
            center,
            radius,
            particles: vec![Particle { location, velocity }],
        }
    }

    #[test]
    fn box_overshoot_flips_one_axis_and_keeps_position() {
        // Just inside the +x face, moving out
        let mut c = single(
            Vec3::new(1.99, 0.0, 0.0),
            Vec3::new(0.05, 0.0, 0.0),
            Vec3::ZERO,
            2.0,
        );
        step_box(&mut c, 4.0);
        let p = &c.particles[0];
        assert!((p.location - Vec3::new(2.04, 0.0, 0.0)).length() < 1e-6); // overshoot kept
        assert_eq!(p.velocity, Vec3::new(-0.05, 0.0, 0.0));
    }

    #[test]
    fn box_reflection_is_per_axis() {
        let mut c = single(
            Vec3::new(1.99, -1.99, 0.0),
            Vec3::new(0.05, -0.05, 0.01),
            Vec3::ZERO,
            2.0,
        );
        step_box(&mut c, 4.0);
        let p = &c.particles[0];
        assert_eq!(p.velocity, Vec3::new(-0.05, 0.05, 0.01));
    }

    #[test]
    fn box_interior_particle_is_unaffected() {
        let mut c = single(Vec3::ZERO, Vec3::new(0.01, 0.02, -0.03), Vec3::ZERO, 2.0);
        step_box(&mut c, 4.0);
        let p = &c.particles[0];
        assert_eq!(p.location, Vec3::new(0.01, 0.02, -0.03));
        assert_eq!(p.velocity, Vec3::new(0.01, 0.02, -0.03));
    }

    #[test]
    fn box_respects_offset_center() {
        let center = Vec3::new(10.0, 0.0, 0.0);
        let mut c = single(
            center + Vec3::new(1.99, 0.0, 0.0),
            Vec3::new(0.05, 0.0, 0.0),
            center,
            2.0,
        );
        step_box(&mut c, 4.0);
        assert_eq!(c.particles[0].velocity.x, -0.05);
    }

    #[test]
    fn sphere_escape_reverses_whole_velocity() {
        // Two particles so the centroid is away from the escaper
        let mut c = Cluster {
            center: Vec3::ZERO,
            radius: 1.0,
            particles: vec![
                Particle {
                    location: Vec3::new(0.99, 0.0, 0.0),
                    velocity: Vec3::new(0.1, 0.05, -0.02),
                },
                Particle {
                    location: Vec3::new(-0.99, 0.0, 0.0),
                    velocity: Vec3::ZERO,
                },
            ],
        };
        step_sphere(&mut c);
        let p = &c.particles[0];
        // Centroid at tick start is the origin; (1.09, 0.05, -0.02) is outside r=1
        assert_eq!(p.velocity, Vec3::new(-0.1, -0.05, 0.02));
        assert!((p.location - Vec3::new(1.09, 0.05, -0.02)).length() < 1e-6);
    }

    #[test]
    fn sphere_interior_particle_keeps_velocity() {
        let mut c = single(Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0), Vec3::ZERO, 1.0);
        step_sphere(&mut c);
        assert_eq!(c.particles[0].velocity, Vec3::new(0.01, 0.0, 0.0));
    }

    #[test]
    fn steps_are_delta_independent() {
        let mut c = single(Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0), Vec3::ZERO, 10.0);
        step_sphere(&mut c);
        step_sphere(&mut c);
        assert!((c.particles[0].location.x - 0.02).abs() < 1e-6);
    }

    #[test]
    fn empty_cluster_is_a_no_op() {
        let mut c = Cluster {
            center: Vec3::ZERO,
            radius: 1.0,
            particles: Vec::new(),
        };
        step_sphere(&mut c);
        step_box(&mut c, 2.0);
    }
}
