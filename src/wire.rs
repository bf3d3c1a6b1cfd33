//! Static wireframe line meshes for the container volumes.
//!
//! These are the fixed shapes the sketches draw around their particles: the
//! cube a box cluster bounces inside, the cone cage the stacks sit in, and
//! a small axis indicator. A mesh is a list of line segments in local
//! space; [`WireMesh::segments`] flattens it to world-space coordinates.

use crate::Vec3;
use std::f32::consts::TAU;

/// A line-segment mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct WireMesh {
    /// Segments as endpoint pairs (start, end).
    pub lines: Vec<(Vec3, Vec3)>,
}

impl WireMesh {
    /// Custom mesh from explicit segments.
    pub fn custom(lines: Vec<(Vec3, Vec3)>) -> Self {
        Self { lines }
    }

    /// Cube of edge length `dim`, centered at the origin. 12 edges.
    pub fn cube(dim: f32) -> Self {
        let s = dim / 2.0;
        let v000 = Vec3::new(-s, -s, -s);
        let v001 = Vec3::new(-s, -s, s);
        let v010 = Vec3::new(-s, s, -s);
        let v011 = Vec3::new(-s, s, s);
        let v100 = Vec3::new(s, -s, -s);
        let v101 = Vec3::new(s, -s, s);
        let v110 = Vec3::new(s, s, -s);
        let v111 = Vec3::new(s, s, s);

        Self {
            lines: vec![
                // Bottom face
                (v000, v100),
                (v100, v101),
                (v101, v001),
                (v001, v000),
                // Top face
                (v010, v110),
                (v110, v111),
                (v111, v011),
                (v011, v010),
                // Vertical edges
                (v000, v010),
                (v100, v110),
                (v101, v111),
                (v001, v011),
            ],
        }
    }

    /// Cone cage: radial lines from the tip at the origin to `segments`
    /// points on the base rim. The axis runs along +X, matching the cone
    /// the samplers fill.
    pub fn cone(height: f32, radius: f32, segments: u32) -> Self {
        let tip = Vec3::ZERO;
        let lines = (0..=segments)
            .map(|i| {
                let theta = (i as f32 / segments as f32) * TAU;
                (
                    tip,
                    Vec3::new(height, radius * theta.cos(), radius * theta.sin()),
                )
            })
            .collect();
        Self { lines }
    }

    /// Base rim of the same cone: `segments` chords closing the circle at
    /// `x = height`.
    pub fn cone_rim(height: f32, radius: f32, segments: u32) -> Self {
        let rim_point = |i: u32| {
            let theta = (i as f32 / segments as f32) * TAU;
            Vec3::new(height, radius * theta.cos(), radius * theta.sin())
        };
        let lines = (0..segments)
            .map(|i| (rim_point(i), rim_point(i + 1)))
            .collect();
        Self { lines }
    }

    /// XYZ axis indicator of the given length.
    pub fn axes(len: f32) -> Self {
        Self {
            lines: vec![
                (Vec3::ZERO, Vec3::new(len, 0.0, 0.0)),
                (Vec3::ZERO, Vec3::new(0.0, len, 0.0)),
                (Vec3::ZERO, Vec3::new(0.0, 0.0, len)),
            ],
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Flatten to world space, six floats per segment, translated by
    /// `offset`.
    pub fn segments(&self, offset: Vec3) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.lines.len() * 6);
        for (a, b) in &self.lines {
            let (a, b) = (*a + offset, *b + offset);
            out.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_edges_within_half_extent() {
        let mesh = WireMesh::cube(4.0);
        assert_eq!(mesh.line_count(), 12);
        for (a, b) in &mesh.lines {
            for v in [a, b] {
                assert!(v.x.abs() <= 2.0 && v.y.abs() <= 2.0 && v.z.abs() <= 2.0);
            }
        }
    }

    #[test]
    fn cone_lines_run_tip_to_rim() {
        let mesh = WireMesh::cone(50.0, 20.0, 16);
        assert_eq!(mesh.line_count(), 17);
        for (a, b) in &mesh.lines {
            assert_eq!(*a, Vec3::ZERO);
            assert_eq!(b.x, 50.0);
            assert!(((b.y * b.y + b.z * b.z).sqrt() - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn cone_rim_closes_the_circle() {
        let mesh = WireMesh::cone_rim(50.0, 20.0, 32);
        assert_eq!(mesh.line_count(), 32);
        // Consecutive segments share endpoints
        let first = mesh.lines.first().unwrap().0;
        let last = mesh.lines.last().unwrap().1;
        assert!((first - last).length() < 1e-3);
    }

    #[test]
    fn segments_apply_offset() {
        let mesh = WireMesh::axes(1.0);
        let flat = mesh.segments(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(flat.len(), 18);
        assert_eq!(flat[0], 5.0); // translated origin
        assert_eq!(flat[3], 6.0); // translated x tip
    }
}
