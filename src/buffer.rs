//! Flattening particle and edge data into draw-ready coordinate arrays.
//!
//! Assembly is pure: the output is recomputed from its inputs on every call
//! and nothing is cached between frames. Edges whose endpoint indices no
//! longer exist (a cluster was regenerated smaller while the edge set was
//! kept) are skipped silently rather than treated as errors.

use crate::cluster::Cluster;
use crate::graph::{Edge, SpanEdge};

/// Hue band the clouds are tinted with: 0.9..1.07 wraps violet through red.
const HUE_BASE: f32 = 0.9;
const HUE_SPAN: f32 = 0.17;

/// Point alpha used for the cloud vertices.
const POINT_ALPHA: f32 = 0.5;

/// Flatten every particle location into `[x, y, z]` triples, cluster-then-
/// index order. Output length is exactly `3 * total_particle_count`.
pub fn assemble_points(clusters: &[Cluster]) -> Vec<f32> {
    let total: usize = clusters.iter().map(Cluster::len).sum();
    let mut out = Vec::with_capacity(total * 3);
    for cluster in clusters {
        for p in &cluster.particles {
            out.extend_from_slice(&[p.location.x, p.location.y, p.location.z]);
        }
    }
    out
}

/// Per-particle RGBA colors, `4 * total_particle_count` floats.
///
/// Hue is interpolated over the global particle index so the whole cloud
/// sweeps the violet-to-red band once, front to back.
pub fn assemble_colors(clusters: &[Cluster]) -> Vec<f32> {
    let total: usize = clusters.iter().map(Cluster::len).sum();
    let mut out = Vec::with_capacity(total * 4);
    let mut p = 0usize;
    for cluster in clusters {
        for _ in &cluster.particles {
            let hue = HUE_BASE + (p as f32 / total as f32) * HUE_SPAN;
            let [r, g, b] = hsv_to_rgb(hue, 1.0, 1.0);
            out.extend_from_slice(&[r, g, b, POINT_ALPHA]);
            p += 1;
        }
    }
    out
}

/// Flatten intra-cluster edges into line segments, six floats per valid
/// edge (both endpoint triples, consecutively). `edges` is parallel to
/// `clusters`; out-of-range endpoint indices are dropped.
pub fn assemble_lines(clusters: &[Cluster], edges: &[Vec<Edge>]) -> Vec<f32> {
    let mut out = Vec::new();
    for (cluster, batch) in clusters.iter().zip(edges) {
        for edge in batch {
            let (Some(a), Some(b)) = (
                cluster.particles.get(edge.start),
                cluster.particles.get(edge.end),
            ) else {
                continue;
            };
            out.extend_from_slice(&[
                a.location.x,
                a.location.y,
                a.location.z,
                b.location.x,
                b.location.y,
                b.location.z,
            ]);
        }
    }
    out
}

/// Flatten inter-cluster span edges the same way. Edges referencing a
/// missing cluster or a particle index past the cluster's current length
/// are dropped.
pub fn assemble_span_lines(clusters: &[Cluster], spans: &[Vec<SpanEdge>]) -> Vec<f32> {
    let mut out = Vec::new();
    for batch in spans {
        for edge in batch {
            let (Some(start_cluster), Some(end_cluster)) =
                (clusters.get(edge.start_cluster), clusters.get(edge.end_cluster))
            else {
                continue;
            };
            let (Some(a), Some(b)) = (
                start_cluster.particles.get(edge.start),
                end_cluster.particles.get(edge.end),
            ) else {
                continue;
            };
            out.extend_from_slice(&[
                a.location.x,
                a.location.y,
                a.location.z,
                b.location.x,
                b.location.y,
                b.location.z,
            ]);
        }
    }
    out
}

/// Standard six-sector HSV to RGB conversion. Hue wraps, so values slightly
/// above 1.0 (the top of the violet-to-red band) land back on red.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Particle;
    use crate::Vec3;

    fn cluster_of(locations: &[Vec3]) -> Cluster {
        Cluster {
            center: Vec3::ZERO,
            radius: 1.0,
            particles: locations
                .iter()
                .map(|&location| Particle {
                    location,
                    velocity: Vec3::ZERO,
                })
                .collect(),
        }
    }

    #[test]
    fn points_length_is_three_per_particle() {
        let clusters = vec![
            cluster_of(&[Vec3::X, Vec3::Y]),
            cluster_of(&[Vec3::Z, Vec3::ONE, Vec3::ZERO]),
        ];
        assert_eq!(assemble_points(&clusters).len(), 15);
    }

    #[test]
    fn points_preserve_cluster_then_index_order() {
        let clusters = vec![
            cluster_of(&[Vec3::new(1.0, 2.0, 3.0)]),
            cluster_of(&[Vec3::new(4.0, 5.0, 6.0)]),
        ];
        assert_eq!(
            assemble_points(&clusters),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn colors_are_rgba_with_half_alpha() {
        let clusters = vec![cluster_of(&[Vec3::X, Vec3::Y, Vec3::Z])];
        let colors = assemble_colors(&clusters);
        assert_eq!(colors.len(), 12);
        for chunk in colors.chunks(4) {
            assert_eq!(chunk[3], 0.5);
            assert!(chunk[..3].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn lines_length_is_six_per_valid_edge() {
        let clusters = vec![cluster_of(&[Vec3::ZERO, Vec3::X, Vec3::Y])];
        let edges = vec![vec![
            Edge { start: 0, end: 1 },
            Edge { start: 2, end: 0 },
        ]];
        assert_eq!(assemble_lines(&clusters, &edges).len(), 12);
    }

    #[test]
    fn stale_edges_are_skipped_not_fatal() {
        // Edge set generated against a larger cluster, cluster since shrunk
        let clusters = vec![cluster_of(&[Vec3::ZERO, Vec3::X])];
        let edges = vec![vec![
            Edge { start: 0, end: 1 },
            Edge { start: 0, end: 7 },
            Edge { start: 9, end: 1 },
        ]];
        assert_eq!(assemble_lines(&clusters, &edges).len(), 6);
    }

    #[test]
    fn span_lines_skip_missing_clusters_and_indices() {
        let clusters = vec![
            cluster_of(&[Vec3::ZERO, Vec3::X]),
            cluster_of(&[Vec3::Y]),
        ];
        let spans = vec![vec![
            SpanEdge {
                start_cluster: 0,
                end_cluster: 1,
                start: 1,
                end: 0,
            },
            SpanEdge {
                start_cluster: 0,
                end_cluster: 1,
                start: 0,
                end: 5, // stale index
            },
            SpanEdge {
                start_cluster: 0,
                end_cluster: 4, // missing cluster
                start: 0,
                end: 0,
            },
        ]];
        assert_eq!(assemble_span_lines(&clusters, &spans).len(), 6);
    }

    #[test]
    fn empty_input_assembles_to_nothing() {
        assert!(assemble_points(&[]).is_empty());
        assert!(assemble_colors(&[]).is_empty());
        assert!(assemble_lines(&[], &[]).is_empty());
        assert!(assemble_span_lines(&[], &[]).is_empty());
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!((green[0] - 0.0).abs() < 1e-5);
        assert!((green[1] - 1.0).abs() < 1e-5);
        assert!((green[2] - 0.0).abs() < 1e-5);
        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!((blue[0] - 0.0).abs() < 1e-5);
        assert!((blue[1] - 0.0).abs() < 1e-5);
        assert!((blue[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn hue_wraps_above_one() {
        // 1.05 and 0.05 are the same hue
        let wrapped = hsv_to_rgb(1.05, 1.0, 1.0);
        let direct = hsv_to_rgb(0.05, 1.0, 1.0);
        for (a, b) in wrapped.iter().zip(direct.iter()) {
            assert!((a - b).abs() < 1e-4);
        }
    }
}
