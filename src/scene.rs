//! Sketch composition: owned scene state and per-frame geometry output.
//!
//! A [`Sketch`] owns everything it draws — cluster state, edge sets, static
//! wireframes — and fills a [`Frame`] with flat geometry batches once per
//! rendered frame. The viewer never reaches into a sketch; the frame is the
//! whole interface between simulation and draw submission.
//!
//! Regeneration is wholesale and synchronous: changing a parameter rebuilds
//! the affected clusters on the spot. Edge sets are rebuilt only when the
//! total particle count changes; until then a shrunken cluster can leave
//! stale edge indices behind, which buffer assembly skips.

use crate::buffer;
use crate::cluster::{stack_order, Cluster};
use crate::config::{BoxSwarmConfig, ConeFieldConfig, StackCloudConfig};
use crate::graph::{self, Edge, SpanEdge};
use crate::motion;
use crate::sample::CloudRng;
use crate::wire::WireMesh;
use crate::Vec3;

/// Colored point cloud for one frame.
#[derive(Debug, Default)]
pub struct PointBatch {
    /// `[x, y, z]` per particle.
    pub positions: Vec<f32>,
    /// `[r, g, b, a]` per particle, parallel to `positions`.
    pub colors: Vec<f32>,
    /// Screen-space point size (clip-space units).
    pub size: f32,
}

/// One flat-colored set of line segments for one frame.
#[derive(Debug)]
pub struct LineBatch {
    pub color: Vec3,
    pub opacity: f32,
    /// Six floats per segment: both endpoint triples.
    pub positions: Vec<f32>,
}

/// Everything a sketch submits for one frame.
#[derive(Debug, Default)]
pub struct Frame {
    pub points: PointBatch,
    pub lines: Vec<LineBatch>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.points.positions.clear();
        self.points.colors.clear();
        self.lines.clear();
    }
}

/// Where the viewer should put its orbit camera to take in the sketch.
#[derive(Debug, Clone, Copy)]
pub struct CameraHint {
    pub target: Vec3,
    pub distance: f32,
}

/// A renderable sketch, driven once per displayed frame.
pub trait Sketch {
    /// Advance the sketch one tick and write its geometry into `out`.
    fn frame(&mut self, out: &mut Frame);

    /// Initial camera placement for this sketch.
    fn camera(&self) -> CameraHint {
        CameraHint {
            target: Vec3::ZERO,
            distance: 3.0,
        }
    }
}

const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const SKY_BLUE: Vec3 = Vec3::new(0.53, 0.81, 0.92);

/// Point clusters scattered through a cone, wired together with random
/// intra- and inter-cluster lines, drifting inside per-stack bounding
/// spheres.
pub struct StackCloud {
    config: StackCloudConfig,
    rng: CloudRng,
    centers: Vec<Vec3>,
    order: Vec<usize>,
    clusters: Vec<Cluster>,
    intra: Vec<Vec<Edge>>,
    inter: Vec<Vec<SpanEdge>>,
    cone: WireMesh,
}

impl StackCloud {
    /// Build with a fresh cloud on every run.
    pub fn new(config: StackCloudConfig) -> Self {
        Self::build(config, CloudRng::from_entropy())
    }

    /// Build reproducibly from an explicit seed.
    pub fn with_seed(config: StackCloudConfig, seed: u64) -> Self {
        Self::build(config, CloudRng::seeded(seed))
    }

    fn build(mut config: StackCloudConfig, mut rng: CloudRng) -> Self {
        config.sanitize();
        let centers = rng.points_in_cone(config.cone_height, config.cone_radius, config.n_stacks);
        let order = stack_order(&centers);
        let clusters = generate_stacks(&mut rng, &centers, &config);
        let intra = clusters
            .iter()
            .map(|c| graph::intra_stack_edges(&mut rng, c.len()))
            .collect();
        let sizes: Vec<usize> = clusters.iter().map(Cluster::len).collect();
        let inter = graph::inter_cluster_edges(&mut rng, &sizes, &order);
        let cone = cone_cage(config.cone_height, config.cone_radius);
        Self {
            config,
            rng,
            centers,
            order,
            clusters,
            intra,
            inter,
            cone,
        }
    }

    pub fn config(&self) -> &StackCloudConfig {
        &self.config
    }

    pub fn total_particles(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Update a named parameter (clamped to its bounds) and regenerate the
    /// state that depends on it. Returns false for an unknown name.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let mut next = self.config;
        if !next.set(name, value) {
            return false;
        }
        next.sanitize();
        self.apply(next);
        true
    }

    fn apply(&mut self, next: StackCloudConfig) {
        let prev = self.config;
        self.config = next;

        let cone_changed = next.cone_height != prev.cone_height
            || next.cone_radius != prev.cone_radius
            || next.n_stacks != prev.n_stacks;
        let clusters_changed = cone_changed
            || next.min_pts != prev.min_pts
            || next.max_pts != prev.max_pts
            || next.stack_dim != prev.stack_dim
            || next.particle_speed != prev.particle_speed;

        if cone_changed {
            self.centers =
                self.rng
                    .points_in_cone(next.cone_height, next.cone_radius, next.n_stacks);
            self.order = stack_order(&self.centers);
            self.cone = cone_cage(next.cone_height, next.cone_radius);
        }
        if clusters_changed {
            let before = self.total_particles();
            self.clusters = generate_stacks(&mut self.rng, &self.centers, &next);
            // Edge sets follow the particle total, not every regeneration;
            // assembly skips any indices that went stale in between.
            if self.total_particles() != before {
                self.intra = self
                    .clusters
                    .iter()
                    .map(|c| graph::intra_stack_edges(&mut self.rng, c.len()))
                    .collect();
                let sizes: Vec<usize> = self.clusters.iter().map(Cluster::len).collect();
                self.inter = graph::inter_cluster_edges(&mut self.rng, &sizes, &self.order);
            }
        }
    }
}

fn generate_stacks(
    rng: &mut CloudRng,
    centers: &[Vec3],
    config: &StackCloudConfig,
) -> Vec<Cluster> {
    centers
        .iter()
        .map(|&center| {
            Cluster::generate(
                rng,
                center,
                config.stack_dim,
                config.min_pts,
                config.max_pts,
                config.particle_speed,
            )
        })
        .collect()
}

fn cone_cage(height: f32, radius: f32) -> WireMesh {
    let mut cage = WireMesh::cone(height, radius, 16);
    cage.lines.extend(WireMesh::cone_rim(height, radius, 32).lines);
    cage
}

impl Sketch for StackCloud {
    fn frame(&mut self, out: &mut Frame) {
        for cluster in &mut self.clusters {
            motion::step_sphere(cluster);
        }

        out.clear();
        out.points.positions = buffer::assemble_points(&self.clusters);
        out.points.colors = buffer::assemble_colors(&self.clusters);
        out.points.size = 0.012;
        out.lines.push(LineBatch {
            color: WHITE,
            opacity: 1.0,
            positions: buffer::assemble_lines(&self.clusters, &self.intra),
        });
        out.lines.push(LineBatch {
            color: WHITE,
            opacity: 0.2,
            positions: buffer::assemble_span_lines(&self.clusters, &self.inter),
        });
        out.lines.push(LineBatch {
            color: SKY_BLUE,
            opacity: 0.2,
            positions: self.cone.segments(Vec3::ZERO),
        });
    }

    fn camera(&self) -> CameraHint {
        CameraHint {
            target: Vec3::new(self.config.cone_height / 2.0, 0.0, 0.0),
            distance: self.config.cone_height * 0.9 + self.config.cone_radius * 0.5,
        }
    }
}

/// Box-bounded particle swarms scattered through a cone, each wired with a
/// random line network and bouncing off its own cube walls.
pub struct BoxSwarm {
    config: BoxSwarmConfig,
    rng: CloudRng,
    centers: Vec<Vec3>,
    clusters: Vec<Cluster>,
    intra: Vec<Vec<Edge>>,
    cube: WireMesh,
    cone: WireMesh,
}

impl BoxSwarm {
    pub fn new(config: BoxSwarmConfig) -> Self {
        Self::build(config, CloudRng::from_entropy())
    }

    pub fn with_seed(config: BoxSwarmConfig, seed: u64) -> Self {
        Self::build(config, CloudRng::seeded(seed))
    }

    fn build(mut config: BoxSwarmConfig, mut rng: CloudRng) -> Self {
        config.sanitize();
        let centers = rng.points_in_cone(config.cone_height, config.cone_radius, config.n_boxes);
        let clusters: Vec<Cluster> = centers
            .iter()
            .map(|&center| {
                Cluster::generate_boxed(
                    &mut rng,
                    center,
                    config.box_dim,
                    config.min_pts,
                    config.max_pts,
                    config.particle_speed,
                )
            })
            .collect();
        let intra = clusters
            .iter()
            .map(|c| graph::intra_box_edges(&mut rng, c.len()))
            .collect();
        let cube = WireMesh::cube(config.box_dim);
        let cone = cone_cage(config.cone_height, config.cone_radius);
        Self {
            config,
            rng,
            centers,
            clusters,
            intra,
            cube,
            cone,
        }
    }

    pub fn config(&self) -> &BoxSwarmConfig {
        &self.config
    }

    pub fn total_particles(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Update a named parameter and regenerate dependent state.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let mut next = self.config;
        if !next.set(name, value) {
            return false;
        }
        next.sanitize();
        let prev = std::mem::replace(&mut self.config, next);

        let cone_changed = next.cone_height != prev.cone_height
            || next.cone_radius != prev.cone_radius
            || next.n_boxes != prev.n_boxes;
        if cone_changed {
            self.centers =
                self.rng
                    .points_in_cone(next.cone_height, next.cone_radius, next.n_boxes);
            self.cone = cone_cage(next.cone_height, next.cone_radius);
        }
        if next.box_dim != prev.box_dim {
            self.cube = WireMesh::cube(next.box_dim);
        }

        let before = self.total_particles();
        self.clusters = self
            .centers
            .iter()
            .map(|&center| {
                Cluster::generate_boxed(
                    &mut self.rng,
                    center,
                    next.box_dim,
                    next.min_pts,
                    next.max_pts,
                    next.particle_speed,
                )
            })
            .collect();
        if self.total_particles() != before {
            self.intra = self
                .clusters
                .iter()
                .map(|c| graph::intra_box_edges(&mut self.rng, c.len()))
                .collect();
        }
        true
    }
}

impl Sketch for BoxSwarm {
    fn frame(&mut self, out: &mut Frame) {
        for cluster in &mut self.clusters {
            motion::step_box(cluster, self.config.box_dim);
        }

        out.clear();
        out.points.positions = buffer::assemble_points(&self.clusters);
        out.points.size = 0.012;
        let total = self.total_particles();
        out.points.colors = flat_color(total, Vec3::new(0.9, 0.9, 0.9), 1.0);
        out.lines.push(LineBatch {
            color: WHITE,
            opacity: 0.8,
            positions: buffer::assemble_lines(&self.clusters, &self.intra),
        });
        let mut cubes = Vec::with_capacity(self.centers.len() * self.cube.line_count() * 6);
        for &center in &self.centers {
            cubes.extend(self.cube.segments(center));
        }
        out.lines.push(LineBatch {
            color: Vec3::new(0.6, 0.6, 0.6),
            opacity: 0.3,
            positions: cubes,
        });
        out.lines.push(LineBatch {
            color: Vec3::new(0.3, 0.5, 1.0),
            opacity: 0.1,
            positions: self.cone.segments(Vec3::ZERO),
        });
    }

    fn camera(&self) -> CameraHint {
        CameraHint {
            target: Vec3::new(self.config.cone_height / 2.0, 0.0, 0.0),
            distance: self.config.cone_height * 0.9 + self.config.cone_radius * 0.5,
        }
    }
}

/// A static, uniformly tapered point cloud filling a cone. No motion, no
/// edges; the simplest of the sketches.
pub struct ConeField {
    config: ConeFieldConfig,
    positions: Vec<f32>,
}

impl ConeField {
    pub fn new(config: ConeFieldConfig) -> Self {
        Self::build(config, CloudRng::from_entropy())
    }

    pub fn with_seed(config: ConeFieldConfig, seed: u64) -> Self {
        Self::build(config, CloudRng::seeded(seed))
    }

    fn build(config: ConeFieldConfig, mut rng: CloudRng) -> Self {
        let points = rng.points_in_cone(config.height, config.radius, config.count);
        let mut positions = Vec::with_capacity(points.len() * 3);
        for p in points {
            positions.extend_from_slice(&[p.x, p.y, p.z]);
        }
        Self { config, positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Sketch for ConeField {
    fn frame(&mut self, out: &mut Frame) {
        out.clear();
        out.points.positions.extend_from_slice(&self.positions);
        out.points.size = 0.006;
        out.points.colors = flat_color(self.len(), Vec3::new(0.9, 0.9, 0.9), 1.0);
    }

    fn camera(&self) -> CameraHint {
        CameraHint {
            target: Vec3::new(self.config.height / 2.0, 0.0, 0.0),
            distance: self.config.height * 0.9 + self.config.radius * 0.5,
        }
    }
}

fn flat_color(count: usize, color: Vec3, alpha: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 4);
    for _ in 0..count {
        out.extend_from_slice(&[color.x, color.y, color.z, alpha]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_cloud_population_respects_config_bounds() {
        let sketch = StackCloud::with_seed(StackCloudConfig::default(), 7);
        let cfg = sketch.config();
        let total = sketch.total_particles();
        assert!(total >= cfg.n_stacks * cfg.min_pts);
        assert!(total <= cfg.n_stacks * cfg.max_pts);
    }

    #[test]
    fn stack_cloud_frame_arrays_are_consistent() {
        let mut sketch = StackCloud::with_seed(StackCloudConfig::default(), 8);
        let mut frame = Frame::new();
        sketch.frame(&mut frame);
        let total = sketch.total_particles();
        assert_eq!(frame.points.positions.len(), total * 3);
        assert_eq!(frame.points.colors.len(), total * 4);
        assert_eq!(frame.lines.len(), 3);
        for batch in &frame.lines {
            assert_eq!(batch.positions.len() % 6, 0);
        }
    }

    #[test]
    fn stack_cloud_particles_move_between_frames() {
        let mut sketch = StackCloud::with_seed(StackCloudConfig::default(), 9);
        let mut a = Frame::new();
        let mut b = Frame::new();
        sketch.frame(&mut a);
        sketch.frame(&mut b);
        assert_ne!(a.points.positions, b.points.positions);
    }

    #[test]
    fn stack_cloud_regeneration_keeps_shape_bounds() {
        let mut sketch = StackCloud::with_seed(StackCloudConfig::default(), 10);
        for value in [3.0, 20.0, 3.0] {
            sketch.set("n_stacks", value);
            let cfg = sketch.config();
            let total = sketch.total_particles();
            assert_eq!(cfg.n_stacks, value as usize);
            assert!(total >= cfg.n_stacks * cfg.min_pts);
            assert!(total <= cfg.n_stacks * cfg.max_pts);
        }
    }

    #[test]
    fn stack_cloud_survives_shrinking_regeneration() {
        // Shrinking the per-stack population leaves stale edge indices
        // behind whenever the total happens to repeat; frames must still
        // assemble cleanly while state settles.
        let mut sketch = StackCloud::with_seed(StackCloudConfig::default(), 11);
        sketch.set("max_pts", 2.0);
        sketch.set("min_pts", 2.0);
        let mut frame = Frame::new();
        sketch.frame(&mut frame);
        let total = sketch.total_particles();
        assert_eq!(frame.points.positions.len(), total * 3);
    }

    #[test]
    fn stack_cloud_rejects_unknown_params() {
        let mut sketch = StackCloud::with_seed(StackCloudConfig::default(), 12);
        assert!(!sketch.set("wind", 1.0));
    }

    #[test]
    fn seeded_sketches_are_reproducible() {
        let a = StackCloud::with_seed(StackCloudConfig::default(), 99);
        let b = StackCloud::with_seed(StackCloudConfig::default(), 99);
        assert_eq!(a.total_particles(), b.total_particles());
        assert_eq!(
            buffer::assemble_points(&a.clusters),
            buffer::assemble_points(&b.clusters)
        );
    }

    #[test]
    fn box_swarm_frame_has_cube_and_cone_batches() {
        let mut sketch = BoxSwarm::with_seed(BoxSwarmConfig::default(), 13);
        let mut frame = Frame::new();
        sketch.frame(&mut frame);
        assert_eq!(frame.lines.len(), 3);
        // One cube outline per box, 12 edges each
        assert_eq!(
            frame.lines[1].positions.len(),
            sketch.config().n_boxes * 12 * 6
        );
    }

    #[test]
    fn box_swarm_population_tracks_box_count() {
        let mut sketch = BoxSwarm::with_seed(BoxSwarmConfig::default(), 14);
        sketch.set("n_boxes", 5.0);
        let cfg = sketch.config();
        let total = sketch.total_particles();
        assert!(total >= cfg.n_boxes * cfg.min_pts);
        assert!(total <= cfg.n_boxes * cfg.max_pts);
    }

    #[test]
    fn cone_field_is_static() {
        let mut sketch = ConeField::with_seed(ConeFieldConfig::default(), 15);
        let mut a = Frame::new();
        let mut b = Frame::new();
        sketch.frame(&mut a);
        sketch.frame(&mut b);
        assert_eq!(a.points.positions, b.points.positions);
        assert_eq!(a.points.positions.len(), 3000);
    }
}
