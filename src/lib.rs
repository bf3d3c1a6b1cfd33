//! # StackCloud - Procedural Particle Cloud Sketches
//!
//! Generative point-cloud scenes: clusters of particles scattered through a
//! cone, wired together with random line networks, drifting inside bounding
//! spheres or boxes, rendered in an interactive wgpu viewer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stackcloud::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let sketch = StackCloud::new(StackCloudConfig::default());
//!     Viewer::new("stack cloud").run(sketch)
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sketches
//!
//! A [`Sketch`] owns its particle state and produces a [`Frame`] of flat
//! geometry (point positions, RGBA colors, line segments) once per rendered
//! frame. Three sketches are built in:
//!
//! - [`StackCloud`] - shell-sampled particle stacks in a cone, connected by
//!   intra-stack and inter-stack line networks, bouncing inside spheres
//! - [`BoxSwarm`] - cube-sampled swarms in a cone, each wired with its own
//!   network and reflecting off its box walls per axis
//! - [`ConeField`] - a static point cloud filling a cone
//!
//! ### Parameters
//!
//! Each sketch takes a config struct with named, bounded parameters
//! ([`StackCloudConfig`], [`BoxSwarmConfig`]). Values are clamped on the way
//! in and can be changed at runtime with `set("n_stacks", 12.0)`, which
//! regenerates exactly the state that depends on them.
//!
//! ### Determinism
//!
//! All randomness flows through one [`CloudRng`]. `Sketch::new` seeds it
//! from entropy for a fresh cloud each run; `with_seed` reproduces the same
//! cloud every time.
//!
//! ## Viewer Controls
//!
//! Left-drag orbits, scroll zooms, Escape closes.

pub mod buffer;
pub mod cluster;
pub mod config;
mod error;
pub mod gpu;
pub mod graph;
pub mod motion;
pub mod sample;
pub mod scene;
pub mod time;
mod window;
pub mod wire;

pub use bytemuck;
pub use glam::{Vec2, Vec3, Vec4};

pub use buffer::{assemble_colors, assemble_lines, assemble_points, assemble_span_lines};
pub use cluster::{stack_order, Cluster, Particle};
pub use config::{BoxSwarmConfig, ConeFieldConfig, ParamSpec, StackCloudConfig};
pub use error::{GpuError, ViewerError};
pub use graph::{Edge, SpanEdge};
pub use sample::CloudRng;
pub use scene::{BoxSwarm, CameraHint, ConeField, Frame, LineBatch, PointBatch, Sketch, StackCloud};
pub use window::Viewer;
pub use wire::WireMesh;

/// Commonly used types, glob-importable.
pub mod prelude {
    pub use crate::config::{BoxSwarmConfig, ConeFieldConfig, StackCloudConfig};
    pub use crate::error::ViewerError;
    pub use crate::sample::CloudRng;
    pub use crate::scene::{BoxSwarm, ConeField, Frame, Sketch, StackCloud};
    pub use crate::window::Viewer;
    pub use glam::Vec3;
}
