//! Sketch configuration: flat sets of named numeric fields, each with
//! declared bounds.
//!
//! This is the whole contract an external parameter panel needs: every
//! field is listed in a [`ParamSpec`] table with its range and default, and
//! writes through [`set`](StackCloudConfig::set) clamp into that range.
//! Values are otherwise plain struct fields; the core treats them as
//! already-validated inputs.

/// Description of one tunable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

fn clamp(spec: &ParamSpec, value: f32) -> f32 {
    value.clamp(spec.min, spec.max)
}

/// Configuration for the stack-cloud sketch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackCloudConfig {
    /// Fewest particles per stack (2..=200).
    pub min_pts: usize,
    /// Most particles per stack (2..=200).
    pub max_pts: usize,
    /// Number of stacks placed in the cone (1..=50).
    pub n_stacks: usize,
    /// Stack containment radius (2..=10).
    pub stack_dim: f32,
    /// Cone height along +X (2..=100).
    pub cone_height: f32,
    /// Cone base radius (2..=100).
    pub cone_radius: f32,
    /// Per-tick speed scale (0.001..=0.2).
    pub particle_speed: f32,
}

impl Default for StackCloudConfig {
    fn default() -> Self {
        Self {
            min_pts: 4,
            max_pts: 9,
            n_stacks: 9,
            stack_dim: 4.0,
            cone_height: 100.0,
            cone_radius: 30.0,
            particle_speed: 0.02,
        }
    }
}

impl StackCloudConfig {
    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec { name: "min_pts", min: 2.0, max: 200.0, default: 4.0 },
        ParamSpec { name: "max_pts", min: 2.0, max: 200.0, default: 9.0 },
        ParamSpec { name: "n_stacks", min: 1.0, max: 50.0, default: 9.0 },
        ParamSpec { name: "stack_dim", min: 2.0, max: 10.0, default: 4.0 },
        ParamSpec { name: "cone_height", min: 2.0, max: 100.0, default: 100.0 },
        ParamSpec { name: "cone_radius", min: 2.0, max: 100.0, default: 30.0 },
        ParamSpec { name: "particle_speed", min: 0.001, max: 0.2, default: 0.02 },
    ];

    fn spec(name: &str) -> Option<&'static ParamSpec> {
        Self::PARAMS.iter().find(|s| s.name == name)
    }

    /// Write one field by name, clamped to its bounds. Returns false for an
    /// unknown name, leaving the config untouched.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let Some(spec) = Self::spec(name) else {
            return false;
        };
        let v = clamp(spec, value);
        match name {
            "min_pts" => self.min_pts = v as usize,
            "max_pts" => self.max_pts = v as usize,
            "n_stacks" => self.n_stacks = v as usize,
            "stack_dim" => self.stack_dim = v,
            "cone_height" => self.cone_height = v,
            "cone_radius" => self.cone_radius = v,
            "particle_speed" => self.particle_speed = v,
            _ => unreachable!(),
        }
        true
    }

    /// Read one field by name.
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            "min_pts" => Some(self.min_pts as f32),
            "max_pts" => Some(self.max_pts as f32),
            "n_stacks" => Some(self.n_stacks as f32),
            "stack_dim" => Some(self.stack_dim),
            "cone_height" => Some(self.cone_height),
            "cone_radius" => Some(self.cone_radius),
            "particle_speed" => Some(self.particle_speed),
            _ => None,
        }
    }

    /// Clamp every field into bounds and repair an inverted point-count
    /// pair.
    pub fn sanitize(&mut self) {
        for spec in Self::PARAMS {
            if let Some(v) = self.get(spec.name) {
                self.set(spec.name, v);
            }
        }
        if self.min_pts > self.max_pts {
            std::mem::swap(&mut self.min_pts, &mut self.max_pts);
        }
    }
}

/// Configuration for the box-swarm sketch. Same cone placement as the stack
/// cloud, but boxes instead of spheres and different panel defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSwarmConfig {
    /// Fewest particles per box (2..=200).
    pub min_pts: usize,
    /// Most particles per box (2..=200).
    pub max_pts: usize,
    /// Number of boxes placed in the cone (1..=50).
    pub n_boxes: usize,
    /// Box edge length (2..=10).
    pub box_dim: f32,
    /// Cone height along +X (2..=100).
    pub cone_height: f32,
    /// Cone base radius (2..=100).
    pub cone_radius: f32,
    /// Per-tick speed scale (0.001..=0.2).
    pub particle_speed: f32,
}

impl Default for BoxSwarmConfig {
    fn default() -> Self {
        Self {
            min_pts: 4,
            max_pts: 9,
            n_boxes: 1,
            box_dim: 4.0,
            cone_height: 50.0,
            cone_radius: 20.0,
            particle_speed: 0.02,
        }
    }
}

impl BoxSwarmConfig {
    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec { name: "min_pts", min: 2.0, max: 200.0, default: 4.0 },
        ParamSpec { name: "max_pts", min: 2.0, max: 200.0, default: 9.0 },
        ParamSpec { name: "n_boxes", min: 1.0, max: 50.0, default: 1.0 },
        ParamSpec { name: "box_dim", min: 2.0, max: 10.0, default: 4.0 },
        ParamSpec { name: "cone_height", min: 2.0, max: 100.0, default: 50.0 },
        ParamSpec { name: "cone_radius", min: 2.0, max: 100.0, default: 20.0 },
        ParamSpec { name: "particle_speed", min: 0.001, max: 0.2, default: 0.02 },
    ];

    fn spec(name: &str) -> Option<&'static ParamSpec> {
        Self::PARAMS.iter().find(|s| s.name == name)
    }

    /// Write one field by name, clamped to its bounds.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let Some(spec) = Self::spec(name) else {
            return false;
        };
        let v = clamp(spec, value);
        match name {
            "min_pts" => self.min_pts = v as usize,
            "max_pts" => self.max_pts = v as usize,
            "n_boxes" => self.n_boxes = v as usize,
            "box_dim" => self.box_dim = v,
            "cone_height" => self.cone_height = v,
            "cone_radius" => self.cone_radius = v,
            "particle_speed" => self.particle_speed = v,
            _ => unreachable!(),
        }
        true
    }

    /// Read one field by name.
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            "min_pts" => Some(self.min_pts as f32),
            "max_pts" => Some(self.max_pts as f32),
            "n_boxes" => Some(self.n_boxes as f32),
            "box_dim" => Some(self.box_dim),
            "cone_height" => Some(self.cone_height),
            "cone_radius" => Some(self.cone_radius),
            "particle_speed" => Some(self.particle_speed),
            _ => None,
        }
    }

    /// Clamp every field into bounds and repair an inverted point-count
    /// pair.
    pub fn sanitize(&mut self) {
        for spec in Self::PARAMS {
            if let Some(v) = self.get(spec.name) {
                self.set(spec.name, v);
            }
        }
        if self.min_pts > self.max_pts {
            std::mem::swap(&mut self.min_pts, &mut self.max_pts);
        }
    }
}

/// Configuration for the static cone point field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeFieldConfig {
    pub count: usize,
    pub height: f32,
    pub radius: f32,
}

impl Default for ConeFieldConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            height: 10.0,
            radius: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_their_param_table() {
        let cfg = StackCloudConfig::default();
        for spec in StackCloudConfig::PARAMS {
            assert_eq!(cfg.get(spec.name), Some(spec.default), "{}", spec.name);
        }
        let cfg = BoxSwarmConfig::default();
        for spec in BoxSwarmConfig::PARAMS {
            assert_eq!(cfg.get(spec.name), Some(spec.default), "{}", spec.name);
        }
    }

    #[test]
    fn set_clamps_into_declared_bounds() {
        let mut cfg = StackCloudConfig::default();
        assert!(cfg.set("n_stacks", 500.0));
        assert_eq!(cfg.n_stacks, 50);
        assert!(cfg.set("particle_speed", -1.0));
        assert_eq!(cfg.particle_speed, 0.001);
    }

    #[test]
    fn set_rejects_unknown_names() {
        let mut cfg = StackCloudConfig::default();
        let before = cfg;
        assert!(!cfg.set("gravity", 9.8));
        assert_eq!(cfg, before);
    }

    #[test]
    fn sanitize_repairs_inverted_point_bounds() {
        let mut cfg = BoxSwarmConfig {
            min_pts: 20,
            max_pts: 5,
            ..Default::default()
        };
        cfg.sanitize();
        assert!(cfg.min_pts <= cfg.max_pts);
    }

    #[test]
    fn sanitize_clamps_out_of_range_fields() {
        let mut cfg = StackCloudConfig {
            cone_height: 1000.0,
            stack_dim: 0.5,
            ..Default::default()
        };
        cfg.sanitize();
        assert_eq!(cfg.cone_height, 100.0);
        assert_eq!(cfg.stack_dim, 2.0);
    }
}
