//! Box-bounded particle swarms bouncing off their cube walls.
//!
//! Each swarm lives in its own wireframe cube and reflects per axis when a
//! particle crosses a face. Bump `n_boxes` for a denser field.
//!
//! Run with: cargo run --example box_swarm

use stackcloud::prelude::*;

fn main() -> Result<(), ViewerError> {
    let mut sketch = BoxSwarm::new(BoxSwarmConfig::default());
    sketch.set("n_boxes", 6.0);
    Viewer::new("stackcloud - box swarm").run(sketch)
}
