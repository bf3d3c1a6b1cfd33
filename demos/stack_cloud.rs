//! Stacked particle clouds in a cone, wired with random line networks.
//!
//! Nine shell-sampled stacks drift inside their bounding spheres while
//! white lines join particles within each stack and faint lines bridge
//! neighboring stacks.
//!
//! Run with: cargo run --example stack_cloud

use stackcloud::prelude::*;

fn main() -> Result<(), ViewerError> {
    let sketch = StackCloud::new(StackCloudConfig::default());
    Viewer::new("stackcloud - stack cloud").run(sketch)
}
