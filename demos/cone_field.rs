//! A static point cloud filling a cone, denser toward the axis.
//!
//! No motion and no edges; useful for checking the cone sampler and the
//! point renderer in isolation.
//!
//! Run with: cargo run --example cone_field

use stackcloud::prelude::*;

fn main() -> Result<(), ViewerError> {
    let sketch = ConeField::with_seed(ConeFieldConfig::default(), 42);
    Viewer::new("stackcloud - cone field").run(sketch)
}
