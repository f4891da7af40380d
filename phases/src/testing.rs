//! Property based testing strategies shared by the models.

use pbrt_core::geometry::*;
use proptest::prelude::*;

prop_compose! {
    /// Unit length direction.
    pub fn unit_vector()(
        x in -1.0..1.0f32,
        y in -1.0..1.0f32,
        z in -1.0..1.0f32,
    ) -> Vector3f {
        let v = Vector3f::new(x, y, z);
        if v.length_squared() < 1e-4 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            v.normalize()
        }
    }
}
