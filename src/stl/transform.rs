//! Axis convention change.

use cgmath::Vector3;

/// Converts a vector from the Z-up convention to the Y-up one.
///
/// `(x, y, z)` becomes `(x, z, -y)`.
pub fn z_up_to_y_up(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(v.x, v.z, -v.y)
}
