use glam::{Quat, Vec3};

/// Squared-length threshold below which a rotation axis is considered
/// degenerate and must not be normalized.
pub const AXIS_EPSILON: f32 = 1e-12;

/// Rotate `v` about a unit-length `axis` by `angle` radians.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis, angle) * v
}
