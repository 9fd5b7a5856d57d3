use glam::{Vec2, Vec3};
use rand::Rng;

use super::Animation;
use crate::math::{rotate_about_axis, AXIS_EPSILON};
use crate::polyline::{Polyline, POINT_COUNT};
use crate::scheduler::FrameInfo;

/// Fixed per-frame rotation angle in the XY plane, in radians
pub const ROTATION_STEP: f32 = 0.01;

/// Fraction of the inter-point angle applied per relaxation pass
pub const RELAXATION_RATE: f32 = 0.001;

/// Crumpled chain: points scattered around a rising diagonal baseline, bent a
/// little further every frame. The camera follows the free end of the chain.
pub struct ChainAnimation {
    origin: Vec2,
}

impl ChainAnimation {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }
}

impl Animation for ChainAnimation {
    fn build(&mut self) -> Polyline {
        let mut rng = rand::rng();
        let points = (0..POINT_COUNT)
            .map(|i| {
                Vec3::new(
                    self.origin.x + i as f32 - rng.random::<f32>(),
                    self.origin.y + i as f32 + rng.random::<f32>(),
                    i as f32 * 0.1,
                )
            })
            .collect();

        Polyline::from_points(points)
    }

    fn update(&mut self, line: &mut Polyline, _frame: &FrameInfo) {
        rotate_step(line.points_mut());
        relax(line.points_mut());
    }

    fn camera_target(&self, line: &Polyline) -> Option<Vec3> {
        Some(line.last_point())
    }

    fn name(&self) -> &str {
        "chain"
    }
}

/// One incremental rotation step applied to every point.
pub fn rotate_step(points: &mut [Vec3]) {
    let (sin, cos) = ROTATION_STEP.sin_cos();

    for p in points.iter_mut() {
        let Vec3 { x, y, z } = *p;
        p.x = x * cos - y * sin;
        p.y = x * sin + y * cos;
        // TODO: z is fed the rotated y rather than the pre-rotation y, so
        // this is not a proper YZ rotation. It matches the observed motion;
        // confirm the coupling is intended before changing it.
        p.z = p.y * sin + z * cos;
    }
}

/// Bend each point slightly relative to its predecessor: rotate it about the
/// axis perpendicular to both position vectors by a small fraction of the
/// angle between them. Pairs with a degenerate axis (parallel vectors, or a
/// point at the origin) are skipped so no NaN can enter the geometry.
pub fn relax(points: &mut [Vec3]) {
    for i in 1..points.len() {
        let prev = points[i - 1];
        let curr = points[i];

        let axis = prev.cross(curr);
        if axis.length_squared() <= AXIS_EPSILON {
            log::debug!("skipping degenerate relaxation pair at index {i}");
            continue;
        }

        let angle = prev.angle_between(curr);
        points[i] = rotate_about_axis(curr, axis.normalize(), angle * RELAXATION_RATE);
    }
}
