use glam::{Vec2, Vec3};

use super::Animation;
use crate::polyline::{Polyline, POINT_COUNT};
use crate::scheduler::FrameInfo;

/// Sampled sine/cosine curve in the z=0 plane, re-evaluated from scratch
/// every frame.
pub struct WaveAnimation {
    origin: Vec2,
}

impl WaveAnimation {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }
}

impl Animation for WaveAnimation {
    fn build(&mut self) -> Polyline {
        let points = (0..POINT_COUNT)
            .map(|i| {
                let x = -1.0 + i as f32 / 50.0;
                let y = (x + self.origin.x).sin() * (x + self.origin.y).cos();
                Vec3::new(x, y, 0.0)
            })
            .collect();

        Polyline::from_points(points)
    }

    fn update(&mut self, line: &mut Polyline, frame: &FrameInfo) {
        // Stateless re-evaluation from x and elapsed time, not an increment
        // on the previous frame's y.
        for p in line.points_mut() {
            p.y = (p.x + frame.time).sin() * (p.x + frame.time).cos();
        }
    }

    fn name(&self) -> &str {
        "wave"
    }
}
