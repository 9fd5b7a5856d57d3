mod chain;
mod wave;

pub use chain::{relax, rotate_step, ChainAnimation, RELAXATION_RATE, ROTATION_STEP};
pub use wave::WaveAnimation;

use glam::{Vec2, Vec3};

use crate::polyline::Polyline;
use crate::scheduler::FrameInfo;

/// The built-in scenes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Wave,
    Chain,
}

/// Per-scene behavior: builds the initial polyline and perturbs it each frame
pub trait Animation {
    /// Build the polyline this animation drives
    fn build(&mut self) -> Polyline;

    /// Recompute vertex positions for this frame
    fn update(&mut self, line: &mut Polyline, frame: &FrameInfo);

    /// Point the camera should face this frame, if the animation retargets it
    fn camera_target(&self, _line: &Polyline) -> Option<Vec3> {
        None
    }

    /// Animation name for logging
    fn name(&self) -> &str {
        "animation"
    }
}

/// Build the animation for the requested scene
pub fn create_animation(kind: SceneKind, origin: Vec2) -> Box<dyn Animation> {
    match kind {
        SceneKind::Wave => Box::new(WaveAnimation::new(origin)),
        SceneKind::Chain => Box::new(ChainAnimation::new(origin)),
    }
}
