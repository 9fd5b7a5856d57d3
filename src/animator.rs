use crate::animations::Animation;
use crate::camera::Camera;
use crate::config::AnimatorConfig;
use crate::scene::Scene;
use crate::scheduler::{FrameInfo, RenderGate};

/// Owns the scene graph, the camera and the render gate, and advances them
/// one tick at a time. Renderer-agnostic: the windowed app and the headless
/// loop both drive it the same way.
pub struct Animator {
    scene: Scene,
    camera: Camera,
    gate: RenderGate,
    animation: Box<dyn Animation>,
}

impl Animator {
    /// Build the scene (one polyline, added once) and the camera from the
    /// configuration. `viewport` supplies the aspect ratio when the config
    /// does not pin one.
    pub fn new(
        config: &AnimatorConfig,
        mut animation: Box<dyn Animation>,
        viewport: (u32, u32),
    ) -> Self {
        let mut scene = Scene::new();
        scene.add(animation.build());
        log::info!(
            "animator ready: scene '{}', frame interval {:.2}ms",
            animation.name(),
            config.frame_time_ms
        );

        let aspect = viewport.0 as f32 / viewport.1 as f32;
        Self {
            scene,
            camera: Camera::new(&config.camera, aspect),
            gate: RenderGate::new(config.frame_time_ms),
            animation,
        }
    }

    /// Advance the animation by one tick: retarget the camera, recompute the
    /// vertex positions, then consult the render gate. Returns true when this
    /// tick should render.
    pub fn tick(&mut self, frame: &FrameInfo) -> bool {
        for line in self.scene.lines_mut() {
            if let Some(target) = self.animation.camera_target(line) {
                self.camera.look_at(target);
            }
            self.animation.update(line, frame);
        }

        self.gate.should_render(frame.time_ms())
    }

    /// Viewport resize: aspect ratio is recomputed immediately
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
