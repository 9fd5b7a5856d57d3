use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::animations::{create_animation, SceneKind};
use crate::animator::Animator;
use crate::config::AnimatorConfig;
use crate::renderer::LineRenderer;
use crate::scheduler::{CancellationToken, Clock, TickLoop};

const FPS_LOG_INTERVAL: f32 = 1.0;

/// Windowed application: maps the tick loop onto the winit event loop via
/// WaitUntil deadlines and feeds gated frames to the renderer.
pub struct App {
    config: AnimatorConfig,
    scene_kind: SceneKind,
    initial_size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<LineRenderer>,
    animator: Option<Animator>,
    clock: Clock,
    tick_loop: TickLoop,
    rendered_frames: u32,
    fps_timer: f32,
}

impl App {
    pub fn new(
        config: AnimatorConfig,
        scene_kind: SceneKind,
        initial_size: (u32, u32),
        token: CancellationToken,
    ) -> Self {
        let frame_time = Duration::from_secs_f64(config.frame_time_ms / 1000.0);
        Self {
            config,
            scene_kind,
            initial_size,
            window: None,
            renderer: None,
            animator: None,
            clock: Clock::new(),
            tick_loop: TickLoop::new(frame_time, token),
            rendered_frames: 0,
            fps_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32, rendered: bool) {
        if rendered {
            self.rendered_frames += 1;
        }
        self.fps_timer += delta;

        if self.fps_timer >= FPS_LOG_INTERVAL {
            log::info!("fps: {:.1}", self.rendered_frames as f32 / self.fps_timer);
            self.rendered_frames = 0;
            self.fps_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Line Animator")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.initial_size.0,
                        self.initial_size.1,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            let animator = Animator::new(
                &self.config,
                create_animation(self.scene_kind, Vec2::ZERO),
                (size.width.max(1), size.height.max(1)),
            );

            let renderer =
                match pollster::block_on(LineRenderer::new(window.clone(), animator.scene())) {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("failed to initialize renderer: {e}");
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.animator = Some(animator);
            self.clock = Clock::new();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.tick_loop.token().cancel();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(animator) = &mut self.animator {
                    animator.resize(size.width, size.height);
                }
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(renderer), Some(animator)) =
                    (self.renderer.as_mut(), self.animator.as_ref())
                else {
                    return;
                };

                match renderer.render(animator.scene(), animator.camera()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, exiting");
                        self.tick_loop.token().cancel();
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("surface error: {e}"),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.tick_loop.token().is_cancelled() {
            event_loop.exit();
            return;
        }
        let Some(animator) = &mut self.animator else {
            return;
        };

        let tick_start = Instant::now();
        let frame = self.clock.tick();
        let rendered = animator.tick(&frame);

        if rendered {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        self.update_fps(frame.delta, rendered);

        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.tick_loop.next_deadline(tick_start),
        ));
    }
}
