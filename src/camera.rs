use glam::{Mat4, Vec3};

use crate::config::CameraSettings;
use crate::types::CameraUniform;

/// Perspective camera. The aspect ratio tracks the viewport; the orientation
/// can be retargeted each frame to follow a moving point.
#[derive(Debug)]
pub struct Camera {
    pub position: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
    aspect: f32,
    target: Vec3,
}

impl Camera {
    pub fn new(settings: &CameraSettings, viewport_aspect: f32) -> Self {
        let position = Vec3::new(0.0, 0.0, settings.position_z);
        Self {
            position,
            fov_y: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            aspect: settings.aspect.unwrap_or(viewport_aspect),
            // looking down -Z, matching the default orientation
            target: position - Vec3::Z,
        }
    }

    /// Aim the camera at a world-space point. A target coincident with the
    /// camera position would degenerate the view matrix and is ignored.
    pub fn look_at(&mut self, target: Vec3) {
        if (target - self.position).length_squared() > f32::EPSILON {
            self.target = target;
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the aspect ratio from new viewport dimensions
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
        }
    }
}
