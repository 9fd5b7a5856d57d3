use glam::Vec3;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Polyline vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub _pad: f32,
}

impl LineVertex {
    pub const fn new(position: [f32; 3]) -> Self {
        Self {
            position,
            _pad: 0.0,
        }
    }
}

impl From<Vec3> for LineVertex {
    fn from(v: Vec3) -> Self {
        Self::new(v.to_array())
    }
}

/// Convert polyline points into the GPU vertex layout
pub fn line_vertices(points: &[Vec3]) -> Vec<LineVertex> {
    points.iter().copied().map(LineVertex::from).collect()
}
