pub mod animations;
pub mod animator;
pub mod camera;
pub mod cli;
pub mod config;
pub mod math;
pub mod polyline;
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod types;
pub mod window;

// Re-export the animation entry points for callers and tests
pub use animations::{create_animation, Animation, ChainAnimation, SceneKind, WaveAnimation};
