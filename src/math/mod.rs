mod rotation;

pub use rotation::{rotate_about_axis, AXIS_EPSILON};
