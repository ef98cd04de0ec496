//! Camera module
//!
//! Camera parameters, viewport rays and the wireframe shapes of a camera's
//! volume.

mod camera;
mod ray;
mod frustum;

pub use camera::{CameraParams, DEFAULT_FOV_DEGREES, DEFAULT_NEAR, DEFAULT_FAR, DEFAULT_ORTHOGRAPHIC_SIZE};
pub use ray::Ray;
pub use frustum::{WireShape, WIRE_SHAPE_EDGES};
