//! Ground-plane sampling of the camera frustum.
//!
//! Five rays (four viewport corners + viewport center) are intersected with
//! the horizontal plane at height zero. The five points are produced together
//! as one `FrustumFootprint` value so a frame never mixes samples.

use glam::{Vec2, Vec3};
use crate::camera::Ray;
use crate::host::RaySource;
use crate::gizmo_warn;

/// Height of the ground plane every ray is intersected with.
pub const GROUND_HEIGHT: f32 = 0.0;

/// One of the five sampled viewport positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportSample {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
    Center,
}

impl ViewportSample {
    /// Sampling order, also the marker creation order.
    pub const ALL: [ViewportSample; 5] = [
        ViewportSample::BottomLeft,
        ViewportSample::BottomRight,
        ViewportSample::TopLeft,
        ViewportSample::TopRight,
        ViewportSample::Center,
    ];

    /// Normalized viewport coordinate of this sample.
    pub fn viewport_point(self) -> Vec2 {
        match self {
            ViewportSample::BottomLeft => Vec2::new(0.0, 0.0),
            ViewportSample::BottomRight => Vec2::new(1.0, 0.0),
            ViewportSample::TopLeft => Vec2::new(0.0, 1.0),
            ViewportSample::TopRight => Vec2::new(1.0, 1.0),
            ViewportSample::Center => Vec2::new(0.5, 0.5),
        }
    }

    /// Position in `ViewportSample::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The five ground points of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrustumFootprint {
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub center: Vec3,
}

impl FrustumFootprint {
    pub fn get(&self, sample: ViewportSample) -> Vec3 {
        match sample {
            ViewportSample::BottomLeft => self.bottom_left,
            ViewportSample::BottomRight => self.bottom_right,
            ViewportSample::TopLeft => self.top_left,
            ViewportSample::TopRight => self.top_right,
            ViewportSample::Center => self.center,
        }
    }

    /// Points in `ViewportSample::ALL` order.
    pub fn points(&self) -> [Vec3; 5] {
        ViewportSample::ALL.map(|sample| self.get(sample))
    }

    /// Closed outline BL -> BR -> TR -> TL -> BL as four segments.
    pub fn outline(&self) -> [(Vec3, Vec3); 4] {
        [
            (self.bottom_left, self.bottom_right),
            (self.bottom_right, self.top_right),
            (self.top_right, self.top_left),
            (self.top_left, self.bottom_left),
        ]
    }
}

/// Point where `ray` crosses the horizontal plane at `height`.
///
/// Rays parallel to the plane have no intersection: a WARN is logged and
/// `Vec3::ZERO` is returned in its place.
pub fn sample_at_height(ray: &Ray, height: f32) -> Vec3 {
    if ray.direction.y != 0.0 {
        ray.at((ray.origin.y - height) / -ray.direction.y)
    } else {
        gizmo_warn!(
            "frustum_gizmo::FrustumSampler",
            "Invalid division by zero in sample_at_height: ray {:?} is parallel to the plane y = {}",
            ray, height
        );
        Vec3::ZERO
    }
}

/// Projects the camera's viewport corners and center onto the ground plane.
pub struct FrustumSampler;

impl FrustumSampler {
    pub fn new() -> Self {
        Self
    }

    /// Sample all five points for the current camera state.
    pub fn sample<R: RaySource + ?Sized>(&self, camera: &R) -> FrustumFootprint {
        let [bottom_left, bottom_right, top_left, top_right, center] = ViewportSample::ALL.map(|sample| {
            let ray = camera.viewport_point_to_ray(sample.viewport_point());
            sample_at_height(&ray, GROUND_HEIGHT)
        });

        FrustumFootprint { bottom_left, bottom_right, top_left, top_right, center }
    }
}

impl Default for FrustumSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
