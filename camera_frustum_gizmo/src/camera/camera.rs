/// CameraParams: the projection parameters and pose the gizmo reads.
///
/// The camera looks down its local -Z axis with +Y up (right-handed, the
/// convention of `Mat4::look_at_rh`). The owner of the camera (host engine,
/// demo loop, test) sets the fields; the gizmo only reads them.

use glam::{Mat4, Quat, Vec2, Vec3};
use crate::host::RaySource;
use super::ray::Ray;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 60.0;
/// Default near clip distance
pub const DEFAULT_NEAR: f32 = 0.3;
/// Default far clip distance
pub const DEFAULT_FAR: f32 = 1000.0;
/// Default orthographic half-height
pub const DEFAULT_ORTHOGRAPHIC_SIZE: f32 = 5.0;

/// Camera projection parameters and world pose.
///
/// Perspective and orthographic parameters coexist: toggling
/// `orthographic` switches the projection without losing the other set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    orthographic: bool,
    orthographic_size: f32,
    position: Vec3,
    rotation: Quat,
}

impl CameraParams {
    /// Perspective camera at `position` with orientation `rotation`,
    /// default clip planes, 60° fov and 16:9 aspect.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            aspect: 16.0 / 9.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            orthographic: false,
            orthographic_size: DEFAULT_ORTHOGRAPHIC_SIZE,
            position,
            rotation,
        }
    }

    /// Camera at `eye` looking toward `target`.
    ///
    /// `up` must not be parallel to the view direction.
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        // look_at_rh is world -> view; its inverse is the camera pose
        let view = Mat4::look_at_rh(eye, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        Self::new(eye, rotation.normalize())
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees (perspective only).
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Width / height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn is_orthographic(&self) -> bool {
        self.orthographic
    }

    /// Half of the vertical extent of the orthographic volume.
    pub fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// World-space viewing direction (local -Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// World-space up direction (local +Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// World-space right direction (local +X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera local frame -> world (translation + rotation, unit scale).
    pub fn local_to_world(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World -> camera local frame.
    pub fn view_matrix(&self) -> Mat4 {
        self.local_to_world().inverse()
    }

    /// Perspective or orthographic projection matrix (right-handed, depth [0, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        if self.orthographic {
            let half_height = self.orthographic_size;
            let half_width = half_height * self.aspect;
            Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, self.near, self.far)
        } else {
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
        }
    }

    // ===== SETTERS =====

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Set near and far clip distances.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    pub fn set_orthographic(&mut self, orthographic: bool) {
        self.orthographic = orthographic;
    }

    pub fn set_orthographic_size(&mut self, size: f32) {
        self.orthographic_size = size;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Point on the near plane, in camera local space, under a viewport coordinate.
    ///
    /// (0, 0) is bottom-left, (1, 1) top-right.
    pub fn near_plane_point(&self, viewport: Vec2) -> Vec3 {
        let half_height = if self.orthographic {
            self.orthographic_size
        } else {
            (self.fov_degrees.to_radians() * 0.5).tan() * self.near
        };
        let half_width = half_height * self.aspect;
        let ndc = viewport * 2.0 - Vec2::ONE;

        Vec3::new(ndc.x * half_width, ndc.y * half_height, -self.near)
    }
}

impl RaySource for CameraParams {
    /// Ray from the near plane through a viewport point.
    ///
    /// Perspective rays diverge from the camera position; orthographic rays
    /// are all parallel to the forward axis.
    fn viewport_point_to_ray(&self, viewport: Vec2) -> Ray {
        let local = self.near_plane_point(viewport);
        let origin = self.position + self.rotation * local;
        let direction = if self.orthographic {
            self.forward()
        } else {
            (self.rotation * local).normalize()
        };

        Ray::new(origin, direction)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
