//! Host engine capabilities
//!
//! The gizmo never talks to a renderer directly. It depends on four small
//! capabilities that the host engine provides:
//!
//! - **RaySource**: construct a ray through a normalized viewport coordinate
//! - **MarkerHost**: create, reposition and destroy visual markers
//! - **DebugDraw**: draw a colored line segment for the current frame
//! - **GizmoDraw**: draw a wireframe box/frustum in a given local frame
//!
//! [`DebugScene`](crate::frustum_gizmo::DebugScene) implements all of them.

use bitflags::bitflags;
use glam::{Mat4, Vec2, Vec3};
use slotmap::new_key_type;
use crate::camera::Ray;
use crate::color::Color;
use crate::error::Result;

// ===== HANDLES =====

new_key_type! {
    /// Stable handle to a marker owned by the host.
    pub struct MarkerKey;

    /// Stable handle to a marker material owned by the host.
    pub struct MaterialKey;
}

// ===== VISIBILITY =====

bitflags! {
    /// Where a debug primitive is visible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawVisibility: u32 {
        /// Scene/editor view
        const EDITOR = 1 << 0;
        /// Runtime (game) view
        const GAME   = 1 << 1;
    }
}

// ===== CAPABILITIES =====

/// Turns a normalized viewport coordinate into a world-space ray.
pub trait RaySource {
    /// `viewport` is in [0, 1]², (0, 0) bottom-left.
    fn viewport_point_to_ray(&self, viewport: Vec2) -> Ray;
}

/// Creates and moves visual marker objects.
pub trait MarkerHost {
    /// Create a material with a fixed color.
    fn create_material(&mut self, color: Color) -> Result<MaterialKey>;

    /// Create a sphere marker with the given local scale and material.
    fn create_marker(&mut self, scale: Vec3, material: MaterialKey) -> Result<MarkerKey>;

    /// Move a marker to a world-space position.
    fn set_marker_position(&mut self, marker: MarkerKey, position: Vec3) -> Result<()>;

    fn destroy_marker(&mut self, marker: MarkerKey) -> Result<()>;

    fn destroy_material(&mut self, material: MaterialKey) -> Result<()>;
}

/// Immediate-mode debug lines. Lines last for the current frame only.
pub trait DebugDraw {
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color, visibility: DrawVisibility);
}

/// Editor gizmo wireframes, drawn relative to the current gizmo matrix.
pub trait GizmoDraw {
    /// Current local-to-world matrix applied to gizmo shapes.
    fn matrix(&self) -> Mat4;

    fn set_matrix(&mut self, matrix: Mat4);

    /// Wire box centered at `center` with full extents `size`.
    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3);

    /// Wire frustum with its apex at `apex`, opening along local -Z.
    fn draw_frustum(&mut self, apex: Vec3, fov_degrees: f32, max_range: f32, min_range: f32, aspect: f32);
}
