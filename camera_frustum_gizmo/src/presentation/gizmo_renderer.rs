/// GizmoRenderer: editor wireframe of the camera's theoretical volume.
///
/// Stateless. Shapes are drawn in the camera's local frame: the gizmo matrix
/// is set to the camera pose for the duration of the call and restored after.

use glam::Vec3;
use crate::camera::CameraParams;
use crate::host::GizmoDraw;

pub struct GizmoRenderer;

impl GizmoRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the wire box (orthographic) or wire frustum (perspective).
    pub fn draw<G: GizmoDraw + ?Sized>(&self, gizmos: &mut G, camera: &CameraParams) {
        let previous = gizmos.matrix();
        gizmos.set_matrix(camera.local_to_world());

        if camera.is_orthographic() {
            let spread = camera.far() - camera.near();
            let center = (camera.far() + camera.near()) * 0.5;
            let size = camera.orthographic_size();
            gizmos.draw_wire_cube(
                Vec3::new(0.0, 0.0, -center),
                Vec3::new(size * 2.0 * camera.aspect(), size * 2.0, spread),
            );
        } else {
            gizmos.draw_frustum(
                Vec3::new(0.0, 0.0, -camera.near()),
                camera.fov_degrees(),
                camera.far(),
                camera.near(),
                camera.aspect(),
            );
        }

        gizmos.set_matrix(previous);
    }
}

impl Default for GizmoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "gizmo_renderer_tests.rs"]
mod tests;
