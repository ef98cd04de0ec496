//! Headless frame loop over the DebugScene reference host.
//!
//! A camera sweeps around the origin while tilting toward the ground. Halfway
//! through it switches to an orthographic projection. Each frame logs the
//! ground footprint and what the host recorded.

use camera_frustum_gizmo::frustum_gizmo::{
    CameraFrustumGizmo, Color, DebugScene, Diagnostics, FrustumGizmoDesc, LineVertex, Result,
};
use camera_frustum_gizmo::frustum_gizmo::camera::CameraParams;
use camera_frustum_gizmo::frustum_gizmo::host::DrawVisibility;
use camera_frustum_gizmo::frustum_gizmo::log::LogSeverity;
use camera_frustum_gizmo::glam::Vec3;

const SOURCE: &str = "frustum_gizmo::demo";
const FRAME_COUNT: u32 = 12;

fn camera_for_frame(frame: u32) -> CameraParams {
    let t = frame as f32 / FRAME_COUNT as f32;
    let angle = t * std::f32::consts::TAU;
    let height = 20.0 - 10.0 * t;
    let eye = Vec3::new(angle.cos() * 15.0, height, angle.sin() * 15.0);

    let mut camera = CameraParams::looking_at(eye, Vec3::ZERO, Vec3::Y);
    camera.set_clip_planes(0.3, 100.0);
    camera.set_orthographic(frame >= FRAME_COUNT / 2);
    camera.set_orthographic_size(8.0);
    camera
}

fn run() -> Result<()> {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc {
        sphere_color: Color::rgb(0.1, 0.6, 1.0),
        spheres_radius: 0.5,
    })?;
    gizmo.start(&mut scene)?;

    for frame in 0..FRAME_COUNT {
        let camera = camera_for_frame(frame);

        scene.begin_frame();
        gizmo.update(&mut scene, &camera)?;
        gizmo.draw_gizmos(&mut scene, &camera);

        let footprint = gizmo.footprint();
        Diagnostics::log(LogSeverity::Info, SOURCE, format!(
            "frame {:>2} [{}] center ({:.2}, {:.2}) BL ({:.2}, {:.2}) TR ({:.2}, {:.2})",
            scene.frame_index(),
            if camera.is_orthographic() { "ortho" } else { "persp" },
            footprint.center.x, footprint.center.z,
            footprint.bottom_left.x, footprint.bottom_left.z,
            footprint.top_right.x, footprint.top_right.z,
        ));
        let moved = scene.take_dirty_markers().len();
        let vertices = scene.line_vertices(DrawVisibility::EDITOR);
        Diagnostics::log(LogSeverity::Debug, SOURCE, format!(
            "{} outline lines, {} gizmo edges, {} editor vertices ({} bytes), {} markers moved",
            scene.lines().len(),
            scene.gizmo_lines().len(),
            vertices.len(),
            LineVertex::as_bytes(&vertices).len(),
            moved,
        ));
    }

    gizmo.destroy(&mut scene)?;
    Diagnostics::log(LogSeverity::Info, SOURCE, format!(
        "Done: {} markers, {} materials left",
        scene.marker_count(),
        scene.material_count(),
    ));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        Diagnostics::log(LogSeverity::Error, SOURCE, format!("Demo failed: {}", err));
        std::process::exit(1);
    }
}
