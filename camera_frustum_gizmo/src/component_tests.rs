use glam::{Quat, Vec3};
use crate::camera::CameraParams;
use crate::color::Color;
use crate::debug_scene::DebugScene;
use crate::error::Error;
use crate::host::DrawVisibility;
use crate::sampler::ViewportSample;
use super::*;

const EPS: f32 = 1e-4;

fn looking_down(height: f32) -> CameraParams {
    let mut camera = CameraParams::new(
        Vec3::new(0.0, height, 0.0),
        Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
    );
    camera.set_fov_degrees(90.0);
    camera.set_aspect(1.0);
    camera
}

// ============================================================================
// FrustumGizmoDesc
// ============================================================================

#[test]
fn test_desc_defaults() {
    let desc = FrustumGizmoDesc::default();
    assert_eq!(desc.spheres_radius, 0.5);
    assert_eq!(desc.sphere_color, Color::BLACK);
    assert!(desc.validate().is_ok());
}

#[test]
fn test_desc_rejects_bad_radius() {
    for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let desc = FrustumGizmoDesc { spheres_radius: radius, ..Default::default() };
        assert!(matches!(desc.validate(), Err(Error::InvalidConfig(_))), "radius {}", radius);
        assert!(CameraFrustumGizmo::new(desc).is_err());
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_update_before_start_fails() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();

    let result = gizmo.update(&mut scene, &looking_down(10.0));

    assert!(matches!(result, Err(Error::NotStarted(_))));
    assert!(scene.lines().is_empty());
}

#[test]
fn test_start_is_idempotent() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();

    gizmo.start(&mut scene).unwrap();
    gizmo.start(&mut scene).unwrap();

    assert!(gizmo.is_started());
    assert_eq!(scene.marker_count(), 5);
    assert_eq!(scene.material_count(), 1);
}

#[test]
fn test_start_uses_configuration() {
    let mut scene = DebugScene::new();
    let desc = FrustumGizmoDesc { sphere_color: Color::rgba(0.1, 0.9, 0.3, 0.0), spheres_radius: 1.25 };
    let mut gizmo = CameraFrustumGizmo::new(desc).unwrap();
    gizmo.start(&mut scene).unwrap();

    let presenter = gizmo.presenter().unwrap();
    assert_eq!(scene.material(presenter.material()).unwrap().color, Color::rgb(0.1, 0.9, 0.3));
    let marker = scene.marker(presenter.marker(ViewportSample::Center)).unwrap();
    assert_eq!(marker.scale, Vec3::splat(1.25));
}

#[test]
fn test_update_positions_markers_on_footprint() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    gizmo.start(&mut scene).unwrap();

    gizmo.update(&mut scene, &looking_down(10.0)).unwrap();

    let footprint = *gizmo.footprint();
    let presenter = gizmo.presenter().unwrap();
    for sample in ViewportSample::ALL {
        let marker = scene.marker(presenter.marker(sample)).unwrap();
        assert_eq!(marker.position, footprint.get(sample));
    }

    assert!(footprint.center.abs_diff_eq(Vec3::ZERO, EPS));
    assert!(footprint.bottom_left.abs_diff_eq(Vec3::new(-10.0, 0.0, 10.0), EPS));
    assert!(footprint.top_right.abs_diff_eq(Vec3::new(10.0, 0.0, -10.0), EPS));
    assert_eq!(scene.lines_visible_in(DrawVisibility::EDITOR).count(), 4);
}

#[test]
fn test_update_follows_camera_each_frame() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    gizmo.start(&mut scene).unwrap();
    let mut camera = looking_down(10.0);

    for step in 0..3 {
        scene.begin_frame();
        camera.set_position(Vec3::new(step as f32 * 2.0, 10.0, 0.0));
        gizmo.update(&mut scene, &camera).unwrap();

        let center_key = gizmo.presenter().unwrap().marker(ViewportSample::Center);
        let center = scene.marker(center_key).unwrap().position;
        assert!(center.abs_diff_eq(Vec3::new(step as f32 * 2.0, 0.0, 0.0), EPS));
        assert_eq!(scene.lines().len(), 4);
    }
}

#[test]
fn test_projection_mode_does_not_touch_sampling_path() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    gizmo.start(&mut scene).unwrap();
    let mut camera = looking_down(10.0);
    camera.set_orthographic_size(3.0);

    gizmo.update(&mut scene, &camera).unwrap();
    gizmo.draw_gizmos(&mut scene, &camera);
    let perspective_gizmo = scene.gizmo_lines().to_vec();
    assert_eq!(scene.lines().len(), 4);

    scene.begin_frame();
    camera.set_orthographic(true);
    gizmo.update(&mut scene, &camera).unwrap();
    gizmo.draw_gizmos(&mut scene, &camera);

    // Same line/marker protocol, different gizmo shape
    assert_eq!(scene.lines().len(), 4);
    assert_eq!(scene.marker_count(), 5);
    assert_eq!(scene.gizmo_lines().len(), perspective_gizmo.len());
    assert_ne!(scene.gizmo_lines(), perspective_gizmo.as_slice());
    // Orthographic footprint matches the orthographic volume
    assert!(gizmo.footprint().bottom_left.abs_diff_eq(Vec3::new(-3.0, 0.0, 3.0), EPS));
}

#[test]
fn test_draw_gizmos_works_before_start() {
    let mut scene = DebugScene::new();
    let gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();

    gizmo.draw_gizmos(&mut scene, &looking_down(10.0));

    assert_eq!(scene.gizmo_lines().len(), 12);
    assert_eq!(scene.marker_count(), 0);
}

#[test]
fn test_destroy_releases_markers_and_allows_restart() {
    let mut scene = DebugScene::new();
    let mut gizmo = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    gizmo.start(&mut scene).unwrap();

    gizmo.destroy(&mut scene).unwrap();
    assert!(!gizmo.is_started());
    assert_eq!(scene.marker_count(), 0);
    assert_eq!(scene.material_count(), 0);

    // Second destroy is a no-op
    gizmo.destroy(&mut scene).unwrap();

    gizmo.start(&mut scene).unwrap();
    assert_eq!(scene.marker_count(), 5);
}

#[test]
fn test_two_components_keep_separate_state() {
    let mut scene = DebugScene::new();
    let mut a = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    let mut b = CameraFrustumGizmo::new(FrustumGizmoDesc::default()).unwrap();
    a.start(&mut scene).unwrap();
    b.start(&mut scene).unwrap();

    let mut camera_b = looking_down(10.0);
    camera_b.set_position(Vec3::new(50.0, 10.0, 0.0));
    a.update(&mut scene, &looking_down(10.0)).unwrap();
    b.update(&mut scene, &camera_b).unwrap();

    assert!(a.footprint().center.abs_diff_eq(Vec3::ZERO, EPS));
    assert!(b.footprint().center.abs_diff_eq(Vec3::new(50.0, 0.0, 0.0), EPS));
    assert_eq!(scene.marker_count(), 10);
}
