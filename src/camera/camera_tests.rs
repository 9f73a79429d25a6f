/// Tests for CameraState, PivotTransform, and RenderSettings
///
/// Validates matrix construction, the view-axis convention, and aspect
/// ratio derivation from render settings.

use super::*;
use glam::{Mat4, Quat, Vec3};

// ============================================================================
// CameraState matrices
// ============================================================================

#[test]
fn test_world_matrix_roundtrip() {
    let camera = CameraState {
        location: Vec3::new(1.0, 2.0, 3.0),
        rotation: Quat::from_rotation_y(0.7),
        ..Default::default()
    };

    let roundtrip = camera.view_matrix() * camera.world_matrix();
    let diff: f32 = (roundtrip - Mat4::IDENTITY)
        .to_cols_array()
        .iter()
        .map(|v| v.abs())
        .sum();
    assert!(diff < 1e-5, "view * world should be identity, diff = {}", diff);
}

#[test]
fn test_back_axis_identity_rotation() {
    let camera = CameraState::default();

    // Identity rotation: camera looks down -Z, back axis is +Z
    assert!((camera.back_axis() - Vec3::Z).length() < 1e-6);
}

#[test]
fn test_back_axis_rotated() {
    // Rotate 180° around Y: the camera now looks down +Z
    let camera = CameraState {
        rotation: Quat::from_rotation_y(std::f32::consts::PI),
        ..Default::default()
    };

    assert!((camera.back_axis() - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn test_view_matrix_centers_subject() {
    // Camera at (0, 0, 5) looking down -Z: world origin maps to (0,0,-5)
    let camera = CameraState {
        location: Vec3::new(0.0, 0.0, 5.0),
        ..Default::default()
    };

    let local = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!((local - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
}

// ============================================================================
// PivotTransform
// ============================================================================

#[test]
fn test_pivot_default() {
    let pivot = PivotTransform::default();

    assert_eq!(pivot.location, Vec3::ZERO);
    assert_eq!(pivot.rotation, Quat::IDENTITY);
}

// ============================================================================
// RenderSettings
// ============================================================================

#[test]
fn test_aspect_landscape() {
    let settings = RenderSettings::new(1920, 1080);
    assert!((settings.aspect() - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_aspect_portrait() {
    let settings = RenderSettings::new(1080, 1920);
    assert!(settings.aspect() < 1.0);
}

#[test]
fn test_aspect_ignores_scale_percentage() {
    // The scale applies to both axes and cancels out
    let mut settings = RenderSettings::new(1920, 1080);
    settings.scale_percent = 25.0;
    assert!((settings.aspect() - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn test_aspect_zero_height_fallback() {
    let settings = RenderSettings::new(1920, 0);
    assert_eq!(settings.aspect(), 1.0);
}
