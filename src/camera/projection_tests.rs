/// Tests for FOV resolution and projection matrices
///
/// Validates sensor-fit axis derivation, degenerate-input rejection,
/// and the NDC mapping of both projection builders.

use super::*;
use glam::{Vec3, Vec4};

const FOV_50: f32 = 50.0 * std::f32::consts::PI / 180.0;

// ============================================================================
// SensorFit::resolved
// ============================================================================

#[test]
fn test_sensor_fit_auto_resolution() {
    assert_eq!(SensorFit::Auto.resolved(16.0 / 9.0), SensorFit::Horizontal);
    assert_eq!(SensorFit::Auto.resolved(1.0), SensorFit::Horizontal);
    assert_eq!(SensorFit::Auto.resolved(0.5), SensorFit::Vertical);
}

#[test]
fn test_sensor_fit_explicit_passthrough() {
    assert_eq!(SensorFit::Horizontal.resolved(0.5), SensorFit::Horizontal);
    assert_eq!(SensorFit::Vertical.resolved(2.0), SensorFit::Vertical);
}

// ============================================================================
// resolve_fov
// ============================================================================

#[test]
fn test_resolve_fov_horizontal_fit() {
    let aspect = 16.0 / 9.0;
    let fov = resolve_fov(FOV_50, SensorFit::Horizontal, aspect).unwrap();

    let expected_x = (FOV_50 * 0.5).tan();
    assert!((fov.tan_half_x - expected_x).abs() < 1e-6);
    // tan(fov_y/2) = tan(fov_x/2) / aspect
    assert!((fov.tan_half_y - expected_x / aspect).abs() < 1e-6);
}

#[test]
fn test_resolve_fov_vertical_fit() {
    let aspect = 16.0 / 9.0;
    let fov = resolve_fov(FOV_50, SensorFit::Vertical, aspect).unwrap();

    let expected_y = (FOV_50 * 0.5).tan();
    assert!((fov.tan_half_y - expected_y).abs() < 1e-6);
    // tan(fov_x/2) = tan(fov_y/2) * aspect
    assert!((fov.tan_half_x - expected_y * aspect).abs() < 1e-6);
}

#[test]
fn test_resolve_fov_square_aspect_symmetric() {
    let fov = resolve_fov(FOV_50, SensorFit::Auto, 1.0).unwrap();
    assert!((fov.tan_half_x - fov.tan_half_y).abs() < 1e-6);
}

#[test]
fn test_resolve_fov_degenerate_inputs() {
    assert_eq!(resolve_fov(0.0, SensorFit::Auto, 1.0), None);
    assert_eq!(resolve_fov(-1.0, SensorFit::Auto, 1.0), None);
    assert_eq!(resolve_fov(f32::NAN, SensorFit::Auto, 1.0), None);
    assert_eq!(resolve_fov(std::f32::consts::PI, SensorFit::Auto, 1.0), None);
    assert_eq!(resolve_fov(FOV_50, SensorFit::Auto, 0.0), None);
    assert_eq!(resolve_fov(FOV_50, SensorFit::Auto, -2.0), None);
}

// ============================================================================
// perspective_matrix
// ============================================================================

#[test]
fn test_perspective_matrix_edge_mapping() {
    // 90° on both axes: a point at x = -z sits exactly on the right edge
    let fov = ResolvedFov { tan_half_x: 1.0, tan_half_y: 1.0 };
    let proj = perspective_matrix(&fov, 0.1, 100.0);

    let clip = proj * Vec4::new(5.0, 0.0, -5.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!((ndc.x - 1.0).abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
}

#[test]
fn test_perspective_matrix_depth_range() {
    // [-1, 1] depth: near plane maps to -1, far plane to +1
    let fov = ResolvedFov { tan_half_x: 1.0, tan_half_y: 1.0 };
    let proj = perspective_matrix(&fov, 1.0, 100.0);

    let near = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w - -1.0).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

// ============================================================================
// orthographic_matrix
// ============================================================================

#[test]
fn test_orthographic_matrix_horizontal_scale() {
    // scale 4, aspect 2: view volume spans x in [-2, 2], y in [-1, 1]
    let proj = orthographic_matrix(4.0, 2.0, 0.1, 100.0);

    let right = proj.transform_point3(Vec3::new(2.0, 0.0, -1.0));
    let top = proj.transform_point3(Vec3::new(0.0, 1.0, -1.0));
    assert!((right.x - 1.0).abs() < 1e-5);
    assert!((top.y - 1.0).abs() < 1e-5);
}

#[test]
fn test_orthographic_matrix_w_is_one() {
    let proj = orthographic_matrix(2.0, 1.0, 0.1, 100.0);
    let clip = proj * Vec4::new(0.3, -0.2, -5.0, 1.0);
    assert!((clip.w - 1.0).abs() < 1e-6);
}
