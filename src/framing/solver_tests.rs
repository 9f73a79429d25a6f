/// Tests for the perspective distance solver
///
/// Validates the closed-form estimate against a hand-computed scenario,
/// the fallback paths, and margin monotonicity.

use super::*;
use crate::camera::{resolve_fov, SensorFit};
use glam::{Mat4, Quat, Vec3};

const FOV_50: f32 = 50.0 * std::f32::consts::PI / 180.0;

// ============================================================================
// Helper Functions
// ============================================================================

/// Corner vertices of a camera-space box centered at the origin
fn box_vertices(width: f32, height: f32, depth: f32) -> Vec<Vec3> {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut v = Vec::new();
    for x in [-hx, hx] {
        for y in [-hy, hy] {
            for z in [-hz, hz] {
                v.push(Vec3::new(x, y, z));
            }
        }
    }
    v
}

// ============================================================================
// camera_space_extents
// ============================================================================

#[test]
fn test_extents_empty_is_none() {
    assert_eq!(camera_space_extents(&[], &Mat4::IDENTITY), None);
}

#[test]
fn test_extents_identity_view() {
    let extents =
        camera_space_extents(&box_vertices(2.0, 1.0, 0.5), &Mat4::IDENTITY).unwrap();

    assert!((extents.width - 2.0).abs() < 1e-6);
    assert!((extents.height - 1.0).abs() < 1e-6);
    assert!((extents.depth - 0.5).abs() < 1e-6);
}

#[test]
fn test_extents_follow_view_rotation() {
    // Rotating the view 90° around Y swaps width and depth
    let view = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2).inverse());
    let extents =
        camera_space_extents(&box_vertices(2.0, 1.0, 0.5), &view).unwrap();

    assert!((extents.width - 0.5).abs() < 1e-5);
    assert!((extents.depth - 2.0).abs() < 1e-5);
}

// ============================================================================
// fit_distance — reference scenario
// ============================================================================

#[test]
fn test_fit_distance_reference_scenario() {
    // FOV 50° horizontal, aspect 16/9, box 2.0 x 1.0 x 0.5, margin 0.1:
    //   dist_w = 1.0 / tan(25°)        ≈ 2.1445
    //   dist_h = 0.5 / (tan(25°)/(16/9)) ≈ 1.9062
    //   final  = (2.1445 + 0.25) * 1.1   ≈ 2.6340
    let fov = resolve_fov(FOV_50, SensorFit::Horizontal, 16.0 / 9.0).unwrap();
    let vertices = box_vertices(2.0, 1.0, 0.5);

    let distance = fit_distance(&vertices, &Mat4::IDENTITY, Some(&fov), 0.1);

    let tan_25 = (FOV_50 * 0.5).tan();
    let expected = (1.0 / tan_25 + 0.25) * 1.1;
    assert!(
        (distance - expected).abs() < 1e-4,
        "distance {} != expected {}",
        distance,
        expected
    );
    assert!((distance - 2.634).abs() < 1e-3);
}

#[test]
fn test_fit_distance_height_limited() {
    // Tall narrow box: the vertical axis must drive the distance
    let fov = resolve_fov(FOV_50, SensorFit::Horizontal, 16.0 / 9.0).unwrap();
    let vertices = box_vertices(0.1, 4.0, 0.0);

    let distance = fit_distance(&vertices, &Mat4::IDENTITY, Some(&fov), 0.0);

    let expected = 2.0 / fov.tan_half_y;
    assert!((distance - expected).abs() < 1e-4);
}

// ============================================================================
// fit_distance — fallbacks
// ============================================================================

#[test]
fn test_fit_distance_degenerate_fov() {
    let vertices = box_vertices(2.0, 1.0, 0.5);
    let distance = fit_distance(&vertices, &Mat4::IDENTITY, None, 0.1);

    assert_eq!(distance, FALLBACK_DISTANCE);
}

#[test]
fn test_fit_distance_empty_vertices() {
    // The "no bounds" sentinel propagates as the fallback, unchanged by
    // the margin
    let fov = resolve_fov(FOV_50, SensorFit::Auto, 1.0).unwrap();
    let distance = fit_distance(&[], &Mat4::IDENTITY, Some(&fov), 0.4);

    assert_eq!(distance, FALLBACK_DISTANCE);
}

#[test]
fn test_fit_distance_never_nan() {
    // Single point: zero extents on all axes
    let fov = resolve_fov(FOV_50, SensorFit::Auto, 1.0).unwrap();
    let distance = fit_distance(&[Vec3::ZERO], &Mat4::IDENTITY, Some(&fov), 0.1);

    assert!(distance.is_finite());
    assert!(distance >= 0.0);
}

// ============================================================================
// Margin monotonicity (P3)
// ============================================================================

#[test]
fn test_margin_monotonicity() {
    let fov = resolve_fov(FOV_50, SensorFit::Horizontal, 16.0 / 9.0).unwrap();
    let vertices = box_vertices(2.0, 1.0, 0.5);

    let mut previous = f32::NEG_INFINITY;
    for step in 0..=14 {
        let margin = -0.5 + step as f32 * 0.1;
        let distance = fit_distance(&vertices, &Mat4::IDENTITY, Some(&fov), margin);
        assert!(
            distance >= previous,
            "distance must be non-decreasing in margin (margin {})",
            margin
        );
        previous = distance;
    }
}
