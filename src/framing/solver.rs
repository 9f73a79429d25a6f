/// Perspective distance solver.
///
/// Closed-form estimate of the camera distance that fits a vertex set
/// inside a perspective frustum. Conservative by construction — it uses
/// the full camera-space AABB, not exact per-vertex projected extents —
/// so the session verifies the result with the containment check and
/// refines iteratively when needed.

use glam::{Mat4, Vec3};
use crate::camera::ResolvedFov;
use crate::scene::Aabb;

/// Distance returned when the solver has nothing to work with:
/// degenerate FOV or an empty vertex set. Far enough to keep typical
/// subjects in front of the near plane, never NaN.
pub const FALLBACK_DISTANCE: f32 = 10.0;

/// Camera-space extents of a vertex set.
///
/// The camera looks down −Z: `width` spans X, `height` spans Y and
/// `depth` spans Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// maxX − minX in camera space
    pub width: f32,
    /// maxY − minY in camera space
    pub height: f32,
    /// maxZ − minZ in camera space
    pub depth: f32,
}

/// Transform vertices into camera-local space and measure their extents.
///
/// Returns `None` for an empty vertex set — the "no bounds" sentinel.
///
/// # Arguments
///
/// * `vertices` - World-space vertex set
/// * `view` - Inverse camera world transform
pub fn camera_space_extents(vertices: &[Vec3], view: &Mat4) -> Option<Extents> {
    let local: Vec<Vec3> = vertices
        .iter()
        .map(|v| view.transform_point3(*v))
        .collect();
    let bounds = Aabb::from_points(&local)?;
    let size = bounds.size();
    Some(Extents {
        width: size.x,
        height: size.y,
        depth: size.z,
    })
}

/// Estimate the camera distance that frames a vertex set.
///
/// `dist_w = (width/2) / tan(fov_x/2)` is the distance at which the set's
/// camera-space width exactly fills the horizontal FOV; `dist_h` likewise
/// for the vertical axis. The larger of the two wins, the half-depth is
/// added so the distance is measured from the set's center, and the
/// margin scales the result.
///
/// A degenerate FOV (`None`) or an empty vertex set yields
/// `FALLBACK_DISTANCE` unchanged — no division by zero, no NaN.
///
/// # Arguments
///
/// * `vertices` - World-space bounding vertex set
/// * `view` - Inverse camera world transform (rotation is what matters;
///   extents are translation-invariant)
/// * `fov` - Resolved FOV, or `None` when degenerate
/// * `margin` - Fractional frame border, in [−0.5, 0.95]
pub fn fit_distance(
    vertices: &[Vec3],
    view: &Mat4,
    fov: Option<&ResolvedFov>,
    margin: f32,
) -> f32 {
    let Some(fov) = fov else {
        return FALLBACK_DISTANCE;
    };
    let Some(extents) = camera_space_extents(vertices, view) else {
        return FALLBACK_DISTANCE;
    };
    if fov.tan_half_x <= 0.0 || fov.tan_half_y <= 0.0 {
        return FALLBACK_DISTANCE;
    }

    let dist_w = (extents.width * 0.5) / fov.tan_half_x;
    let dist_h = (extents.height * 0.5) / fov.tan_half_y;
    let required_xy = dist_w.max(dist_h);

    (required_xy + extents.depth * 0.5) * (1.0 + margin)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
