/// Orthographic scale calculator.
///
/// Orthographic framing is closed-form: apparent size does not depend
/// on distance, so no iteration is needed. Distance only matters for
/// clip-plane avoidance — the session stands the camera off at
/// `ORTHO_DISTANCE_FACTOR` times the bounding diagonal.

use glam::{Mat4, Vec3};
use super::solver::camera_space_extents;

/// Camera standoff along the view axis, as a multiple of the bounding
/// diagonal. Keeps the subject clear of both clip planes; has no effect
/// on framing.
pub const ORTHO_DISTANCE_FACTOR: f32 = 2.5;

/// Compute the orthographic scale that frames a vertex set.
///
/// `scale = max(width, height × aspect) × (1 + margin)`. The aspect
/// correction on height is required because orthographic scale is
/// defined horizontally; without it, non-square frames clip vertically
/// or waste horizontal margin.
///
/// Empty or degenerate geometry yields the `1 × (1 + margin)` fallback.
///
/// # Arguments
///
/// * `vertices` - World-space bounding vertex set
/// * `view` - Inverse camera world transform
/// * `aspect` - Render aspect ratio (width / height)
/// * `margin` - Fractional frame border, in [−0.5, 0.95]
pub fn fit_scale(vertices: &[Vec3], view: &Mat4, aspect: f32, margin: f32) -> f32 {
    let fallback = 1.0 * (1.0 + margin);
    let Some(extents) = camera_space_extents(vertices, view) else {
        return fallback;
    };
    if !aspect.is_finite() || aspect <= 0.0 {
        return fallback;
    }

    let scale = extents.width.max(extents.height * aspect) * (1.0 + margin);
    if scale > 0.0 && scale.is_finite() {
        scale
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "ortho_tests.rs"]
mod tests;
