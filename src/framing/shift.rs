/// Visual centering shifter.
///
/// After the distance (or orthographic scale) is fixed, the projected
/// silhouette is usually off-center: the solver fits extents, not the
/// optical axis. The shifter measures the projected bounds in screen
/// space and computes the sensor shift that re-centers them, without
/// moving the camera.

use glam::{Mat4, Vec2, Vec3, Vec4};
use super::containment::W_EPSILON;

/// Compute the optical shift that centers the projected vertex set.
///
/// Projects every vertex into normalized 0..1 screen space (origin
/// bottom-left), takes the midpoint of the projected bounds, and returns
/// `(−(centerX − 0.5), −(centerY − 0.5))`. Derived from absolute
/// projected positions only — applying it twice yields the same value,
/// never an accumulated drift. Callers reset the camera's shift to zero
/// before recomputing.
///
/// Vertices with a degenerate w are skipped; returns `None` when no
/// vertex survives projection (the shift then stays zero).
pub fn visual_center_shift(vertices: &[Vec3], clip_from_world: &Mat4) -> Option<Vec2> {
    let mut min = Vec2::INFINITY;
    let mut max = Vec2::NEG_INFINITY;
    let mut any = false;

    for v in vertices {
        let clip = *clip_from_world * Vec4::new(v.x, v.y, v.z, 1.0);
        if clip.w.abs() <= W_EPSILON {
            continue;
        }
        let ndc = clip.truncate() / clip.w;
        // NDC [-1, 1] → screen [0, 1], origin bottom-left
        let screen = Vec2::new(ndc.x, ndc.y) * 0.5 + Vec2::splat(0.5);
        min = min.min(screen);
        max = max.max(screen);
        any = true;
    }

    if !any {
        return None;
    }

    let visual_center = (min + max) * 0.5;
    Some(Vec2::new(
        -(visual_center.x - 0.5),
        -(visual_center.y - 0.5),
    ))
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
