/// Projection math — FOV axis resolution and projection matrices.
///
/// A camera carries a single FOV angle plus a sensor-fit direction; the
/// missing axis is derived from the render aspect ratio. Both projection
/// builders produce right-handed matrices looking down −Z, matching the
/// camera-space convention used by the solver and containment check.

use glam::Mat4;

/// Which sensor axis the FOV angle applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorFit {
    /// Horizontal for landscape frames (aspect >= 1), vertical otherwise
    Auto,
    /// FOV angle spans the horizontal axis
    Horizontal,
    /// FOV angle spans the vertical axis
    Vertical,
}

impl SensorFit {
    /// Resolve `Auto` against an aspect ratio
    pub fn resolved(self, aspect: f32) -> SensorFit {
        match self {
            SensorFit::Auto => {
                if aspect >= 1.0 {
                    SensorFit::Horizontal
                } else {
                    SensorFit::Vertical
                }
            }
            other => other,
        }
    }
}

/// Field of view resolved to both axes.
///
/// Stored as half-angle tangents: every consumer (distance solver,
/// projection builder) works in tangent space, so the angles themselves
/// are never needed downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFov {
    /// tan(fov_x / 2)
    pub tan_half_x: f32,
    /// tan(fov_y / 2)
    pub tan_half_y: f32,
}

/// Derive both FOV axes from a single angle and a sensor-fit direction.
///
/// The missing axis comes from `tan(fov_other/2) = tan(fov_given/2) / aspect`
/// (horizontal fit) or `tan(fov_given/2) * aspect` (vertical fit).
///
/// Returns `None` for a degenerate FOV (non-positive, non-finite, or
/// >= half a turn) or a non-positive aspect; callers substitute their
/// documented fallback instead of dividing by zero.
pub fn resolve_fov(fov: f32, fit: SensorFit, aspect: f32) -> Option<ResolvedFov> {
    if !fov.is_finite() || fov <= 0.0 || fov >= std::f32::consts::PI {
        return None;
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return None;
    }

    let tan_half = (fov * 0.5).tan();
    let (tan_half_x, tan_half_y) = match fit.resolved(aspect) {
        SensorFit::Horizontal => (tan_half, tan_half / aspect),
        SensorFit::Vertical => (tan_half * aspect, tan_half),
        // resolved() never returns Auto
        SensorFit::Auto => unreachable!(),
    };

    Some(ResolvedFov { tan_half_x, tan_half_y })
}

/// Build a perspective projection matrix from a resolved FOV.
///
/// Uses the [-1, 1] depth range: the containment check tests
/// `-1 <= ndc.z <= 1` against the clip planes.
pub fn perspective_matrix(fov: &ResolvedFov, near: f32, far: f32) -> Mat4 {
    let fov_y = 2.0 * fov.tan_half_y.atan();
    let aspect = fov.tan_half_x / fov.tan_half_y;
    Mat4::perspective_rh_gl(fov_y, aspect, near, far)
}

/// Build an orthographic projection matrix.
///
/// Orthographic scale is defined horizontally: the view volume spans
/// `scale` world units left-to-right and `scale / aspect` bottom-to-top.
/// Same [-1, 1] depth range as `perspective_matrix`.
pub fn orthographic_matrix(scale: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let half_w = scale * 0.5;
    let half_h = half_w / aspect;
    Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, near, far)
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
