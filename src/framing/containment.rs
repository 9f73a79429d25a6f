/// Frustum containment check.
///
/// Verifies that every bounding vertex projects inside the margin-shrunk
/// render frame. Works in NDC after a full clip-space projection, so the
/// same check serves perspective and orthographic cameras. Drives the
/// session's iterative refinement when the solver's estimate falls short.

use glam::{Mat4, Vec3, Vec4};

/// Threshold below which a clip-space w is treated as degenerate.
pub const W_EPSILON: f32 = 1e-6;

/// Test a single vertex against the margin-shrunk frame.
///
/// `clip_from_world` is `projection_matrix × view_matrix`. The vertex
/// passes iff `−(1−margin) ≤ ndc.x ≤ 1−margin`, same for y, and
/// `−1 ≤ ndc.z ≤ 1`.
///
/// A vertex whose |w| is numerically ~0 sits on the camera plane; it is
/// treated as FAILING so that refinement pushes the camera back rather
/// than accepting a placement that cannot be projected.
pub fn vertex_in_frame(vertex: Vec3, clip_from_world: &Mat4, margin: f32) -> bool {
    let clip = *clip_from_world * Vec4::new(vertex.x, vertex.y, vertex.z, 1.0);
    if clip.w.abs() <= W_EPSILON {
        return false;
    }

    let ndc = clip.truncate() / clip.w;
    let limit = 1.0 - margin;
    ndc.x >= -limit && ndc.x <= limit
        && ndc.y >= -limit && ndc.y <= limit
        && ndc.z >= -1.0 && ndc.z <= 1.0
}

/// Test whether every vertex lies inside the margin-shrunk frame.
///
/// Trivially true for an empty set — emptiness is handled upstream by
/// the collector, not here.
pub fn contains_all(vertices: &[Vec3], clip_from_world: &Mat4, margin: f32) -> bool {
    vertices
        .iter()
        .all(|v| vertex_in_frame(*v, clip_from_world, margin))
}

#[cfg(test)]
#[path = "containment_tests.rs"]
mod tests;
