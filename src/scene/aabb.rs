/// Axis-aligned bounding volume for framing.
///
/// Computed fresh from the collected world-space vertices on every
/// framing pass. An empty vertex set has no bounds: `from_points`
/// returns `None` rather than a degenerate zero-size box, so callers
/// must handle the sentinel explicitly.

use glam::Vec3;

/// Axis-Aligned Bounding Box in world space
///
/// Invariant: `min <= max` componentwise. Guaranteed by construction —
/// the only way to obtain an `Aabb` from geometry is `from_points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Compute the bounding box of a point set.
    ///
    /// Returns `None` for an empty set — the explicit "no bounds"
    /// sentinel, distinct from a zero-size box at the origin.
    pub fn from_points(points: &[Vec3]) -> Option<Aabb> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Aabb { min, max })
    }

    /// Geometric center: `(min + max) / 2`
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis: `max - min`
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
