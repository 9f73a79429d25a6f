/// Camera state — low-level passive data container.
///
/// The CameraState computes nothing beyond its own matrices. The framing
/// engine computes placement and optical values and writes them back
/// here; only transform and optical values persist across passes.

use glam::{Mat4, Quat, Vec2, Vec3};
use super::projection::SensorFit;

/// Projection type of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Perspective projection driven by a field-of-view angle
    Perspective,
    /// Orthographic projection driven by a horizontal scale
    Orthographic,
}

/// Camera intrinsic and extrinsic state, owned by the caller.
///
/// The camera looks down its local −Z axis; `rotation * +Z` points from
/// the subject back toward the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// World-space location
    pub location: Vec3,
    /// World-space orientation (view-direction basis)
    pub rotation: Quat,
    /// Projection type
    pub projection: ProjectionKind,
    /// Field-of-view angle in radians for the sensor-fit axis
    pub fov: f32,
    /// Which axis the FOV angle applies to
    pub sensor_fit: SensorFit,
    /// Orthographic scale (horizontal view extent)
    pub ortho_scale: f32,
    /// Optical shift in normalized screen units (x, y)
    pub shift: Vec2,
    /// Near clipping plane distance
    pub clip_near: f32,
    /// Far clipping plane distance
    pub clip_far: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            projection: ProjectionKind::Perspective,
            fov: 50.0_f32.to_radians(),
            sensor_fit: SensorFit::Auto,
            ortho_scale: 1.0,
            shift: Vec2::ZERO,
            clip_near: 0.1,
            clip_far: 1000.0,
        }
    }
}

impl CameraState {
    /// World transform matrix (rotation + translation)
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.location)
    }

    /// View matrix (inverse of the world transform)
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Unit vector pointing from the subject back toward the camera
    /// (local +Z in world space)
    pub fn back_axis(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Pivot/controller transform.
///
/// Its rotation sets the view direction; its location tracks the framed
/// subject's bounding-box center. The framing engine copies the rotation
/// onto the camera and writes the center into the location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotTransform {
    /// World-space location (bounding-box center after a pass)
    pub location: Vec3,
    /// World-space orientation copied onto the camera
    pub rotation: Quat,
}

impl Default for PivotTransform {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Render output settings, read-only for the framing engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Output width in pixels
    pub resolution_x: u32,
    /// Output height in pixels
    pub resolution_y: u32,
    /// Resolution scale percentage (100.0 = full resolution)
    pub scale_percent: f32,
}

impl RenderSettings {
    /// Create render settings at 100% scale
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            resolution_x,
            resolution_y,
            scale_percent: 100.0,
        }
    }

    /// Effective aspect ratio (scaled width / scaled height).
    ///
    /// The scale percentage applies to both axes, so it cancels out for
    /// any valid resolution; it still participates so that a host
    /// driving per-axis overrides later keeps a single code path.
    pub fn aspect(&self) -> f32 {
        let w = self.resolution_x as f32 * (self.scale_percent / 100.0);
        let h = self.resolution_y as f32 * (self.scale_percent / 100.0);
        if h <= 0.0 {
            1.0
        } else {
            w / h
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
