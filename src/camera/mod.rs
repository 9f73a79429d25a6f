//! Camera module — camera state, pivot transform, and projection math.
//!
//! Provides passive data containers plus the projection utilities the
//! framing engine needs. The engine does NOT own cameras — they are
//! tools provided by the crate, owned and driven by the caller and
//! mutated in place during a framing pass.

mod camera;
mod projection;

pub use camera::{CameraState, PivotTransform, ProjectionKind, RenderSettings};
pub use projection::{
    SensorFit, ResolvedFov,
    resolve_fov, perspective_matrix, orthographic_matrix,
};
