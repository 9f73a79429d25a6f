//! Framing module — the automatic camera-framing engine.
//!
//! Data flow: collector/exclusion filter → bounding volume →
//! {perspective solver ⇄ containment check} or {orthographic scale} →
//! visual centering shift → final camera state. A `FramingSession`
//! orchestrates one complete pass and owns the re-entrancy guard.

mod collector;
mod containment;
mod ortho;
mod session;
mod shift;
mod solver;

pub use collector::{
    ExclusionPredicate, ExclusionRule,
    MeshEvaluator, StaticMeshEvaluator,
    collect_vertices,
};
pub use containment::{contains_all, vertex_in_frame, W_EPSILON};
pub use ortho::{fit_scale, ORTHO_DISTANCE_FACTOR};
pub use session::{
    FramingContext, FramingOutcome, FramingReport, FramingRequest,
    FramingSession, SceneRefresh, NoOpRefresh,
    MAX_ATTEMPTS, MARGIN_STEP, MARGIN_CEILING,
};
pub use shift::visual_center_shift;
pub use solver::{fit_distance, camera_space_extents, Extents, FALLBACK_DISTANCE};
