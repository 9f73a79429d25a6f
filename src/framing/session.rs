/// Framing session — orchestrates one complete framing pass.
///
/// Pipeline: collect → bounds → solve (perspective, with iterative
/// containment refinement) or scale (orthographic, closed-form) →
/// centering shift. Mutation is in-place on the caller's camera and
/// pivot; the pass is not transactional (callers needing exact rollback
/// snapshot `CameraState`/`PivotTransform` beforehand). The EmptyGeometry
/// abort provably mutates nothing because collection precedes all writes.

use std::cell::Cell;
use glam::{Mat4, Vec2, Vec3};
use crate::{engine_debug, engine_info, engine_warn};
use crate::camera::{
    CameraState, PivotTransform, ProjectionKind, RenderSettings,
    resolve_fov, perspective_matrix, orthographic_matrix,
};
use crate::error::{FramingError, FramingResult};
use crate::scene::{Aabb, Scene, GroupKey};
use super::collector::{collect_vertices, ExclusionRule, MeshEvaluator};
use super::containment::contains_all;
use super::ortho::{fit_scale, ORTHO_DISTANCE_FACTOR};
use super::shift::visual_center_shift;
use super::solver::{fit_distance, FALLBACK_DISTANCE};

// ===== CONSTANTS =====

/// Total placement attempts for the perspective refinement loop
pub const MAX_ATTEMPTS: u32 = 5;
/// Margin increment applied after a failed containment check
pub const MARGIN_STEP: f32 = 0.1;
/// Upper bound for refinement-grown margins
pub const MARGIN_CEILING: f32 = 0.5;

/// Valid request margin range
const MARGIN_MIN: f32 = -0.5;
const MARGIN_MAX: f32 = 0.95;

const SOURCE: &str = "autoframe::Session";

// ===== REQUEST / REPORT =====

/// Parameters of one framing invocation. Immutable for the pass.
#[derive(Debug, Clone)]
pub struct FramingRequest {
    /// Root of the group subtree to frame
    pub target_group: GroupKey,
    /// Fractional frame border, clamped to [−0.5, 0.95]
    pub margin: f32,
    /// Frame orthographically even if the camera is perspective
    pub force_orthographic: bool,
    /// Label carried into log lines (e.g. "front", "turntable_030")
    pub view_tag: String,
}

/// How a framing pass finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FramingOutcome {
    /// Perspective estimate passed the containment check
    Converged {
        /// Placement attempts used (1 = first estimate held)
        iterations: u32,
    },
    /// All attempts failed containment; last placement kept
    IterationBudgetExhausted {
        /// Margin in effect on the final attempt
        final_margin: f32,
    },
    /// Orthographic path: closed-form, no iteration
    OrthographicFit,
    /// FOV was degenerate; camera placed at the fallback distance
    DegenerateProjection,
}

/// Result of a completed framing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FramingReport {
    /// How the pass finished
    pub outcome: FramingOutcome,
    /// World-space vertices considered
    pub vertex_count: usize,
    /// Objects skipped due to mesh-evaluation failures
    pub skipped_objects: usize,
    /// Final camera distance from the bounding-box center
    pub distance: f32,
    /// Final optical shift written to the camera
    pub shift: Vec2,
}

// ===== SCENE REFRESH BARRIER =====

/// Scene-update barrier between a placement attempt and its check.
///
/// Hosts with dependency graphs (drivers, constraints, deformers that
/// read the camera) must flush them here so the containment check sees
/// the world as it will render.
pub trait SceneRefresh {
    /// Force dependent transforms and evaluated meshes to refresh.
    fn refresh(&mut self);
}

/// No-op barrier — for pure-data scenes with nothing camera-dependent.
pub struct NoOpRefresh;

impl SceneRefresh for NoOpRefresh {
    fn refresh(&mut self) {}
}

// ===== CONTEXT =====

/// Everything a framing pass reads and writes, borrowed for one call.
pub struct FramingContext<'a> {
    /// Scene to frame (read-only)
    pub scene: &'a Scene,
    /// Camera mutated in place
    pub camera: &'a mut CameraState,
    /// Pivot mutated in place (location ← bounds center)
    pub pivot: &'a mut PivotTransform,
    /// Invocation parameters
    pub request: &'a FramingRequest,
    /// Exclusion rule evaluated per object
    pub rule: &'a ExclusionRule,
    /// Render output settings (aspect ratio)
    pub settings: &'a RenderSettings,
    /// Source of evaluated geometry
    pub evaluator: &'a dyn MeshEvaluator,
    /// Scene-update barrier
    pub refresh: &'a mut dyn SceneRefresh,
}

// ===== SESSION =====

/// RAII release of the session's re-entrancy flag.
struct PassGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// A framing session owned by the caller's context.
///
/// Owns the re-entrancy flag: a `run` re-entered from a callback fired
/// mid-pass (e.g. a host frame-change handler reacting to the camera
/// move) returns `PassInProgress` instead of corrupting the pass. The
/// flag is released on every exit path via an RAII guard, never left
/// dangling by an early return.
#[derive(Debug, Default)]
pub struct FramingSession {
    pass_active: Cell<bool>,
}

impl FramingSession {
    /// Create a new idle session
    pub fn new() -> Self {
        Self {
            pass_active: Cell::new(false),
        }
    }

    /// Whether a pass is currently running on this session
    pub fn is_running(&self) -> bool {
        self.pass_active.get()
    }

    fn acquire(&self) -> FramingResult<PassGuard<'_>> {
        if self.pass_active.replace(true) {
            return Err(FramingError::PassInProgress);
        }
        Ok(PassGuard {
            flag: &self.pass_active,
        })
    }

    /// Run one complete framing pass.
    ///
    /// On success the camera holds its final location, rotation and
    /// optical values, and the pivot tracks the bounding-box center.
    /// Soft failures (degenerate FOV, exhausted iteration budget) still
    /// produce a completed placement; they are reported in the outcome,
    /// never raised.
    ///
    /// # Errors
    ///
    /// * `EmptyGeometry` - no eligible vertices; camera and pivot untouched
    /// * `PassInProgress` - re-entered while a pass is running
    pub fn run(&self, ctx: FramingContext<'_>) -> FramingResult<FramingReport> {
        let _guard = self.acquire()?;

        let request = ctx.request;
        let margin = request.margin.clamp(MARGIN_MIN, MARGIN_MAX);
        let aspect = ctx.settings.aspect();

        engine_debug!(
            SOURCE,
            "Framing pass [view:{}] margin={} aspect={}",
            request.view_tag, margin, aspect
        );

        // Collection happens before any mutation: an empty result must
        // leave camera and pivot exactly as they were.
        let (vertices, skipped) = collect_vertices(
            ctx.scene,
            request.target_group,
            ctx.rule,
            ctx.evaluator,
        );
        let Some(bounds) = Aabb::from_points(&vertices) else {
            engine_warn!(
                SOURCE,
                "Framing pass [view:{}] aborted: no eligible geometry",
                request.view_tag
            );
            return Err(FramingError::EmptyGeometry);
        };

        let center = bounds.center();
        ctx.pivot.location = center;
        ctx.camera.rotation = ctx.pivot.rotation;

        let orthographic = request.force_orthographic
            || ctx.camera.projection == ProjectionKind::Orthographic;

        let (outcome, distance, clip_from_world) = if orthographic {
            Self::run_orthographic(
                &request.view_tag,
                &mut *ctx.camera,
                &mut *ctx.refresh,
                &vertices,
                &bounds,
                aspect,
                margin,
            )
        } else {
            Self::run_perspective(
                &request.view_tag,
                &mut *ctx.camera,
                &mut *ctx.refresh,
                &vertices,
                center,
                aspect,
                margin,
            )
        };

        // Reset before recomputing: the shift is absolute, any prior
        // value would otherwise leak into repeated invocations.
        ctx.camera.shift = Vec2::ZERO;
        if let Some(shift) = visual_center_shift(&vertices, &clip_from_world) {
            ctx.camera.shift = shift;
        }

        Ok(FramingReport {
            outcome,
            vertex_count: vertices.len(),
            skipped_objects: skipped,
            distance,
            shift: ctx.camera.shift,
        })
    }

    /// Orthographic path: standoff placement + closed-form scale.
    fn run_orthographic(
        view_tag: &str,
        camera: &mut CameraState,
        refresh: &mut dyn SceneRefresh,
        vertices: &[Vec3],
        bounds: &Aabb,
        aspect: f32,
        margin: f32,
    ) -> (FramingOutcome, f32, Mat4) {
        camera.projection = ProjectionKind::Orthographic;

        // Distance avoids clip-plane issues only; it cannot affect the
        // framing itself.
        let distance = ORTHO_DISTANCE_FACTOR * bounds.diagonal();
        camera.location = bounds.center() + camera.back_axis() * distance;
        refresh.refresh();

        let scale = fit_scale(vertices, &camera.view_matrix(), aspect, margin);
        camera.ortho_scale = scale;

        engine_info!(
            SOURCE,
            "Framing pass [view:{}] orthographic fit: scale={} distance={}",
            view_tag, scale, distance
        );

        let projection = orthographic_matrix(scale, aspect, camera.clip_near, camera.clip_far);
        (
            FramingOutcome::OrthographicFit,
            distance,
            projection * camera.view_matrix(),
        )
    }

    /// Perspective path: estimate, verify, refine up to `MAX_ATTEMPTS`.
    fn run_perspective(
        view_tag: &str,
        camera: &mut CameraState,
        refresh: &mut dyn SceneRefresh,
        vertices: &[Vec3],
        center: Vec3,
        aspect: f32,
        margin: f32,
    ) -> (FramingOutcome, f32, Mat4) {
        let Some(fov) = resolve_fov(camera.fov, camera.sensor_fit, aspect) else {
            engine_warn!(
                SOURCE,
                "Framing pass [view:{}] degenerate FOV {}; using fallback distance",
                view_tag, camera.fov
            );
            camera.location = center + camera.back_axis() * FALLBACK_DISTANCE;
            refresh.refresh();
            // Identity FOV stand-in so the shifter still has a projection
            // to center with; 90° on both axes.
            let fallback = crate::camera::ResolvedFov {
                tan_half_x: 1.0,
                tan_half_y: 1.0,
            };
            let projection =
                perspective_matrix(&fallback, camera.clip_near, camera.clip_far);
            return (
                FramingOutcome::DegenerateProjection,
                FALLBACK_DISTANCE,
                projection * camera.view_matrix(),
            );
        };

        // Extents are translation-invariant: a rotation-only view is
        // enough for the estimate, the camera is not yet placed.
        let orientation_view = Mat4::from_quat(camera.rotation.inverse());
        let projection = perspective_matrix(&fov, camera.clip_near, camera.clip_far);

        let mut m = margin;
        let mut distance = FALLBACK_DISTANCE;
        let mut clip_from_world = projection * camera.view_matrix();

        for attempt in 1..=MAX_ATTEMPTS {
            distance = fit_distance(vertices, &orientation_view, Some(&fov), m);
            camera.location = center + camera.back_axis() * distance;
            refresh.refresh();

            clip_from_world = projection * camera.view_matrix();
            if contains_all(vertices, &clip_from_world, m) {
                engine_info!(
                    SOURCE,
                    "Framing pass [view:{}] converged in {} attempt(s): distance={}",
                    view_tag, attempt, distance
                );
                return (
                    FramingOutcome::Converged { iterations: attempt },
                    distance,
                    clip_from_world,
                );
            }

            if attempt < MAX_ATTEMPTS {
                m = (m + MARGIN_STEP).min(MARGIN_CEILING);
            }
        }

        engine_warn!(
            SOURCE,
            "Framing pass [view:{}] iteration budget exhausted at margin {}; keeping last placement",
            view_tag, m
        );
        (
            FramingOutcome::IterationBudgetExhausted { final_margin: m },
            distance,
            clip_from_world,
        )
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
