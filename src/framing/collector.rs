/// Geometry collector and exclusion filter.
///
/// Gathers world-space vertices from every visible mesh object in the
/// target group (recursive), using evaluated (post-deformation)
/// geometry. Strictly read-only over the scene. A per-object evaluation
/// failure is logged and skipped; it never aborts the pass.

use glam::Vec3;
use crate::engine_warn;
use crate::error::FramingResult;
use crate::scene::{Scene, SceneObject, ObjectKey, GroupKey, FLAG_VISIBLE, FLAG_NO_FRAMING};

// ===== EXCLUSION =====

/// A single exclusion criterion, evaluated per object.
///
/// Explicit typed variants instead of ad hoc custom-property probing:
/// each variant names exactly one way an object can opt out of framing.
#[derive(Debug, Clone)]
pub enum ExclusionPredicate {
    /// Object belongs to the given group's subtree
    GroupMembership(GroupKey),
    /// Object carries the `FLAG_NO_FRAMING` flag
    ExplicitFlag,
    /// Object name contains this substring (case-insensitive)
    NamePattern(String),
}

/// Read-only exclusion rule: predicates combined by logical OR.
///
/// An object is excluded as soon as ANY predicate matches.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRule {
    predicates: Vec<ExclusionPredicate>,
}

impl ExclusionRule {
    /// Rule that excludes nothing
    pub fn none() -> Self {
        Self { predicates: Vec::new() }
    }

    /// Build a rule from a list of predicates
    pub fn new(predicates: Vec<ExclusionPredicate>) -> Self {
        Self { predicates }
    }

    /// Append a predicate to the rule
    pub fn with(mut self, predicate: ExclusionPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Predicates in evaluation order
    pub fn predicates(&self) -> &[ExclusionPredicate] {
        &self.predicates
    }

    /// Test whether an object is excluded from framing.
    pub fn excludes(&self, scene: &Scene, key: ObjectKey, object: &SceneObject) -> bool {
        self.predicates.iter().any(|p| match p {
            ExclusionPredicate::GroupMembership(group) => {
                scene.subtree_contains(*group, key)
            }
            ExclusionPredicate::ExplicitFlag => object.has_flag(FLAG_NO_FRAMING),
            ExclusionPredicate::NamePattern(pattern) => {
                object.name().to_lowercase().contains(&pattern.to_lowercase())
            }
        })
    }
}

// ===== MESH EVALUATION =====

/// Source of evaluated (post-deformation) geometry for an object.
///
/// The host owns modifier/deformer evaluation; the framing engine only
/// consumes the result. Implementations return local-space vertices;
/// failures are per-object and non-fatal to the pass.
pub trait MeshEvaluator {
    /// Produce the evaluated local-space vertices of an object.
    fn evaluated_vertices(&self, object: &SceneObject) -> FramingResult<Vec<Vec3>>;
}

/// Evaluator for static scenes — returns the stored rest-pose mesh.
pub struct StaticMeshEvaluator;

impl MeshEvaluator for StaticMeshEvaluator {
    fn evaluated_vertices(&self, object: &SceneObject) -> FramingResult<Vec<Vec3>> {
        Ok(object.vertices().to_vec())
    }
}

// ===== COLLECTION =====

/// Collect world-space vertices from a group's subtree.
///
/// Walks the target group recursively; an object contributes iff it is
/// visible and no exclusion predicate matches. Evaluated vertices are
/// transformed by the object's world matrix.
///
/// Returns the flat vertex list and the number of objects skipped due
/// to mesh-evaluation failures.
///
/// # Arguments
///
/// * `scene` - Scene to read from (never mutated)
/// * `group` - Root of the target group subtree
/// * `rule` - Exclusion rule, evaluated per object
/// * `evaluator` - Source of evaluated geometry
pub fn collect_vertices(
    scene: &Scene,
    group: GroupKey,
    rule: &ExclusionRule,
    evaluator: &dyn MeshEvaluator,
) -> (Vec<Vec3>, usize) {
    let mut vertices = Vec::new();
    let mut skipped = 0usize;

    for key in scene.objects_in_subtree(group) {
        let Some(object) = scene.object(key) else {
            continue;
        };
        if !object.has_flag(FLAG_VISIBLE) {
            continue;
        }
        if rule.excludes(scene, key, object) {
            continue;
        }

        match evaluator.evaluated_vertices(object) {
            Ok(local) => {
                let world = object.world_matrix();
                vertices.extend(local.iter().map(|v| world.transform_point3(*v)));
            }
            Err(e) => {
                engine_warn!(
                    "autoframe::Collector",
                    "Skipping object '{}': {}", object.name(), e
                );
                skipped += 1;
            }
        }
    }

    (vertices, skipped)
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
