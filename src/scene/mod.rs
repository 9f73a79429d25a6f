//! Scene data model module
//!
//! Provides the minimal scene substrate the framing engine operates on:
//! mesh objects with world transforms, recursive groups, and axis-aligned
//! bounding volumes. The scene is read-only during a framing pass.

mod aabb;
mod object;
mod scene;

pub use aabb::Aabb;
pub use object::{
    SceneObject, ObjectKey, GroupKey, Group,
    FLAG_VISIBLE, FLAG_NO_FRAMING,
};
pub use scene::Scene;
