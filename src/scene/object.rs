/// Scene object and group types.
///
/// A SceneObject is a mesh-carrying node with a world transform and a
/// flags bitfield. Objects and groups are stored in SlotMaps with stable
/// keys; keys remain valid until their own entry is removed.

use glam::{Vec3, Mat4};
use slotmap::new_key_type;

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable key for a SceneObject within a Scene.
    pub struct ObjectKey;
}

new_key_type! {
    /// Stable key for a Group within a Scene.
    pub struct GroupKey;
}

// ===== FLAGS =====

/// Object participates in rendering and framing
pub const FLAG_VISIBLE: u64    = 1 << 0;
/// Object is explicitly opted out of camera framing
pub const FLAG_NO_FRAMING: u64 = 1 << 1;
// Bits 2-63 reserved for future extensions

// ===== SCENE OBJECT =====

/// A mesh object in the scene.
///
/// Holds rest-pose local-space vertices; deformed geometry is produced
/// on demand by a `framing::MeshEvaluator`. The world matrix places the
/// evaluated vertices in world space.
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    vertices: Vec<Vec3>,
    world_matrix: Mat4,
    flags: u64,
}

impl SceneObject {
    /// Create a new visible object with the given mesh and transform
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, world_matrix: Mat4) -> Self {
        Self {
            name: name.into(),
            vertices,
            world_matrix,
            flags: FLAG_VISIBLE,
        }
    }

    /// Object name (used for substring-based exclusion)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rest-pose local-space vertices
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// World transform matrix
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Set the world transform matrix
    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    /// Raw flags bitfield
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Test a flag bit (e.g. `FLAG_VISIBLE`)
    pub fn has_flag(&self, flag: u64) -> bool {
        self.flags & flag != 0
    }

    /// Set or clear a flag bit
    pub fn set_flag(&mut self, flag: u64, enabled: bool) {
        if enabled {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }
}

// ===== GROUP =====

/// A named collection of objects and child groups.
///
/// Groups form a tree; the framing engine walks the target group's
/// subtree recursively when collecting geometry.
#[derive(Debug, Clone, Default)]
pub struct Group {
    name: String,
    objects: Vec<ObjectKey>,
    children: Vec<GroupKey>,
}

impl Group {
    /// Create a new empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys of objects directly in this group
    pub fn objects(&self) -> &[ObjectKey] {
        &self.objects
    }

    /// Keys of direct child groups
    pub fn children(&self) -> &[GroupKey] {
        &self.children
    }

    pub(crate) fn add_object(&mut self, key: ObjectKey) {
        self.objects.push(key);
    }

    pub(crate) fn add_child(&mut self, key: GroupKey) {
        self.children.push(key);
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
