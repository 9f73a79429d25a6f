/// Scene — a collection of objects organized in a group tree.
///
/// Uses SlotMaps for O(1) insert/remove with stable keys.
/// The framing engine only ever reads from the scene; all queries here
/// are non-mutating. Mutation is reserved for scene construction by the
/// host application.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use super::object::{SceneObject, ObjectKey, Group, GroupKey};

/// A scene containing mesh objects and a group hierarchy.
///
/// Objects and groups are managed via stable keys. Keys remain valid
/// even after other entries are removed.
#[derive(Debug, Default)]
pub struct Scene {
    /// Mesh objects stored in a slot map for O(1) insert/remove
    objects: SlotMap<ObjectKey, SceneObject>,
    /// Groups stored in a slot map; tree edges live in the groups
    groups: SlotMap<GroupKey, Group>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            groups: SlotMap::with_key(),
        }
    }

    /// Add an object to the scene and return its stable key
    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Add a group to the scene and return its stable key
    pub fn add_group(&mut self, group: Group) -> GroupKey {
        self.groups.insert(group)
    }

    /// Place an object inside a group. Returns false if either key is invalid.
    pub fn attach_object(&mut self, group: GroupKey, object: ObjectKey) -> bool {
        if !self.objects.contains_key(object) {
            return false;
        }
        match self.groups.get_mut(group) {
            Some(g) => {
                g.add_object(object);
                true
            }
            None => false,
        }
    }

    /// Place a group inside a parent group. Returns false if either key is invalid.
    pub fn attach_group(&mut self, parent: GroupKey, child: GroupKey) -> bool {
        if !self.groups.contains_key(child) {
            return false;
        }
        match self.groups.get_mut(parent) {
            Some(g) => {
                g.add_child(child);
                true
            }
            None => false,
        }
    }

    /// Get an object by key
    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by key
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Get a group by key
    pub fn group(&self, key: GroupKey) -> Option<&Group> {
        self.groups.get(key)
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Collect the keys of all objects in a group's subtree (recursive).
    ///
    /// Objects reachable through multiple paths are reported once.
    /// An invalid group key yields an empty result.
    pub fn objects_in_subtree(&self, root: GroupKey) -> Vec<ObjectKey> {
        let mut seen: FxHashSet<ObjectKey> = FxHashSet::default();
        let mut visited_groups: FxHashSet<GroupKey> = FxHashSet::default();
        let mut out = Vec::new();
        self.walk_subtree(root, &mut seen, &mut visited_groups, &mut out);
        out
    }

    /// Test whether an object belongs to a group's subtree (recursive).
    pub fn subtree_contains(&self, root: GroupKey, object: ObjectKey) -> bool {
        self.objects_in_subtree(root).contains(&object)
    }

    fn walk_subtree(
        &self,
        group: GroupKey,
        seen: &mut FxHashSet<ObjectKey>,
        visited_groups: &mut FxHashSet<GroupKey>,
        out: &mut Vec<ObjectKey>,
    ) {
        // Guard against cycles introduced by host-side graph edits
        if !visited_groups.insert(group) {
            return;
        }
        let Some(g) = self.groups.get(group) else {
            return;
        };
        for &key in g.objects() {
            if seen.insert(key) {
                out.push(key);
            }
        }
        for &child in g.children() {
            self.walk_subtree(child, seen, visited_groups, out);
        }
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
