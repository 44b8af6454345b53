//! Selection model: the set of currently selected objects.
//!
//! Insertion order carries no meaning. Keeping every id pointing at a live
//! object is the caller's job; [`crate::app::CanvasApp`] removes deleted ids
//! in the same call that deletes the objects.

use crate::types::ObjectId;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: HashSet<ObjectId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly `id`.
    pub fn select_only(&mut self, id: ObjectId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Add `id` if absent, remove it if present (shift-click).
    pub fn toggle(&mut self, id: ObjectId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Replace the selection wholesale, e.g. after a selection rectangle.
    pub fn set_from_rect(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.selected = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop every id in `ids`. Returns how many were actually selected.
    pub fn remove_many(&mut self, ids: &[ObjectId]) -> usize {
        ids.iter().filter(|id| self.selected.remove(id)).count()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.selected.iter().copied()
    }

    /// Selected ids in creation order (ascending id).
    pub fn sorted(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.iter().collect();
        ids.sort_unstable();
        ids
    }
}
