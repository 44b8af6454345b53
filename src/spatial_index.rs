//! R-tree index over object bounding boxes.
//!
//! Point and rectangle queries run in O(log n + k) instead of scanning every
//! object. All queries are inclusive: a point on an edge is inside, and
//! rectangles that only share a boundary intersect.

use crate::types::{ObjectId, Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// One object's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: ObjectId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(id: ObjectId, bounds: Rect) -> Self {
        Self { id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.left(), self.bounds.top()],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index keyed by object id.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ObjectId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: ObjectId, bounds: Rect) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(id, bounds);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of every entry containing the point, in no particular order.
    pub fn query_point(&self, p: Point) -> Vec<ObjectId> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(p))
            .map(|entry| entry.id)
            .collect()
    }

    /// Ids of every entry intersecting the rectangle, in no particular order.
    pub fn query_rect(&self, rect: &Rect) -> Vec<ObjectId> {
        let envelope = AABB::from_corners([rect.left(), rect.top()], [rect.right(), rect.bottom()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.intersects(rect))
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
