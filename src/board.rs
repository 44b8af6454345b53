//! The object store: every box on the canvas plus its spatial index.
//!
//! Objects are kept in creation order, so later entries paint on top of
//! earlier ones. Ids come from a monotonic counter, which makes "highest id"
//! and "most recently created" the same thing; hit testing relies on that
//! for its tie-break.
//!
//! Every mutation that changes geometry refreshes the object's index entry
//! immediately, so queries are always consistent with the object list.

use crate::constants::{MIN_BOX_HEIGHT, MIN_BOX_WIDTH};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasObject, ObjectContent, ObjectId, Point, Rect};
use std::collections::HashSet;
use tracing::{debug, info, trace};

#[derive(Debug)]
pub struct Board {
    /// Objects in creation (paint) order
    objects: Vec<CanvasObject>,
    /// Next id to hand out; never decreases
    next_id: u64,
    index: SpatialIndex,
    min_size: (f32, f32),
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_min_size(MIN_BOX_WIDTH, MIN_BOX_HEIGHT)
    }

    pub fn with_min_size(min_width: f32, min_height: f32) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
            index: SpatialIndex::new(),
            min_size: (min_width, min_height),
        }
    }

    #[inline]
    pub fn min_size(&self) -> (f32, f32) {
        self.min_size
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in paint order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &CanvasObject> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Create a text box from a drag that started at `anchor` and ended at
    /// `current` (both world coordinates).
    ///
    /// The anchor corner stays fixed. Each dimension is clamped to the
    /// minimum size, growing in the drag's direction, so a tiny or
    /// zero-area drag still produces a usable box.
    pub fn create(&mut self, anchor: Point, current: Point) -> &CanvasObject {
        let (x, width) = clamp_span(anchor.x, current.x, self.min_size.0);
        let (y, height) = clamp_span(anchor.y, current.y, self.min_size.1);

        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let object = CanvasObject {
            id,
            position: (x, y),
            size: (width, height),
            content: ObjectContent::default(),
            editing: true,
            error: None,
        };
        self.index.insert(id, object.bounds());
        info!(%id, x, y, width, height, "Created box");
        self.objects.push(object);

        let last = self.objects.len() - 1;
        &self.objects[last]
    }

    /// Set an object's size, clamped to the minimum. Unknown ids are ignored.
    pub fn resize(&mut self, id: ObjectId, width: f32, height: f32) -> bool {
        let (min_w, min_h) = self.min_size;
        let Some(object) = self.get_mut(id) else {
            trace!(%id, "Resize of missing object ignored");
            return false;
        };
        object.size = (width.max(min_w), height.max(min_h));
        let bounds = object.bounds();
        self.index.insert(id, bounds);
        true
    }

    /// Overwrite an object's position. The canvas is unbounded.
    pub fn move_to(&mut self, id: ObjectId, x: f32, y: f32) -> bool {
        let Some(object) = self.get_mut(id) else {
            return false;
        };
        object.position = (x, y);
        let bounds = object.bounds();
        self.index.insert(id, bounds);
        true
    }

    /// Replace an object's content. Clears any transient error note.
    pub fn set_content(&mut self, id: ObjectId, content: ObjectContent) -> bool {
        let Some(object) = self.get_mut(id) else {
            return false;
        };
        debug!(%id, kind = content.type_label(), "Content replaced");
        object.content = content;
        object.error = None;
        true
    }

    pub fn set_editing(&mut self, id: ObjectId, editing: bool) -> bool {
        match self.get_mut(id) {
            Some(object) => {
                object.editing = editing;
                true
            }
            None => false,
        }
    }

    /// Clear the editing flag on every object except `keep`.
    pub fn clear_editing_except(&mut self, keep: Option<ObjectId>) {
        for object in self.objects.iter_mut().filter(|o| Some(o.id) != keep) {
            object.editing = false;
        }
    }

    /// Ids of objects currently in editing mode.
    pub fn editing_ids(&self) -> Vec<ObjectId> {
        self.objects.iter().filter(|o| o.editing).map(|o| o.id).collect()
    }

    pub fn set_error(&mut self, id: ObjectId, message: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(object) => {
                object.error = Some(message.into());
                true
            }
            None => false,
        }
    }

    /// Remove every object whose id is in `ids`. Returns the ids actually
    /// removed. The caller must drop the same ids from the selection.
    pub fn delete(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let doomed: HashSet<ObjectId> = ids.iter().copied().collect();
        let mut removed = Vec::new();
        self.objects.retain(|o| {
            if doomed.contains(&o.id) {
                removed.push(o.id);
                false
            } else {
                true
            }
        });
        for id in &removed {
            self.index.remove(*id);
        }
        if !removed.is_empty() {
            info!(count = removed.len(), "Deleted boxes");
        }
        removed
    }

    /// Topmost object containing the world point (edges inclusive).
    /// Overlaps resolve to the most recently created object.
    pub fn hit_test(&self, p: Point) -> Option<ObjectId> {
        self.index.query_point(p).into_iter().max()
    }

    /// Every object whose bounds intersect `rect`, boundary contact
    /// included. Sorted by creation order.
    pub fn rect_intersect(&self, rect: &Rect) -> Vec<ObjectId> {
        let mut ids = self.index.query_rect(rect);
        ids.sort_unstable();
        ids
    }

    /// World-space rectangle of an object's resize handle: a square of
    /// `handle_px` screen pixels inside its bottom-right corner.
    pub fn handle_rect(&self, id: ObjectId, handle_px: f32, zoom: f32) -> Option<Rect> {
        let bounds = self.get(id)?.bounds();
        let side = handle_px / zoom;
        Some(Rect::new(bounds.right() - side, bounds.bottom() - side, side, side))
    }

    /// The object whose resize handle is under `p`, if the topmost object
    /// at `p` has a handle there and `has_handle` says it is showing one.
    pub fn resize_handle_at(
        &self,
        p: Point,
        handle_px: f32,
        zoom: f32,
        has_handle: impl Fn(ObjectId) -> bool,
    ) -> Option<ObjectId> {
        let top = self.hit_test(p)?;
        if !has_handle(top) {
            return None;
        }
        self.handle_rect(top, handle_px, zoom)
            .filter(|handle| handle.contains(p))
            .map(|_| top)
    }
}

/// Clamp one axis of a drag to `min`, keeping `anchor` fixed.
/// Returns `(start, length)`.
fn clamp_span(anchor: f32, current: f32, min: f32) -> (f32, f32) {
    let delta = current - anchor;
    let length = delta.abs().max(min);
    if delta < 0.0 {
        (anchor - length, length)
    } else {
        (anchor, length)
    }
}
