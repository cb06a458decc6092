//! R-tree over object bounding boxes.
//!
//! Narrows point and rect hit tests down to a handful of candidates. The
//! final answer always comes from the object's own selection test, so boxes
//! only need to be conservative.

use crate::geometry::{Point, Rect};
use crate::object::ObjectId;
use rstar::{AABB, RTree, RTreeObject};

/// An object's bounding box in content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: ObjectId,
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl SpatialEntry {
    pub fn new(id: ObjectId, bounds: Rect) -> Self {
        Self {
            id,
            min: [bounds.min_x(), bounds.min_y()],
            max: [bounds.max_x(), bounds.max_y()],
        }
    }

    /// True when `point` is inside the box grown by `range`.
    #[inline]
    pub fn contains_point(&self, point: Point, range: f64) -> bool {
        point.x >= self.min[0] - range
            && point.x <= self.max[0] + range
            && point.y >= self.min[1] - range
            && point.y <= self.max[1] + range
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Replaces the whole index with `items`.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (ObjectId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = items
            .into_iter()
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    /// Objects whose box, grown by `range`, contains `point`.
    pub fn query_point(&self, point: Point, range: f64) -> Vec<ObjectId> {
        let envelope = AABB::from_corners(
            [point.x - range, point.y - range],
            [point.x + range, point.y + range],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point, range))
            .map(|entry| entry.id)
            .collect()
    }

    /// Objects whose box intersects `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<ObjectId> {
        let rect = rect.standardized();
        let envelope =
            AABB::from_corners([rect.min_x(), rect.min_y()], [rect.max_x(), rect.max_y()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
