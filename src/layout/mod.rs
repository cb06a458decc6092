//! Two-level ordered point storage shared by every drawable object.
//!
//! An [`ObjectLayout`] is a list of sections, each a list of points. Shapes
//! decide how sections are interpreted (one ring of a polygon, one stroke of a
//! scribble); the layout itself only guarantees ordering and addressing.

mod action;

pub use action::LayoutAction;

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Zero-based address of a point inside an [`ObjectLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub section: usize,
    pub item: usize,
}

impl Position {
    pub const ZERO: Position = Position {
        section: 0,
        item: 0,
    };

    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Ordered sections of ordered points.
///
/// No section is empty: removing the last point of a section removes the
/// section. Points are never reordered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectLayout {
    sections: Vec<Vec<Point>>,
}

impl ObjectLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sections(sections: Vec<Vec<Point>>) -> Self {
        let sections = sections.into_iter().filter(|s| !s.is_empty()).collect();
        Self { sections }
    }

    /// Appends to the last section, opening one when the layout is empty.
    pub fn push(&mut self, point: Point) {
        match self.sections.last_mut() {
            Some(section) => section.push(point),
            None => self.sections.push(vec![point]),
        }
    }

    /// Opens a new section holding only `point`.
    pub fn push_section(&mut self, point: Point) {
        self.sections.push(vec![point]);
    }

    /// Replaces the point at `position`.
    ///
    /// # Panics
    /// When `position` is out of bounds.
    pub fn update(&mut self, point: Point, position: Position) {
        self.sections[position.section][position.item] = point;
    }

    /// Removes the last point, dropping its section if it becomes empty.
    pub fn pop(&mut self) -> Option<Point> {
        let section = self.sections.last_mut()?;
        let point = section.pop();
        if section.is_empty() {
            self.sections.pop();
        }
        point
    }

    pub fn pop_section(&mut self) -> Option<Vec<Point>> {
        self.sections.pop()
    }

    /// # Panics
    /// When `position` is out of bounds.
    pub fn item(&self, position: Position) -> Point {
        self.sections[position.section][position.item]
    }

    pub fn get(&self, position: Position) -> Option<Point> {
        self.sections
            .get(position.section)
            .and_then(|s| s.get(position.item))
            .copied()
    }

    pub fn contains_position(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Position of the last point of the last section.
    pub fn last_position(&self) -> Option<Position> {
        let section = self.sections.len().checked_sub(1)?;
        let item = self.sections[section].len().checked_sub(1)?;
        Some(Position::new(section, item))
    }

    /// Number of sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&[Point]> {
        self.sections.get(index).map(Vec::as_slice)
    }

    pub fn first(&self) -> Option<&[Point]> {
        self.sections.first().map(Vec::as_slice)
    }

    pub fn last(&self) -> Option<&[Point]> {
        self.sections.last().map(Vec::as_slice)
    }

    pub fn sections(&self) -> &[Vec<Point>] {
        &self.sections
    }

    /// Total number of points across all sections.
    pub fn point_count(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Point count of each section, in order.
    pub fn section_sizes(&self) -> Vec<usize> {
        self.sections.iter().map(Vec::len).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Point>> {
        self.sections.iter()
    }

    /// Every point with its position, in layout order.
    pub fn positions(&self) -> impl Iterator<Item = (Position, Point)> + '_ {
        self.sections.iter().enumerate().flat_map(|(section, points)| {
            points
                .iter()
                .enumerate()
                .map(move |(item, p)| (Position::new(section, item), *p))
        })
    }

    /// Every point of the layout, flattened.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.sections.iter().flatten().copied()
    }

    /// Applies `f` to every point in place.
    pub fn map_points(&mut self, mut f: impl FnMut(Point) -> Point) {
        for point in self.sections.iter_mut().flatten() {
            *point = f(*point);
        }
    }
}

impl<'a> IntoIterator for &'a ObjectLayout {
    type Item = &'a Vec<Point>;
    type IntoIter = std::slice::Iter<'a, Vec<Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
