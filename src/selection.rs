//! Rectangle selection tests against geometric primitives.

use crate::geometry::{Arc, Circle, Line, Point, Rect};
use std::f64::consts::{FRAC_PI_2, PI};

/// Decides whether a rubber-band rect selects a primitive.
#[derive(Debug, Clone, Copy)]
pub struct RectSelector {
    rect: Rect,
}

impl RectSelector {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: rect.standardized(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn selects_point(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// A segment is selected when its midpoint is inside or it crosses an edge.
    pub fn selects_line(&self, line: &Line) -> bool {
        if self.rect.contains(line.mid()) {
            return true;
        }
        self.rect.sides().iter().any(|side| line.collides(side))
    }

    /// Selected when the rects overlap, unless `other` fully encloses the selection.
    pub fn selects_rect(&self, other: &Rect) -> bool {
        self.rect.intersects(other) && !other.contains_rect(&self.rect)
    }

    /// Selected when the rect touches the circle without lying fully inside it.
    pub fn selects_circle(&self, circle: &Circle) -> bool {
        if self.rect.corners().iter().all(|c| circle.contains(*c)) {
            return false;
        }
        let x = circle.center.x.clamp(self.rect.min_x(), self.rect.max_x());
        let y = circle.center.y.clamp(self.rect.min_y(), self.rect.max_y());
        let dx = circle.center.x - x;
        let dy = circle.center.y - y;
        dx * dx + dy * dy <= circle.radius * circle.radius
    }

    /// Selected when the rect touches the sector outline of `arc` at `radius`.
    pub fn selects_arc(&self, arc: &Arc, radius: f64) -> bool {
        let corners = self.rect.corners();
        let inside = corners
            .iter()
            .filter(|c| arc.contains(**c, radius))
            .count();
        if inside != 0 {
            return inside != corners.len();
        }

        let extremes: Vec<Point> = [0.0, FRAC_PI_2, PI, -FRAC_PI_2]
            .into_iter()
            .filter(|a| arc.contains_angle(*a))
            .map(|a| arc.center.extended(radius, a))
            .collect();
        if extremes.iter().any(|p| self.rect.contains(*p)) {
            return true;
        }

        let edges = [
            Line::new(arc.center, arc.center.extended(radius, arc.start)),
            Line::new(arc.center, arc.center.extended(radius, arc.end)),
        ];
        if edges.iter().any(|l| self.selects_line(l)) {
            return true;
        }

        extremes
            .iter()
            .any(|p| self.selects_line(&Line::new(arc.center, *p)))
    }

    /// Tests the segments between consecutive points. A lone point is tested
    /// directly.
    pub fn selects_polyline(&self, points: &[Point], closed: bool) -> bool {
        match points {
            [] => false,
            [single] => self.selects_point(*single),
            _ => {
                let n = points.len();
                (0..n)
                    .filter(|&i| closed || i != n - 1)
                    .any(|i| self.selects_line(&Line::new(points[i], points[(i + 1) % n])))
            }
        }
    }
}
