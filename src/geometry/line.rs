use super::Point;
use serde::{Deserialize, Serialize};

/// A line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn mid(&self) -> Point {
        self.start.mid(self.end)
    }

    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Direction of the segment in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.dy().atan2(self.dx())
    }

    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    /// True when `point` lies on the segment, within roughly one unit.
    ///
    /// Compares `(√a + √b)²` against `c` using squared distances, so the band
    /// narrows towards the endpoints.
    pub fn contains(&self, point: Point) -> bool {
        let sq = |p: Point, q: Point| (p.x - q.x).powi(2) + (p.y - q.y).powi(2);
        let a = sq(self.start, point);
        let b = sq(self.end, point);
        let c = sq(self.start, self.end);
        a + b + 2.0 * (a * b).sqrt() - c < 1.0
    }

    /// Segment/segment intersection test.
    pub fn collides(&self, other: &Line) -> bool {
        let a1 = self.start.x - other.start.x;
        let a2 = self.start.y - other.start.y;
        let denominator = other.dy() * self.dx() - other.dx() * self.dy();
        let ua = (other.dx() * a2 - other.dy() * a1) / denominator;
        let ub = (self.dx() * a2 - self.dy() * a1) / denominator;
        (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
    }

    /// Intersection of the two infinite lines, `None` when parallel.
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        let a1 = self.start.y - self.end.y;
        let b1 = self.end.x - self.start.x;
        let c1 = self.start.x * self.end.y - self.end.x * self.start.y;

        let a2 = other.start.y - other.end.y;
        let b2 = other.end.x - other.start.x;
        let c2 = other.start.x * other.end.y - other.end.x * other.start.y;

        let det = a1 * b2 - a2 * b1;
        if det == 0.0 {
            return None;
        }

        Some(Point::new((b1 * c2 - b2 * c1) / det, (a2 * c1 - a1 * c2) / det))
    }

    /// Perpendicular projection of `point` onto the infinite line.
    pub fn projection_point(&self, point: Point) -> Option<Point> {
        let (dx, dy) = (self.dx(), self.dy());
        let length_sq = dx * dx + dy * dy;
        if length_sq == 0.0 {
            return None;
        }

        let px = point.x - self.start.x;
        let py = point.y - self.start.y;
        let t = (px * dx + py * dy) / length_sq;
        Some(Point::new(self.start.x + t * dx, self.start.y + t * dy))
    }

    /// Shortest distance from `point` to the segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        let (dx, dy) = (self.dx(), self.dy());
        let length_sq = dx * dx + dy * dy;
        if length_sq == 0.0 {
            return self.start.distance(point);
        }
        let t = (((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / length_sq)
            .clamp(0.0, 1.0);
        Point::new(self.start.x + t * dx, self.start.y + t * dy).distance(point)
    }
}
