use super::{Line, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle passing through three points. `None` when they are collinear or
    /// coincide.
    pub fn through(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
        let sq = |p: Point| p.x * p.x + p.y * p.y;

        let a = p1.x * (p2.y - p3.y) - p1.y * (p2.x - p3.x) + p2.x * p3.y - p3.x * p2.y;
        if !a.is_normal() {
            return None;
        }

        let b = sq(p1) * (p3.y - p2.y) + sq(p2) * (p1.y - p3.y) + sq(p3) * (p2.y - p1.y);
        let c = sq(p1) * (p2.x - p3.x) + sq(p2) * (p3.x - p1.x) + sq(p3) * (p1.x - p2.x);
        let d = sq(p1) * (p3.x * p2.y - p2.x * p3.y)
            + sq(p2) * (p1.x * p3.y - p3.x * p1.y)
            + sq(p3) * (p2.x * p1.y - p1.x * p2.y);

        let center = Point::new(-b / (2.0 * a), -c / (2.0 * a));
        let radius = ((b * b + c * c - 4.0 * a * d) / (4.0 * a * a)).sqrt();
        Some(Circle::new(center, radius))
    }

    /// True when `point` is inside or on the circle.
    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// True when `point` lies within `range` of the circumference.
    pub fn outline_contains(&self, point: Point, range: f64) -> bool {
        (self.center.distance(point) - self.radius).abs() <= range
    }

    /// Intersections of the circumference with a segment.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        line_circle_intersections(self.center, self.radius, line)
            .into_iter()
            .filter(|p| line.contains(*p))
            .collect()
    }
}

/// Raw intersections of the infinite line through `line` with a circle.
pub(super) fn line_circle_intersections(center: Point, radius: f64, line: &Line) -> Vec<Point> {
    if line.length() <= 0.0 {
        return Vec::new();
    }

    let (dx, dy) = (line.dx(), line.dy());
    let start = line.start;
    let a = dx * dx + dy * dy;
    let b = 2.0 * (dx * (start.x - center.x) + dy * (start.y - center.y));
    let c = center.x * center.x + center.y * center.y + start.x * start.x + start.y * start.y
        - 2.0 * (center.x * start.x + center.y * start.y)
        - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    let at = |t: f64| Point::new(start.x + t * dx, start.y + t * dy);
    if discriminant < 0.0 {
        Vec::new()
    } else if discriminant == 0.0 {
        vec![at(-b / (2.0 * a))]
    } else {
        let root = discriminant.sqrt();
        vec![at((-b + root) / (2.0 * a)), at((-b - root) / (2.0 * a))]
    }
}
