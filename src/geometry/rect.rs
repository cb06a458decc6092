use super::{Line, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle. A negative size is allowed until `standardized`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Bounding box of a set of points. `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::new(min, Size::new(max.x - min.x, max.y - min.y)))
    }

    /// Largest rect with the aspect ratio of `size` centred inside `bounds`.
    pub fn aspect_fit(size: Size, bounds: Rect) -> Rect {
        if size.is_empty() || bounds.size.is_empty() {
            return Rect::new(bounds.center(), Size::ZERO);
        }
        let scale = (bounds.size.width / size.width).min(bounds.size.height / size.height);
        let fitted = Size::new(size.width * scale, size.height * scale);
        let center = bounds.center();
        Rect::new(
            Point::new(center.x - fitted.width / 2.0, center.y - fitted.height / 2.0),
            fitted,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    pub fn width(&self) -> f64 {
        self.size.width.abs()
    }

    pub fn height(&self) -> f64 {
        self.size.height.abs()
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        )
    }

    /// Same rect with a non-negative size.
    pub fn standardized(&self) -> Rect {
        Rect::from_xywh(self.min_x(), self.min_y(), self.width(), self.height())
    }

    pub fn inset_by(&self, dx: f64, dy: f64) -> Rect {
        let r = self.standardized();
        Rect::from_xywh(
            r.origin.x + dx,
            r.origin.y + dy,
            (r.size.width - dx * 2.0).max(0.0),
            (r.size.height - dy * 2.0).max(0.0),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        Rect::from_xywh(
            min_x,
            min_y,
            self.max_x().max(other.max_x()) - min_x,
            self.max_y().max(other.max_y()) - min_y,
        )
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.min_x(), self.max_y()),
            Point::new(self.max_x(), self.max_y()),
        ]
    }

    /// The four edges as segments.
    pub fn sides(&self) -> [Line; 4] {
        let [tl, tr, bl, br] = self.corners();
        [
            Line::new(tl, bl),
            Line::new(tr, br),
            Line::new(tl, tr),
            Line::new(bl, br),
        ]
    }
}
