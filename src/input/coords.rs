//! Conversion between view and content coordinates.
//!
//! Content is laid out in the view with an aspect fit: the content rect is
//! the largest rect with the content's aspect ratio centred in the bounds.

use crate::geometry::{Point, Rect, Size};
use crate::graphics::Transform;

/// View bounds and content size, with the derived content rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    bounds: Rect,
    content_size: Size,
    content_rect: Rect,
}

impl ContentTransform {
    pub fn new(bounds: Rect, content_size: Size) -> Self {
        Self {
            bounds,
            content_size,
            content_rect: Rect::aspect_fit(content_size, bounds),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[inline]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    /// View-to-content scale per axis. Zero for an empty content rect.
    pub fn to_content_scale(&self) -> Point {
        let rect = self.content_rect.size;
        Point::new(
            ratio(self.content_size.width, rect.width),
            ratio(self.content_size.height, rect.height),
        )
    }

    /// Content-to-view scale per axis.
    pub fn to_view_scale(&self) -> Point {
        let rect = self.content_rect.size;
        Point::new(
            ratio(rect.width, self.content_size.width),
            ratio(rect.height, self.content_size.height),
        )
    }

    #[inline]
    pub fn view_to_content(&self, point: Point) -> Point {
        let scale = self.to_content_scale();
        let origin = self.content_rect.origin;
        Point::new((point.x - origin.x) * scale.x, (point.y - origin.y) * scale.y)
    }

    #[inline]
    pub fn content_to_view(&self, point: Point) -> Point {
        let scale = self.to_view_scale();
        let origin = self.content_rect.origin;
        Point::new(point.x * scale.x + origin.x, point.y * scale.y + origin.y)
    }

    pub fn view_rect_to_content(&self, rect: Rect) -> Rect {
        let scale = self.to_content_scale();
        Rect::from_xywh(
            (rect.origin.x - self.content_rect.origin.x) * scale.x,
            (rect.origin.y - self.content_rect.origin.y) * scale.y,
            rect.size.width * scale.x,
            rect.size.height * scale.y,
        )
    }

    pub fn content_rect_to_view(&self, rect: Rect) -> Rect {
        let scale = self.to_view_scale();
        let origin = self.content_to_view(rect.origin);
        Rect::from_xywh(
            origin.x,
            origin.y,
            rect.size.width * scale.x,
            rect.size.height * scale.y,
        )
    }

    /// The transform that maps content coordinates onto the view.
    pub fn content_to_view_transform(&self) -> Transform {
        let scale = self.to_view_scale();
        Transform::scale(scale.x, scale.y).then(&Transform::translation(
            self.content_rect.origin.x,
            self.content_rect.origin.y,
        ))
    }

    pub fn contains_view_point(&self, point: Point) -> bool {
        self.content_rect.contains(point)
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::new(Rect::ZERO, Size::ZERO)
    }
}

#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
