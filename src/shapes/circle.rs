use super::Shape;
use crate::geometry::Circle;
use crate::graphics::{Graphic, Path, StrokeStyle};
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;

/// The circle through three points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreePointCircle;

impl ThreePointCircle {
    pub const KIND: &'static str = "circle";

    pub fn circle(layout: &ObjectLayout) -> Option<Circle> {
        match layout.first()? {
            [a, b, c] => Circle::through(*a, *b, *c),
            _ => None,
        }
    }
}

impl Shape for ThreePointCircle {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::single_section(3, layout)
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        let Some(circle) = Self::circle(layout) else {
            return Vec::new();
        };
        let mut path = Path::new();
        path.add_circle(circle.center, circle.radius);
        vec![Graphic::stroke(
            path,
            StrokeStyle::solid(style.line_width),
            style.stroke_color,
        )]
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
