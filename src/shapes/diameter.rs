use super::Shape;
use crate::geometry::Point;
use crate::graphics::{Graphic, Path, StrokeStyle};
use crate::layout::{LayoutAction, ObjectLayout, Position};
use crate::object::{ItemBinding, ShapeStyle};

/// A segment and the circle it spans. Dragging one end moves the other the
/// opposite way, keeping the midpoint in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diameter;

impl Diameter {
    pub const KIND: &'static str = "diameter";
}

impl Shape for Diameter {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::single_section(2, layout)
    }

    fn item_bindings(&self, _layout: &ObjectLayout, position: Position) -> Vec<ItemBinding> {
        let other = match position.item {
            0 => 1,
            1 => 0,
            _ => return Vec::new(),
        };
        vec![ItemBinding::new(
            Position::new(position.section, other),
            Point::new(-1.0, -1.0),
        )]
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        let Some(&[a, b]) = layout.first() else {
            return Vec::new();
        };
        let mut path = Path::new();
        path.add_lines(&[a, b]);
        path.add_circle(a.mid(b), a.distance(b) / 2.0);
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
