use super::Shape;
use crate::graphics::{Graphic, Path, StrokeStyle};
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;

/// A closed polygon placed one vertex per tap, finishable from three
/// vertices on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polygon;

impl Polygon {
    pub const KIND: &'static str = "polygon";
    pub const MIN_VERTICES: usize = 3;
}

impl Shape for Polygon {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        let vertices = layout.first().map_or(0, <[_]>::len);
        LayoutAction::Push {
            finishable: vertices >= Self::MIN_VERTICES,
        }
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        let Some(vertices) = layout.first() else {
            return Vec::new();
        };
        let mut path = Path::new();
        path.add_polygon(vertices);
        vec![
            Graphic::fill(path.clone(), style.fill_color),
            Graphic::stroke(path, StrokeStyle::solid(style.line_width), style.stroke_color),
        ]
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
