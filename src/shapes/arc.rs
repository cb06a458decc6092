use super::Shape;
use crate::geometry::Arc;
use crate::graphics::{Graphic, Path, StrokeStyle};
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;

/// An arc from center, start and end points. The radius is the distance
/// from the center to the start point and the minor arc is drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularArc;

impl CircularArc {
    pub const KIND: &'static str = "arc";

    /// The arc and its radius, once all three points are placed.
    pub fn arc(layout: &ObjectLayout) -> Option<(Arc, f64)> {
        match layout.first()? {
            [center, start, end] => {
                let radius = center.distance(*start);
                if radius == 0.0 {
                    return None;
                }
                Some((Arc::from_points(*center, *start, *end).to_minor_arc(), radius))
            }
            _ => None,
        }
    }
}

impl Shape for CircularArc {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::single_section(3, layout)
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        let Some((arc, radius)) = Self::arc(layout) else {
            return Vec::new();
        };
        let mut path = Path::new();
        path.add_arc(&arc, radius);
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
