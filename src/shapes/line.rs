use super::{Shape, stroke_sections};
use crate::graphics::Graphic;
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegment;

impl LineSegment {
    pub const KIND: &'static str = "line";
}

impl Shape for LineSegment {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::single_section(2, layout)
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        stroke_sections(layout, style)
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
