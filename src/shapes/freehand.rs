use super::{Shape, stroke_sections};
use crate::graphics::Graphic;
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;

/// One stroke following the pointer, finished when the pointer is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct Freehand;

impl Freehand {
    pub const KIND: &'static str = "freehand";
}

impl Shape for Freehand {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::single_continuous_section(layout)
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        stroke_sections(layout, style)
    }

    fn is_editable(&self) -> bool {
        false
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}

/// Any number of strokes, one section each. Stays open until the session is
/// finished explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scribble;

impl Scribble {
    pub const KIND: &'static str = "scribble";
}

impl Shape for Scribble {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::ContinuousPush {
            finishable: !layout.is_empty(),
        }
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        stroke_sections(layout, style)
    }

    fn is_editable(&self) -> bool {
        false
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }
}
