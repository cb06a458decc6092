//! The [`Shape`] capability trait and the built-in shapes.
//!
//! A shape decides how a layout grows (`layout_action`), how it is drawn and
//! whether its points may be edited. [`ObjectRenderer`](crate::object::ObjectRenderer)
//! owns the layout and the bookkeeping around it.

mod arc;
mod circle;
mod diameter;
mod freehand;
mod line;
mod multi;
mod polygon;

pub use arc::CircularArc;
pub use circle::ThreePointCircle;
pub use diameter::Diameter;
pub use freehand::{Freehand, Scribble};
pub use line::LineSegment;
pub use multi::SectionGroup;
pub use polygon::Polygon;

use crate::constants::PRELIMINARY_DASH;
use crate::error::CodecError;
use crate::graphics::{Graphic, Path, StrokeStyle};
use crate::layout::{LayoutAction, ObjectLayout, Position};
use crate::object::{DrawingStrategy, ItemBinding, ShapeStyle};
use std::collections::HashMap;
use std::fmt;

pub trait Shape: fmt::Debug {
    /// Stable name used by persistence records.
    fn kind(&self) -> &'static str;

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction;

    /// Points that follow `position` when it is edited.
    fn item_bindings(&self, _layout: &ObjectLayout, _position: Position) -> Vec<ItemBinding> {
        Vec::new()
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic>;

    /// Dashed outline of every section.
    fn preliminary_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        let mut path = Path::new();
        for section in layout {
            path.add_lines(section);
        }
        if path.is_empty() {
            return Vec::new();
        }
        let stroke = StrokeStyle::dashed(style.line_width, PRELIMINARY_DASH.to_vec());
        vec![Graphic::stroke(path, stroke, style.stroke_color)]
    }

    fn preliminary_strategy(&self) -> DrawingStrategy {
        DrawingStrategy::BEFORE_FINISHABLE | DrawingStrategy::WHEN_FINISHABLE
    }

    fn main_strategy(&self) -> DrawingStrategy {
        DrawingStrategy::WHEN_FINISHABLE | DrawingStrategy::WHEN_FINISHED
    }

    fn is_editable(&self) -> bool {
        true
    }

    fn can_edit_item(&self, _layout: &ObjectLayout, _position: Position) -> bool {
        true
    }

    /// Whether rect selection treats each section as a closed polygon.
    fn is_closed(&self) -> bool {
        false
    }

    /// Construction parameters for persistence.
    fn parameters(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    fn boxed_clone(&self) -> Box<dyn Shape>;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Solid stroke of every section as an open polyline.
pub(crate) fn stroke_sections(layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
    let mut path = Path::new();
    for section in layout {
        path.add_lines(section);
    }
    if path.is_empty() {
        return Vec::new();
    }
    vec![Graphic::stroke(
        path,
        StrokeStyle::solid(style.line_width),
        style.stroke_color,
    )]
}

type ShapeConstructor = Box<dyn Fn(&serde_json::Value) -> Result<Box<dyn Shape>, CodecError>>;

/// Maps shape kinds to constructors, for decoding persisted objects.
pub struct ShapeRegistry {
    constructors: HashMap<&'static str, ShapeConstructor>,
}

impl ShapeRegistry {
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry holding every built-in shape.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register_unit(LineSegment::KIND, || Box::new(LineSegment));
        registry.register_unit(Freehand::KIND, || Box::new(Freehand));
        registry.register_unit(Scribble::KIND, || Box::new(Scribble));
        registry.register_unit(Polygon::KIND, || Box::new(Polygon));
        registry.register_unit(ThreePointCircle::KIND, || Box::new(ThreePointCircle));
        registry.register_unit(CircularArc::KIND, || Box::new(CircularArc));
        registry.register_unit(Diameter::KIND, || Box::new(Diameter));
        registry.register(SectionGroup::KIND, |parameters| {
            Ok(Box::new(SectionGroup::from_parameters(parameters)?))
        });
        registry
    }

    pub fn register(
        &mut self,
        kind: &'static str,
        constructor: impl Fn(&serde_json::Value) -> Result<Box<dyn Shape>, CodecError> + 'static,
    ) {
        self.constructors.insert(kind, Box::new(constructor));
    }

    fn register_unit(&mut self, kind: &'static str, constructor: fn() -> Box<dyn Shape>) {
        self.register(kind, move |_| Ok(constructor()));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    pub fn create(
        &self,
        kind: &str,
        parameters: &serde_json::Value,
    ) -> Result<Box<dyn Shape>, CodecError> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| CodecError::UnknownShape(kind.to_string()))?;
        constructor(parameters)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("ShapeRegistry").field("kinds", &kinds).finish()
    }
}
