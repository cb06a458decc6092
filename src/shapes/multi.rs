use super::{Shape, stroke_sections};
use crate::error::CodecError;
use crate::graphics::Graphic;
use crate::layout::{LayoutAction, ObjectLayout};
use crate::object::ShapeStyle;
use serde::{Deserialize, Serialize};

/// Several open polylines with fixed point counts, filled in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    sizes: Vec<usize>,
}

impl SectionGroup {
    pub const KIND: &'static str = "section_group";

    /// # Panics
    /// When `sizes` is empty or holds a zero.
    pub fn new(sizes: Vec<usize>) -> Self {
        assert!(!sizes.is_empty(), "`sizes` must not be empty");
        assert!(
            sizes.iter().all(|&n| n > 0),
            "every section size must be greater than 0"
        );
        Self { sizes }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub(crate) fn from_parameters(parameters: &serde_json::Value) -> Result<Self, CodecError> {
        let group: SectionGroup = serde_json::from_value(parameters.clone())?;
        if group.sizes.is_empty() || group.sizes.contains(&0) {
            return Err(CodecError::InvalidParameters {
                kind: Self::KIND.to_string(),
                reason: format!("invalid section sizes {:?}", group.sizes),
            });
        }
        Ok(group)
    }
}

impl Shape for SectionGroup {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn layout_action(&self, layout: &ObjectLayout) -> LayoutAction {
        LayoutAction::multiple_sections(&self.sizes, layout)
    }

    fn main_graphics(&self, layout: &ObjectLayout, style: &ShapeStyle) -> Vec<Graphic> {
        stroke_sections(layout, style)
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({ "sizes": self.sizes })
    }

    fn boxed_clone(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
