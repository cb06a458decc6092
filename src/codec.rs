//! JSON persistence of objects.
//!
//! An [`ObjectRecord`] captures everything needed to rebuild an object: the
//! shape kind and parameters, the layout, the style and the rotation state.
//! Decoding goes through a [`ShapeRegistry`] so hosts can persist their own
//! shapes.

use crate::error::{CodecError, CodecResult};
use crate::geometry::Angle;
use crate::graphics::Color;
use crate::layout::ObjectLayout;
use crate::object::{ObjectRenderer, PointDescriptor, ShapeStyle};
use crate::shapes::ShapeRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub kind: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
    pub layout: ObjectLayout,
    pub line_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
    #[serde(default)]
    pub rotation_center: Option<PointDescriptor>,
    /// Radians
    #[serde(default)]
    pub rotation_angle: f64,
    pub is_finished: bool,
}

impl ObjectRecord {
    pub fn from_object(object: &ObjectRenderer) -> Self {
        let shape = object.shape();
        Self {
            kind: shape.kind().to_string(),
            parameters: shape.parameters(),
            layout: object.layout().clone(),
            line_width: object.line_width(),
            stroke_color: object.stroke_color(),
            fill_color: object.fill_color(),
            rotation_center: object.rotation_center(),
            rotation_angle: object.rotation_angle().as_radians(),
            is_finished: object.is_finished(),
        }
    }

    /// Rebuilds the object. The result gets a fresh [`ObjectId`](crate::object::ObjectId).
    pub fn into_object(self, registry: &ShapeRegistry) -> CodecResult<ObjectRenderer> {
        let shape = registry.create(&self.kind, &self.parameters)?;

        if let Some(point) = self.layout.points().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(CodecError::InvalidLayout {
                kind: self.kind,
                reason: format!("non-finite point ({}, {})", point.x, point.y),
            });
        }
        if self.is_finished && !shape.layout_action(&self.layout).is_finishable() {
            return Err(CodecError::InvalidLayout {
                kind: self.kind,
                reason: format!(
                    "marked finished but the layout is incomplete ({:?})",
                    self.layout.section_sizes()
                ),
            });
        }
        if let Some(PointDescriptor::Item(position)) = self.rotation_center {
            if !self.layout.contains_position(position) {
                return Err(CodecError::InvalidLayout {
                    kind: self.kind,
                    reason: format!("rotation center {position:?} is outside the layout"),
                });
            }
        }

        let style = ShapeStyle {
            line_width: self.line_width,
            stroke_color: self.stroke_color,
            fill_color: self.fill_color,
        };
        Ok(ObjectRenderer::restore(
            shape,
            self.layout,
            style,
            self.rotation_center,
            Angle::radians(self.rotation_angle),
            self.is_finished,
        ))
    }
}

pub fn encode_records(objects: &[ObjectRenderer]) -> Vec<ObjectRecord> {
    objects.iter().map(ObjectRecord::from_object).collect()
}

pub fn encode_objects(objects: &[ObjectRenderer]) -> CodecResult<String> {
    Ok(serde_json::to_string_pretty(&encode_records(objects))?)
}

pub fn decode_objects(json: &str, registry: &ShapeRegistry) -> CodecResult<Vec<ObjectRenderer>> {
    let records: Vec<ObjectRecord> = serde_json::from_str(json)?;
    let objects = records
        .into_iter()
        .map(|record| record.into_object(registry))
        .collect::<CodecResult<Vec<_>>>()?;
    debug!(count = objects.len(), "decoded objects");
    Ok(objects)
}

pub fn save_objects(path: &Path, objects: &[ObjectRenderer]) -> CodecResult<()> {
    std::fs::write(path, encode_objects(objects)?)?;
    Ok(())
}

pub fn load_objects(path: &Path, registry: &ShapeRegistry) -> CodecResult<Vec<ObjectRenderer>> {
    let json = std::fs::read_to_string(path)?;
    decode_objects(&json, registry)
}
