//! Explicit table of an object's style settings.

use crate::graphics::Color;
use crate::setting::{RedrawMode, UndoMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    StrokeColor,
    FillColor,
    LineWidth,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [Self::StrokeColor, Self::FillColor, Self::LineWidth];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StrokeColor => "Stroke Color",
            Self::FillColor => "Fill Color",
            Self::LineWidth => "Line Width",
        }
    }
}

/// A value for one of the settings in [`SettingKey`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum SettingValue {
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f64),
}

impl SettingValue {
    pub fn key(&self) -> SettingKey {
        match self {
            Self::StrokeColor(_) => SettingKey::StrokeColor,
            Self::FillColor(_) => SettingKey::FillColor,
            Self::LineWidth(_) => SettingKey::LineWidth,
        }
    }
}

/// Describes one observable setting of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDescriptor {
    pub key: SettingKey,
    pub name: &'static str,
    pub undo_mode: UndoMode,
    pub redraw_mode: RedrawMode,
}

/// Style values handed to shapes when they build graphics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub line_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
}
