//! Crate-wide constants.
//!
//! Centralizes the default values behind [`CanvasConfig`](crate::config::CanvasConfig)
//! and the magic numbers used by geometry flattening and rendering.

use crate::graphics::Color;

// ============================================================================
// Selection
// ============================================================================

/// Hit-test tolerance around objects and item handles, in view points
pub const DEFAULT_SELECTION_RANGE: f64 = 10.0;

/// Border of the rubber-band selection rectangle
pub const SELECTION_RECT_BORDER_COLOR: Color = Color::LIGHT_GRAY;

/// Fill of the rubber-band selection rectangle
pub const SELECTION_RECT_FILL_COLOR: Color = Color::CYAN.with_alpha(0.2);

/// Line width used for selection decorations
pub const DECORATION_LINE_WIDTH: f64 = 1.0;

// ============================================================================
// Content
// ============================================================================

/// Background painted behind the content rect
pub const CONTENT_BACKGROUND_COLOR: Color = Color::WHITE;

// ============================================================================
// Drawing Session Defaults
// ============================================================================

/// Line width given to objects created by a drawing session
pub const SESSION_LINE_WIDTH: f64 = 1.0;

pub const SESSION_STROKE_COLOR: Color = Color::BLACK;

pub const SESSION_FILL_COLOR: Color = Color::WHITE;

// ============================================================================
// Object Decorations
// ============================================================================

pub const ITEM_BORDER_COLOR: Color = Color::BLACK;
pub const ITEM_FILL_COLOR: Color = Color::WHITE;
pub const ITEM_HIGHLIGHT_BORDER_COLOR: Color = Color::BLACK;
pub const ITEM_HIGHLIGHT_FILL_COLOR: Color = Color::SYSTEM_BLUE;

pub const BOUNDING_BOX_BORDER_COLOR: Color = Color::BLACK;
pub const BOUNDING_BOX_FILL_COLOR: Color = Color::CLEAR;
pub const BOUNDING_BOX_HIGHLIGHT_BORDER_COLOR: Color = Color::BLACK;
pub const BOUNDING_BOX_HIGHLIGHT_FILL_COLOR: Color = Color::CYAN.with_alpha(0.3);

// ============================================================================
// Object Defaults
// ============================================================================

/// Line width of a freshly constructed object
pub const OBJECT_LINE_WIDTH: f64 = 1.0;

pub const OBJECT_STROKE_COLOR: Color = Color::BLACK;

pub const OBJECT_FILL_COLOR: Color = Color::WHITE;

/// Dash pattern of preliminary (in-progress) graphics
pub const PRELIMINARY_DASH: [f64; 1] = [3.0];

// ============================================================================
// Geometry
// ============================================================================

/// Segments used to flatten a full circle
pub const CURVE_SEGMENTS: usize = 64;

// ============================================================================
// Undo
// ============================================================================

/// Default cap on undo history; `None` keeps everything
pub const DEFAULT_UNDO_LEVELS: Option<usize> = None;

// ============================================================================
// Performance Thresholds
// ============================================================================

/// Warn when a single pointer event takes longer than this (ms)
pub const POINTER_EVENT_WARN_MS: f64 = 4.0;

/// Warn when a render pass takes longer than this (ms)
pub const RENDER_WARN_MS: f64 = 16.0;
