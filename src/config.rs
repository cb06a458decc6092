//! Canvas configuration.
//!
//! Every field has a default from [`crate::constants`], so a partial JSON
//! file (or none at all) yields a usable config.
//!
//! ```json
//! {
//!   "selection_range": 12.0,
//!   "undo_action_names": { "dragging": "Move", "editing": "Edit Point" }
//! }
//! ```

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::graphics::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "inkboard.json";

/// Canvas operations that register implicit undo entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoCategory {
    AddObjects,
    RemoveObjects,
    Dragging,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Hit-test tolerance in view points
    pub selection_range: f64,

    pub content_background_color: Color,
    pub selection_rect_border_color: Color,
    pub selection_rect_fill_color: Color,
    pub decoration_line_width: f64,

    pub item_border_color: Color,
    pub item_fill_color: Color,
    pub item_highlight_border_color: Color,
    pub item_highlight_fill_color: Color,

    pub bounding_box_border_color: Color,
    pub bounding_box_fill_color: Color,
    pub bounding_box_highlight_border_color: Color,
    pub bounding_box_highlight_fill_color: Color,

    /// Style applied to the object of each new drawing session
    pub session_line_width: f64,
    pub session_stroke_color: Color,
    pub session_fill_color: Color,

    /// Action names for implicit undo entries. Missing categories register
    /// unnamed entries.
    pub undo_action_names: BTreeMap<UndoCategory, String>,

    /// Cap on undo history; `None` is unlimited
    pub levels_of_undo: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            selection_range: DEFAULT_SELECTION_RANGE,
            content_background_color: CONTENT_BACKGROUND_COLOR,
            selection_rect_border_color: SELECTION_RECT_BORDER_COLOR,
            selection_rect_fill_color: SELECTION_RECT_FILL_COLOR,
            decoration_line_width: DECORATION_LINE_WIDTH,
            item_border_color: ITEM_BORDER_COLOR,
            item_fill_color: ITEM_FILL_COLOR,
            item_highlight_border_color: ITEM_HIGHLIGHT_BORDER_COLOR,
            item_highlight_fill_color: ITEM_HIGHLIGHT_FILL_COLOR,
            bounding_box_border_color: BOUNDING_BOX_BORDER_COLOR,
            bounding_box_fill_color: BOUNDING_BOX_FILL_COLOR,
            bounding_box_highlight_border_color: BOUNDING_BOX_HIGHLIGHT_BORDER_COLOR,
            bounding_box_highlight_fill_color: BOUNDING_BOX_HIGHLIGHT_FILL_COLOR,
            session_line_width: SESSION_LINE_WIDTH,
            session_stroke_color: SESSION_STROKE_COLOR,
            session_fill_color: SESSION_FILL_COLOR,
            undo_action_names: BTreeMap::new(),
            levels_of_undo: DEFAULT_UNDO_LEVELS,
        }
    }
}

impl CanvasConfig {
    pub fn undo_name(&self, category: UndoCategory) -> Option<String> {
        self.undo_action_names.get(&category).cloned()
    }

    pub fn with_undo_name(mut self, category: UndoCategory, name: impl Into<String>) -> Self {
        self.undo_action_names.insert(category, name.into());
        self
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "loaded canvas config");
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid canvas config, using defaults");
                Self::default()
            }
        }
    }

    /// `<user config dir>/inkboard/inkboard.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkboard").join(CONFIG_FILE_NAME))
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.selection_range.is_finite() || self.selection_range < 0.0 {
            return Err(ConfigError::Invalid {
                field: "selection_range",
                reason: format!("expected a non-negative number, got {}", self.selection_range),
            });
        }
        for (field, width) in [
            ("decoration_line_width", self.decoration_line_width),
            ("session_line_width", self.session_line_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a positive number, got {width}"),
                });
            }
        }
        if self.levels_of_undo == Some(0) {
            return Err(ConfigError::Invalid {
                field: "levels_of_undo",
                reason: "use null for unlimited history".to_string(),
            });
        }
        Ok(())
    }
}
