//! Pointer state machine for the canvas.
//!
//! A single explicit state replaces per-gesture flags, so a gesture and a
//! drawing session can never be active at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Plugin       (down claimed by an interactive overlay plugin)
//! Idle -> OnItem       (down on a handle of a selected editable object)
//! Idle -> OnObject     (down on an object body)
//! Idle -> Plugin       (down claimed by an interactive underlay plugin)
//! Idle -> Selecting    (down on empty space)
//!
//! OnItem   -> Editing  (first drag)
//! OnObject -> Moving   (first drag)
//!
//! Drawing(Idle) -> Pressing -> Tracking / Moving -> ... -> Idle (finished)
//!
//! Any gesture -> Idle  (up)
//! ```

use crate::geometry::{Point, Rect};
use crate::layout::Position;
use crate::object::{ObjectId, ObjectRenderer};
use crate::plugin::{PluginId, PluginState};

/// Where a drawing session is within the current pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the next press
    #[default]
    Idle,
    /// Pressed, not yet dragged
    Pressing,
    /// Dragging with the button held
    Moving,
    /// Released after a press; the last point follows the hovering pointer
    Tracking,
}

/// Internal state. Locations of editing, moving and drawing are in content
/// coordinates; selecting and plugin locations are in view coordinates.
#[derive(Debug, Default)]
pub(crate) enum InternalState {
    #[default]
    Idle,

    Selecting {
        /// View-space rect anchored at the snapped press location
        rect: Rect,
        initial_selection: Vec<ObjectId>,
    },

    /// Pressed on an item handle; becomes `Editing` on the first drag
    OnItem {
        object: ObjectId,
        position: Position,
        initial: Point,
    },

    /// Pressed on an object body; becomes `Moving` on the first drag
    OnObject {
        object: ObjectId,
        already_selected: bool,
        initial: Point,
    },

    Editing {
        object: ObjectId,
        position: Position,
        initial: Point,
        last: Point,
    },

    Moving {
        object: ObjectId,
        initial: Point,
        last: Point,
    },

    /// The in-progress object is owned here until it is finished
    Drawing {
        object: Box<ObjectRenderer>,
        session: SessionState,
    },

    Plugin {
        plugin: PluginId,
        state: PluginState,
        initial: Point,
        last: Point,
    },
}

impl InternalState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn drawing_object(&self) -> Option<&ObjectRenderer> {
        match self {
            Self::Drawing { object, .. } => Some(object),
            _ => None,
        }
    }

    pub fn drawing_object_mut(&mut self) -> Option<&mut ObjectRenderer> {
        match self {
            Self::Drawing { object, .. } => Some(object),
            _ => None,
        }
    }

    /// The rubber-band rect in view coordinates, if selecting.
    pub fn selection_rect(&self) -> Option<Rect> {
        match self {
            Self::Selecting { rect, .. } => Some(*rect),
            _ => None,
        }
    }

    /// Gesture snapshot for `id`; idle unless that plugin owns the gesture.
    pub fn plugin_state(&self, id: PluginId) -> PluginState {
        match self {
            Self::Plugin { plugin, state, .. } if *plugin == id => *state,
            _ => PluginState::Idle,
        }
    }

    /// Whether `id` is the object under an active gesture.
    pub fn references_object(&self, id: ObjectId) -> bool {
        match self {
            Self::OnItem { object, .. }
            | Self::OnObject { object, .. }
            | Self::Editing { object, .. }
            | Self::Moving { object, .. } => *object == id,
            _ => false,
        }
    }

    pub fn tag(&self) -> CanvasState {
        match self {
            Self::Idle => CanvasState::Idle,
            Self::Selecting { .. } => CanvasState::Selecting,
            Self::OnItem {
                object, position, ..
            } => CanvasState::OnItem {
                object: *object,
                position: *position,
            },
            Self::OnObject { object, .. } => CanvasState::OnObject { object: *object },
            Self::Editing {
                object, position, ..
            } => CanvasState::Editing {
                object: *object,
                position: *position,
            },
            Self::Moving { object, .. } => CanvasState::Moving { object: *object },
            Self::Drawing { object, session } => CanvasState::Drawing {
                object: object.id(),
                session: *session,
            },
            Self::Plugin { plugin, .. } => CanvasState::Plugin { plugin: *plugin },
        }
    }
}

/// Public state tag, for cursors and menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasState {
    #[default]
    Idle,
    Selecting,
    OnItem {
        object: ObjectId,
        position: Position,
    },
    OnObject {
        object: ObjectId,
    },
    Editing {
        object: ObjectId,
        position: Position,
    },
    Moving {
        object: ObjectId,
    },
    Drawing {
        object: ObjectId,
        session: SessionState,
    },
    Plugin {
        plugin: PluginId,
    },
}

impl CanvasState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting)
    }

    pub fn session(&self) -> Option<SessionState> {
        match self {
            Self::Drawing { session, .. } => Some(*session),
            _ => None,
        }
    }
}
