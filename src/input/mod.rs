//! Pointer input handling for the canvas.
//!
//! ## Architecture
//!
//! The canvas tracks the active gesture with an explicit state machine
//! (`InternalState`). Handlers live in `impl CanvasView` blocks split by
//! event:
//!
//! - `state` - State machine enums and helpers
//! - `pointer_down` - Hit testing and gesture start
//! - `drag` - Pointer moves with the button held, and hover tracking
//! - `pointer_up` - Gesture finalisation and undo registration
//! - `coords` - View/content coordinate conversion

mod coords;
mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use coords::ContentTransform;
pub(crate) use state::InternalState;
pub use state::{CanvasState, SessionState};
