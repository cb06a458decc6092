//! Inkboard - an interactive vector-drawing core.
//!
//! A [`CanvasView`] holds finished objects, the selection, the pointer state
//! machine, installed plugins and an undo ledger. The host feeds it pointer
//! events in view coordinates and renders it into a [`RenderSurface`].
//!
//! ```ignore
//! let mut canvas = CanvasView::new(CanvasConfig::default());
//! canvas.set_bounds(Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
//! canvas.set_content_size(Size::new(800.0, 600.0));
//!
//! canvas.start_drawing_session(LineSegment);
//! canvas.pointer_down(Point::new(10.0, 10.0));
//! canvas.pointer_up(Point::new(10.0, 10.0));
//! canvas.pointer_down(Point::new(90.0, 40.0));
//! canvas.pointer_up(Point::new(90.0, 40.0));
//! ```

pub mod canvas;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod layout;
pub mod logging;
pub mod object;
pub mod perf;
pub mod plugin;
pub mod selection;
pub mod setting;
pub mod shapes;
pub mod spatial_index;
pub mod undo;

pub use canvas::{CanvasDelegate, CanvasView, ContextMenu};
pub use config::{CanvasConfig, UndoCategory};
pub use error::{CodecError, ConfigError};
pub use geometry::{Angle, Point, Rect, Size};
pub use graphics::{Color, RenderSurface};
pub use input::{CanvasState, ContentTransform, SessionState};
pub use layout::{LayoutAction, ObjectLayout, Position};
pub use object::{ObjectId, ObjectRenderer};
pub use plugin::{Plugin, PluginId, PluginPriority, PluginState};
pub use shapes::{Shape, ShapeRegistry};
pub use undo::UndoManager;
