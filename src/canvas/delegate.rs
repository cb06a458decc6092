use super::CanvasView;
use crate::layout::Position;
use crate::object::{ObjectId, ObjectRenderer};
use std::any::Any;

/// Opaque menu value produced by the host.
pub type ContextMenu = Box<dyn Any>;

/// Host notifications. Every method has a no-op default.
///
/// Callbacks receive a shared view of the canvas; they run after the state
/// change they report.
pub trait CanvasDelegate {
    fn drawing_session_started(&mut self, _view: &CanvasView, _object: ObjectId) {}

    fn drawing_session_finished(&mut self, _view: &CanvasView, _object: ObjectId) {}

    fn drawing_session_cancelled(&mut self, _view: &CanvasView) {}

    /// Asked before a finished drawing is added. Returning true cancels the
    /// session instead.
    fn should_discard_object(&mut self, _view: &CanvasView, _object: &ObjectRenderer) -> bool {
        false
    }

    fn objects_selected(&mut self, _view: &CanvasView, _objects: &[ObjectId]) {}

    fn objects_deselected(&mut self, _view: &CanvasView, _objects: &[ObjectId]) {}

    fn object_edited(&mut self, _view: &CanvasView, _object: ObjectId, _position: Position) {}

    fn objects_moved(&mut self, _view: &CanvasView, _objects: &[ObjectId]) {}

    /// Menu for `object`, or for empty space when `None`.
    fn context_menu(
        &mut self,
        _view: &CanvasView,
        _object: Option<ObjectId>,
    ) -> Option<ContextMenu> {
        None
    }
}
