//! Drawing sessions: an in-progress object fed by pointer input until it is
//! finished, discarded or cancelled.

use super::CanvasView;
use crate::input::{InternalState, SessionState};
use crate::object::{ObjectId, ObjectRenderer};
use crate::shapes::Shape;
use crate::undo::UndoTarget;
use tracing::debug;

impl CanvasView {
    /// Starts drawing a new object of `shape`. A running session is finished
    /// first, or cancelled when it cannot be finished.
    pub fn start_drawing_session(&mut self, shape: impl Shape + 'static) -> ObjectId {
        self.start_drawing_session_boxed(Box::new(shape))
    }

    pub fn start_drawing_session_boxed(&mut self, shape: Box<dyn Shape>) -> ObjectId {
        debug_assert!(
            !self.content_size().is_empty(),
            "content size must be greater than zero"
        );

        if self.state.is_drawing() {
            if self.finish_drawing_session().is_none() {
                self.cancel_drawing_session();
            }
        } else if !self.state.is_idle() {
            self.state = InternalState::Idle;
        }
        self.internal_select(&[], false);

        let mut object = ObjectRenderer::from_boxed(shape);
        object.set_line_width(self.config.session_line_width);
        object.set_stroke_color(self.config.session_stroke_color);
        object.set_fill_color(self.config.session_fill_color);

        let id = object.id();
        debug!(object = %id, kind = object.shape().kind(), "drawing session started");
        self.state = InternalState::Drawing {
            object: Box::new(object),
            session: SessionState::Idle,
        };
        self.request_redraw();

        self.notify(|delegate, view| delegate.drawing_session_started(view, id));
        id
    }

    /// Commits the drawing object when it can be added. Returns `None` when
    /// there is no session, the object is not ready, or the delegate
    /// discarded it (which cancels the session).
    pub fn finish_drawing_session(&mut self) -> Option<ObjectId> {
        let ready = self
            .state
            .drawing_object()
            .is_some_and(|object| self.can_add_object(object));
        if !ready {
            return None;
        }

        let InternalState::Drawing { object, .. } = std::mem::take(&mut self.state) else {
            return None;
        };

        let discard = self
            .notify(|delegate, view| delegate.should_discard_object(view, &object))
            .unwrap_or(false);
        if discard {
            debug!(object = %object.id(), "drawing discarded by delegate");
            self.purge_session_entries(object.id());
            self.request_redraw();
            self.notify(|delegate, view| delegate.drawing_session_cancelled(view));
            return None;
        }

        let id = object.id();
        self.internal_add(vec![*object]);
        self.request_redraw();
        debug!(object = %id, "drawing session finished");

        self.notify(|delegate, view| delegate.drawing_session_finished(view, id));
        Some(id)
    }

    /// Drops the drawing object. Returns false when no session is running.
    pub fn cancel_drawing_session(&mut self) -> bool {
        if !self.state.is_drawing() {
            return false;
        }
        let InternalState::Drawing { object, .. } = std::mem::take(&mut self.state) else {
            return false;
        };

        debug!(object = %object.id(), "drawing session cancelled");
        self.purge_session_entries(object.id());
        self.request_redraw();

        self.notify(|delegate, view| delegate.drawing_session_cancelled(view));
        true
    }

    fn purge_session_entries(&mut self, id: ObjectId) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.remove_all(UndoTarget::Object(id));
        ledger.remove_where(|action| action.references_object(id));
    }
}
