//! Pointer moves: dragging with the button held, and hover tracking.
//!
//! Moves arrive at a high rate, so every handler does one state match and
//! only touches what the active gesture needs.

use super::state::{InternalState, SessionState};
use crate::canvas::CanvasView;
use crate::constants::POINTER_EVENT_WARN_MS;
use crate::geometry::{Point, Rect, Size};
use crate::layout::{LayoutAction, Position};
use crate::object::ObjectId;
use crate::profile_scope;

impl CanvasView {
    /// Handles a drag to `location` (view coordinates).
    pub fn pointer_moved(&mut self, location: Point) {
        profile_scope!("pointer_moved", POINTER_EVENT_WARN_MS);

        let content = self.transform.view_to_content(location);
        match std::mem::take(&mut self.state) {
            InternalState::Idle => {}

            InternalState::Selecting {
                rect,
                initial_selection,
            } => self.selecting_moved(location, rect.origin, initial_selection),

            InternalState::OnItem {
                object,
                position,
                initial,
            } => self.editing_moved(object, position, content, initial, initial),

            InternalState::OnObject {
                object, initial, ..
            } => self.moving_moved(object, content, initial, initial),

            InternalState::Editing {
                object,
                position,
                initial,
                last,
            } => self.editing_moved(object, position, content, initial, last),

            InternalState::Moving {
                object,
                initial,
                last,
            } => self.moving_moved(object, content, initial, last),

            InternalState::Drawing {
                mut object,
                session: _,
            } => {
                match object.layout_action() {
                    LayoutAction::ContinuousPush { .. }
                    | LayoutAction::ContinuousPushThenFinish => {
                        object.push(content);
                    }
                    _ => {
                        object.update_last(content);
                    }
                }
                self.state = InternalState::Drawing {
                    object,
                    session: SessionState::Moving,
                };
                self.request_redraw();
            }

            InternalState::Plugin {
                plugin,
                initial,
                last,
                ..
            } => self.plugin_moved(plugin, location, initial, last),
        }
    }

    /// Handles hover without a pressed button (view coordinates). Only a
    /// tracking drawing session reacts, moving its preview point.
    pub fn pointer_tracked(&mut self, location: Point) {
        let content = self.transform.view_to_content(location);
        if let InternalState::Drawing {
            object,
            session: SessionState::Tracking,
        } = &mut self.state
        {
            object.update_last(content);
            self.request_redraw();
        }
    }

    fn selecting_moved(
        &mut self,
        location: Point,
        origin: Point,
        initial_selection: Vec<ObjectId>,
    ) {
        let size = Size::new(
            (location.x - origin.x).round(),
            (location.y - origin.y).round(),
        );
        let rect = Rect::new(origin, size);
        let content_rect = self.transform.view_rect_to_content(rect).standardized();
        let hits = self.objects_in_rect(content_rect);

        let selection = if self.bidirectional_selection {
            let mut toggled: Vec<ObjectId> = initial_selection
                .iter()
                .copied()
                .filter(|id| !hits.contains(id))
                .collect();
            toggled.extend(hits.iter().filter(|id| !initial_selection.contains(id)));
            toggled
        } else {
            hits
        };

        self.internal_select(&selection, false);
        self.state = InternalState::Selecting {
            rect,
            initial_selection,
        };
        self.request_redraw();
    }

    fn editing_moved(
        &mut self,
        object: ObjectId,
        position: Position,
        location: Point,
        initial: Point,
        last: Point,
    ) {
        self.state = InternalState::Editing {
            object,
            position,
            initial,
            last: location,
        };

        let Some(target) = self.objects.iter_mut().find(|o| o.id() == object) else {
            return;
        };
        let Some(item) = target.layout().get(position) else {
            return;
        };
        target.update(item + (location - last), position);
        self.invalidate_objects();

        self.notify(|delegate, view| delegate.object_edited(view, object, position));
    }

    fn moving_moved(&mut self, object: ObjectId, location: Point, initial: Point, last: Point) {
        self.state = InternalState::Moving {
            object,
            initial,
            last: location,
        };

        let delta = location - last;
        for target in self
            .objects
            .iter_mut()
            .filter(|o| self.selection.contains(&o.id()))
        {
            target.translate(delta.x, delta.y);
        }
        self.invalidate_objects();

        let moved = self.selection.clone();
        self.notify(|delegate, view| delegate.objects_moved(view, &moved));
    }
}
