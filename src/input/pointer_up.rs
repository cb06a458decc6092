//! Pointer up: gesture finalisation and undo registration.

use super::state::{InternalState, SessionState};
use crate::canvas::CanvasView;
use crate::constants::POINTER_EVENT_WARN_MS;
use crate::geometry::Point;
use crate::layout::LayoutAction;
use crate::object::ObjectRenderer;
use crate::profile_scope;
use tracing::debug;

impl CanvasView {
    /// Handles a release at `location` (view coordinates). Also used for
    /// cancelled touches.
    pub fn pointer_up(&mut self, location: Point) {
        profile_scope!("pointer_up", POINTER_EVENT_WARN_MS);

        let content = self.transform.view_to_content(location);
        match std::mem::take(&mut self.state) {
            InternalState::Idle => {}

            InternalState::Selecting { .. } | InternalState::OnItem { .. } => {
                self.request_redraw();
            }

            InternalState::OnObject {
                object,
                already_selected,
                ..
            } => {
                if self.bidirectional_selection {
                    if already_selected {
                        self.deselect_objects(&[object]);
                    }
                } else {
                    self.internal_select(&[object], false);
                }
                self.request_redraw();
            }

            InternalState::Editing {
                object,
                position,
                initial,
                last,
            } => {
                self.request_redraw();
                self.register_edit(object, position, last - initial);
                debug!(%object, ?position, "edit ended");
            }

            InternalState::Moving { initial, last, .. } => {
                self.request_redraw();
                let moved = self.selection.clone();
                self.register_translate(moved, last - initial);
                debug!("move ended");
            }

            InternalState::Drawing { object, session } => {
                self.drawing_pointer_up(object, session, content);
            }

            InternalState::Plugin {
                plugin,
                initial,
                last,
                ..
            } => self.plugin_ended(plugin, location, initial, last),
        }
    }

    fn drawing_pointer_up(
        &mut self,
        mut object: Box<ObjectRenderer>,
        session: SessionState,
        location: Point,
    ) {
        let action = object.layout_action();
        let mut finish = false;

        let session = match action {
            LayoutAction::ContinuousPush { .. } => SessionState::Idle,
            LayoutAction::ContinuousPushThenFinish => {
                finish = true;
                session
            }
            _ => match session {
                SessionState::Pressing => SessionState::Tracking,
                SessionState::Tracking => match action {
                    LayoutAction::Push { .. } => {
                        object.push(location);
                        SessionState::Tracking
                    }
                    LayoutAction::Finish => {
                        finish = true;
                        session
                    }
                    _ => SessionState::Idle,
                },
                SessionState::Idle | SessionState::Moving => {
                    finish = matches!(action, LayoutAction::Finish);
                    SessionState::Idle
                }
            },
        };

        self.state = InternalState::Drawing { object, session };
        if finish {
            self.finish_drawing_session();
        }
        self.request_redraw();
    }
}
