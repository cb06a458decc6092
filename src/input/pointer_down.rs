//! Pointer down: hit testing and gesture start.
//!
//! ## Hit Test Priority
//!
//! 1. Interactive overlay plugins
//! 2. Item handles of selected editable objects
//! 3. Object bodies, selected objects first, then topmost first
//! 4. Interactive underlay plugins
//! 5. Empty space, which starts a rubber-band selection

use super::state::{InternalState, SessionState};
use crate::canvas::{CanvasView, ContextMenu};
use crate::constants::POINTER_EVENT_WARN_MS;
use crate::geometry::{Point, Rect, Size};
use crate::layout::LayoutAction;
use crate::plugin::PluginPriority;
use crate::profile_scope;
use tracing::{debug, trace};

impl CanvasView {
    /// Handles a press at `location` (view coordinates).
    pub fn pointer_down(&mut self, location: Point) {
        profile_scope!("pointer_down", POINTER_EVENT_WARN_MS);

        if self.state.is_drawing() {
            self.drawing_pointer_down(location);
            return;
        }
        if !self.state.is_idle() {
            trace!(state = ?self.state.tag(), "pointer down ignored");
            return;
        }

        let content = self.transform.view_to_content(location);

        if let Some(plugin) = self.find_plugin(PluginPriority::InteractiveOverlay, location) {
            self.plugin_began(plugin, location);
            return;
        }

        if let Some((object, position)) = self.find_editable_item(content) {
            self.internal_select(&[object], false);
            self.state = InternalState::OnItem {
                object,
                position,
                initial: content,
            };
            debug!(%object, ?position, "pressed item");
            self.request_redraw();
            return;
        }

        if let Some(object) = self.find_object(content) {
            let already_selected = self.is_selected(object);
            if !already_selected {
                self.internal_select(&[object], self.bidirectional_selection);
            }
            self.state = InternalState::OnObject {
                object,
                already_selected,
                initial: content,
            };
            debug!(%object, already_selected, "pressed object");
            self.request_redraw();
            return;
        }

        if let Some(plugin) = self.find_plugin(PluginPriority::InteractiveUnderlay, location) {
            self.plugin_began(plugin, location);
            return;
        }

        self.selecting_began(location);
    }

    fn selecting_began(&mut self, location: Point) {
        let origin = Point::new(location.x.round() + 0.5, location.y.round() + 0.5);
        if !self.bidirectional_selection {
            self.internal_select(&[], false);
        }
        self.state = InternalState::Selecting {
            rect: Rect::new(origin, Size::ZERO),
            initial_selection: self.selection.clone(),
        };
        self.request_redraw();
    }

    fn drawing_pointer_down(&mut self, location: Point) {
        let content = self.transform.view_to_content(location);
        let InternalState::Drawing { object, session } = &mut self.state else {
            return;
        };

        match object.layout_action() {
            LayoutAction::Push { .. } => {
                if *session == SessionState::Tracking {
                    object.update_last(content);
                } else {
                    // The second point is the preview that follows the pointer.
                    object.push(content);
                    object.push(content);
                    *session = SessionState::Pressing;
                }
            }
            LayoutAction::PushSection { .. } => {
                if *session == SessionState::Tracking {
                    object.update_last(content);
                } else {
                    object.push_section(content);
                    object.push(content);
                    *session = SessionState::Pressing;
                }
            }
            LayoutAction::ContinuousPush { .. } | LayoutAction::ContinuousPushThenFinish => {
                object.push_section(content);
                *session = SessionState::Pressing;
            }
            LayoutAction::Finish => {}
        }
        self.request_redraw();
    }

    /// Prepares a context menu for a secondary press at `location` (view
    /// coordinates). Only answers while idle and inside the content rect.
    ///
    /// The object under the pointer is selected unless it already is; empty
    /// space clears the selection.
    pub fn request_context_menu(&mut self, location: Point) -> Option<ContextMenu> {
        if !self.state.is_idle() || !self.transform.contains_view_point(location) {
            return None;
        }

        let content = self.transform.view_to_content(location);
        let object = self.find_object(content);
        match object {
            Some(id) if !self.is_selected(id) => self.internal_select(&[id], false),
            Some(_) => {}
            None => self.internal_select(&[], false),
        }
        self.request_redraw();

        self.notify(|delegate, view| delegate.context_menu(view, object))
            .flatten()
    }
}
