//! Undo and redo application.
//!
//! An entry is applied with the ledger released, so the code performing the
//! inverse can register its own inverse. Entries whose target is gone are
//! dropped and the next one is tried.

use super::CanvasView;
use crate::config::UndoCategory;
use crate::geometry::{Point, Size};
use crate::layout::Position;
use crate::object::ObjectId;
use crate::undo::{CanvasUndo, UndoEntry, UndoTarget};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undo,
    Redo,
}

impl CanvasView {
    pub fn can_undo(&self) -> bool {
        self.ledger.borrow().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ledger.borrow().can_redo()
    }

    pub fn undo_action_name(&self) -> Option<String> {
        self.ledger.borrow().undo_action_name().map(str::to_owned)
    }

    pub fn redo_action_name(&self) -> Option<String> {
        self.ledger.borrow().redo_action_name().map(str::to_owned)
    }

    /// Reverts the newest entry. Ignored while a gesture or drawing session
    /// is active.
    pub fn undo(&mut self) -> bool {
        self.step(Direction::Undo)
    }

    /// Re-applies the newest undone entry. Ignored while a gesture or
    /// drawing session is active.
    pub fn redo(&mut self) -> bool {
        self.step(Direction::Redo)
    }

    fn step(&mut self, direction: Direction) -> bool {
        if !self.state.is_idle() {
            debug!(?direction, "ignored while busy");
            return false;
        }

        loop {
            let entry = match direction {
                Direction::Undo => self.ledger.borrow_mut().begin_undo(),
                Direction::Redo => self.ledger.borrow_mut().begin_redo(),
            };
            let Some(entry) = entry else {
                return false;
            };

            let name = entry.name.clone();
            let applied = self.apply_entry(entry);
            self.ledger.borrow_mut().end();

            if applied {
                debug!(?direction, name = ?name, "applied");
                self.request_redraw();
                return true;
            }
            debug!(?direction, name = ?name, "dropped stale entry");
        }
    }

    /// Ratio of the current content size to `recorded`, per axis.
    fn scale_from(&self, recorded: Size) -> Point {
        let current = self.content_size();
        if recorded.is_empty() || current.is_empty() {
            return Point::new(1.0, 1.0);
        }
        Point::new(
            current.width / recorded.width,
            current.height / recorded.height,
        )
    }

    fn apply_entry(&mut self, entry: UndoEntry<CanvasUndo>) -> bool {
        match entry.action {
            CanvasUndo::RemoveObjects { ids } => !self.internal_remove(&ids).is_empty(),

            CanvasUndo::RestoreObjects {
                mut objects,
                content_size,
            } => {
                objects.retain(|o| !self.contains_object(o.id()));
                if objects.is_empty() {
                    return false;
                }
                let scale = self.scale_from(content_size);
                for object in &mut objects {
                    object.rescale(scale.x, scale.y);
                }
                !self.internal_add(objects).is_empty()
            }

            CanvasUndo::Translate {
                ids,
                offset,
                content_size,
            } => {
                let ids: Vec<ObjectId> = ids
                    .into_iter()
                    .filter(|id| self.contains_object(*id))
                    .collect();
                if ids.is_empty() {
                    return false;
                }
                let scale = self.scale_from(content_size);
                let inverse = Point::new(-offset.x * scale.x, -offset.y * scale.y);
                for object in self.objects.iter_mut().filter(|o| ids.contains(&o.id())) {
                    object.translate(inverse.x, inverse.y);
                }
                self.invalidate_objects();
                self.register_translate(ids.clone(), inverse);
                self.notify(|delegate, view| delegate.objects_moved(view, &ids));
                true
            }

            CanvasUndo::EditItem {
                id,
                position,
                offset,
                content_size,
            } => {
                let scale = self.scale_from(content_size);
                let inverse = Point::new(-offset.x * scale.x, -offset.y * scale.y);
                let Some(object) = self.objects.iter_mut().find(|o| o.id() == id) else {
                    return false;
                };
                let Some(item) = object.layout().get(position) else {
                    return false;
                };
                object.update(item + inverse, position);
                self.invalidate_objects();
                self.register_edit(id, position, inverse);
                self.notify(|delegate, view| delegate.object_edited(view, id, position));
                true
            }

            CanvasUndo::ObjectSetting { id, value } => {
                let Some(object) = self.objects.iter_mut().find(|o| o.id() == id) else {
                    return false;
                };
                object.apply_setting(value);
                self.invalidate_objects();
                true
            }

            CanvasUndo::PluginEnabled { plugin, enabled } => {
                self.set_plugin_enabled(plugin, enabled)
            }
        }
    }

    /// Registers moving `ids` back by `offset`. Zero offsets are skipped.
    pub(crate) fn register_translate(&mut self, ids: Vec<ObjectId>, offset: Point) {
        if offset == Point::ZERO || ids.is_empty() {
            return;
        }
        let name = self.config.undo_name(UndoCategory::Dragging);
        let content_size = self.content_size();
        self.ledger.borrow_mut().register(
            UndoTarget::Canvas,
            name,
            CanvasUndo::Translate {
                ids,
                offset,
                content_size,
            },
        );
    }

    /// Registers moving an item back by `offset`. Zero offsets are skipped.
    pub(crate) fn register_edit(&mut self, id: ObjectId, position: Position, offset: Point) {
        if offset == Point::ZERO {
            return;
        }
        let name = self.config.undo_name(UndoCategory::Editing);
        let content_size = self.content_size();
        self.ledger.borrow_mut().register(
            UndoTarget::Object(id),
            name,
            CanvasUndo::EditItem {
                id,
                position,
                offset,
                content_size,
            },
        );
    }
}
