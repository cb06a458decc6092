//! Adding, removing and selecting committed objects.

use super::CanvasView;
use crate::config::UndoCategory;
use crate::object::{ObjectId, ObjectRenderer};
use crate::undo::{CanvasUndo, UndoTarget};
use tracing::debug;

impl CanvasView {
    // ========================================================================
    // Add
    // ========================================================================

    /// Finished or finishable, non-empty and not already on the canvas.
    pub fn can_add_object(&self, object: &ObjectRenderer) -> bool {
        (object.is_finished() || object.can_finish())
            && !object.layout().is_empty()
            && !self.contains_object(object.id())
    }

    /// Adds every object that [`can_add_object`](Self::can_add_object)
    /// accepts, marking it finished. Returns the ids that were added.
    pub fn add_objects(&mut self, objects: Vec<ObjectRenderer>) -> Vec<ObjectId> {
        let mut accepted: Vec<ObjectRenderer> = Vec::with_capacity(objects.len());
        for object in objects {
            let duplicate = accepted.iter().any(|o| o.id() == object.id());
            if duplicate || !self.can_add_object(&object) {
                debug!(object = %object.id(), "rejected object");
                continue;
            }
            accepted.push(object);
        }

        let ids = self.internal_add(accepted);
        self.request_redraw();
        ids
    }

    /// Commits objects and registers their removal for undo.
    pub(crate) fn internal_add(&mut self, objects: Vec<ObjectRenderer>) -> Vec<ObjectId> {
        if objects.is_empty() {
            return Vec::new();
        }

        let mut ids = Vec::with_capacity(objects.len());
        for mut object in objects {
            object.mark_as_finished();
            object.attach_ledger(self.ledger.clone());
            ids.push(object.id());
            self.objects.push(object);
        }

        let name = self.config.undo_name(UndoCategory::AddObjects);
        self.ledger.borrow_mut().register(
            UndoTarget::Canvas,
            name,
            CanvasUndo::RemoveObjects { ids: ids.clone() },
        );

        self.invalidate_objects();
        debug!(count = ids.len(), "added objects");
        ids
    }

    // ========================================================================
    // Remove
    // ========================================================================

    pub fn remove_objects(&mut self, ids: &[ObjectId]) {
        self.internal_remove(ids);
        self.request_redraw();
    }

    pub fn remove_selected_objects(&mut self) {
        let ids = self.selection.clone();
        self.remove_objects(&ids);
    }

    pub fn remove_all_objects(&mut self) {
        let ids: Vec<ObjectId> = self.objects.iter().map(ObjectRenderer::id).collect();
        self.remove_objects(&ids);
    }

    /// Detaches objects and registers their restoration for undo. Unknown
    /// ids are skipped. Returns the ids that were removed.
    pub(crate) fn internal_remove(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        let mut removed = Vec::new();
        let mut deselected = Vec::new();

        for id in ids {
            let Some(index) = self.objects.iter().position(|o| o.id() == *id) else {
                continue;
            };
            let mut object = self.objects.remove(index);
            object.detach_ledger();

            if let Some(index) = self.selection.iter().position(|s| s == id) {
                self.selection.remove(index);
                deselected.push(*id);
            }
            if self.state.references_object(*id) {
                self.state = Default::default();
            }
            removed.push(object);
        }

        if removed.is_empty() {
            return Vec::new();
        }

        let removed_ids: Vec<ObjectId> = removed.iter().map(ObjectRenderer::id).collect();
        self.invalidate_objects();
        debug!(count = removed_ids.len(), "removed objects");

        if !deselected.is_empty() {
            self.notify(|delegate, view| delegate.objects_deselected(view, &deselected));
        }

        let name = self.config.undo_name(UndoCategory::RemoveObjects);
        let content_size = self.content_size();
        self.ledger.borrow_mut().register(
            UndoTarget::Canvas,
            name,
            CanvasUndo::RestoreObjects {
                objects: removed,
                content_size,
            },
        );
        removed_ids
    }

    // ========================================================================
    // Select
    // ========================================================================

    /// Adds `ids` to the selection, replacing it unless `extending`.
    /// Notifies deselections before selections.
    pub(crate) fn internal_select(&mut self, ids: &[ObjectId], extending: bool) {
        let mut added: Vec<ObjectId> = Vec::new();
        for id in ids {
            if !self.selection.contains(id) && !added.contains(id) {
                added.push(*id);
            }
        }
        let removed: Vec<ObjectId> = if extending {
            Vec::new()
        } else {
            self.selection
                .iter()
                .copied()
                .filter(|id| !ids.contains(id))
                .collect()
        };

        if !removed.is_empty() {
            self.selection.retain(|id| !removed.contains(id));
            self.notify(|delegate, view| delegate.objects_deselected(view, &removed));
        }
        if !added.is_empty() {
            self.selection.extend_from_slice(&added);
            self.notify(|delegate, view| delegate.objects_selected(view, &added));
        }
        if !removed.is_empty() || !added.is_empty() {
            self.request_redraw();
        }
    }

    pub fn select_objects(&mut self, ids: &[ObjectId], extending: bool) {
        let ids: Vec<ObjectId> = ids
            .iter()
            .copied()
            .filter(|id| self.contains_object(*id))
            .collect();
        self.internal_select(&ids, extending);
    }

    pub fn select_all_objects(&mut self) {
        let ids: Vec<ObjectId> = self.objects.iter().map(ObjectRenderer::id).collect();
        self.internal_select(&ids, false);
    }

    pub fn deselect_objects(&mut self, ids: &[ObjectId]) {
        let remaining: Vec<ObjectId> = self
            .selection
            .iter()
            .copied()
            .filter(|id| !ids.contains(id))
            .collect();
        self.internal_select(&remaining, false);
    }

    pub fn deselect_all_objects(&mut self) {
        self.internal_select(&[], false);
    }
}
