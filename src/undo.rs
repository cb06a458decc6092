//! Undo ledger shared by the canvas, its objects and its plugins.
//!
//! Entries describe inverse actions as data. Whoever applies an entry also
//! registers the entry's own inverse; the manager routes that registration to
//! the redo stack while undoing and back to the undo stack while redoing.

use crate::geometry::{Point, Size};
use crate::layout::Position;
use crate::object::{ObjectId, ObjectRenderer, SettingValue};
use crate::plugin::PluginId;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Who an entry belongs to. Used to purge entries when the owner goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndoTarget {
    Canvas,
    Object(ObjectId),
    Plugin(PluginId),
}

#[derive(Debug)]
pub struct UndoEntry<A> {
    pub target: UndoTarget,
    pub name: Option<String>,
    pub action: A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Idle,
    Undoing,
    Redoing,
}

/// Undo and redo stacks of inverse actions.
#[derive(Debug)]
pub struct UndoManager<A> {
    undo_stack: Vec<UndoEntry<A>>,
    redo_stack: Vec<UndoEntry<A>>,
    mode: Mode,
    disabled: usize,
    levels_of_undo: Option<usize>,
}

impl<A> Default for UndoManager<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> UndoManager<A> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            mode: Mode::Idle,
            disabled: 0,
            levels_of_undo: None,
        }
    }

    /// Caps the undo stack; the oldest entries are dropped first.
    pub fn with_levels(levels: Option<usize>) -> Self {
        Self {
            levels_of_undo: levels.filter(|&n| n > 0),
            ..Self::new()
        }
    }

    pub fn levels_of_undo(&self) -> Option<usize> {
        self.levels_of_undo
    }

    pub fn set_levels_of_undo(&mut self, levels: Option<usize>) {
        self.levels_of_undo = levels.filter(|&n| n > 0);
        self.trim();
    }

    /// Records an inverse action. Returns false while registration is disabled.
    pub fn register(&mut self, target: UndoTarget, name: Option<String>, action: A) -> bool {
        if !self.is_registration_enabled() {
            return false;
        }

        let entry = UndoEntry {
            target,
            name,
            action,
        };
        match self.mode {
            Mode::Idle => {
                self.redo_stack.clear();
                self.undo_stack.push(entry);
                self.trim();
            }
            Mode::Undoing => self.redo_stack.push(entry),
            Mode::Redoing => {
                self.undo_stack.push(entry);
                self.trim();
            }
        }
        true
    }

    fn trim(&mut self) {
        if let Some(levels) = self.levels_of_undo {
            let excess = self.undo_stack.len().saturating_sub(levels);
            if excess > 0 {
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Pops the newest undo entry and enters undo mode until [`end`](Self::end).
    pub fn begin_undo(&mut self) -> Option<UndoEntry<A>> {
        if self.mode != Mode::Idle {
            return None;
        }
        let entry = self.undo_stack.pop()?;
        self.mode = Mode::Undoing;
        trace!(name = ?entry.name, target = ?entry.target, "undo");
        Some(entry)
    }

    /// Pops the newest redo entry and enters redo mode until [`end`](Self::end).
    pub fn begin_redo(&mut self) -> Option<UndoEntry<A>> {
        if self.mode != Mode::Idle {
            return None;
        }
        let entry = self.redo_stack.pop()?;
        self.mode = Mode::Redoing;
        trace!(name = ?entry.name, target = ?entry.target, "redo");
        Some(entry)
    }

    pub fn end(&mut self) {
        self.mode = Mode::Idle;
    }

    pub fn is_undoing(&self) -> bool {
        self.mode == Mode::Undoing
    }

    pub fn is_redoing(&self) -> bool {
        self.mode == Mode::Redoing
    }

    /// Nestable; each call must be balanced by [`enable_registration`](Self::enable_registration).
    pub fn disable_registration(&mut self) {
        self.disabled += 1;
    }

    pub fn enable_registration(&mut self) {
        self.disabled = self.disabled.saturating_sub(1);
    }

    pub fn is_registration_enabled(&self) -> bool {
        self.disabled == 0
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_action_name(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|e| e.name.as_deref())
    }

    pub fn redo_action_name(&self) -> Option<&str> {
        self.redo_stack.last().and_then(|e| e.name.as_deref())
    }

    /// Drops every entry owned by `target`.
    pub fn remove_all(&mut self, target: UndoTarget) {
        self.undo_stack.retain(|e| e.target != target);
        self.redo_stack.retain(|e| e.target != target);
    }

    /// Drops entries whose action matches `predicate`, regardless of target.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&A) -> bool) {
        self.undo_stack.retain(|e| !predicate(&e.action));
        self.redo_stack.retain(|e| !predicate(&e.action));
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Inverse actions recorded by the canvas and everything installed in it.
#[derive(Debug)]
pub enum CanvasUndo {
    /// Remove objects that were added.
    RemoveObjects { ids: Vec<ObjectId> },
    /// Re-add removed objects, recorded at `content_size`.
    RestoreObjects {
        objects: Vec<ObjectRenderer>,
        content_size: Size,
    },
    /// Move objects back by `offset`, recorded at `content_size`.
    Translate {
        ids: Vec<ObjectId>,
        offset: Point,
        content_size: Size,
    },
    /// Move one layout point back by `offset`, recorded at `content_size`.
    EditItem {
        id: ObjectId,
        position: Position,
        offset: Point,
        content_size: Size,
    },
    /// Restore a style setting of an object.
    ObjectSetting { id: ObjectId, value: SettingValue },
    /// Restore a plugin's enabled flag.
    PluginEnabled { plugin: PluginId, enabled: bool },
}

impl CanvasUndo {
    /// True when the action refers to `id`.
    pub fn references_object(&self, id: ObjectId) -> bool {
        match self {
            Self::RemoveObjects { ids } | Self::Translate { ids, .. } => ids.contains(&id),
            Self::RestoreObjects { objects, .. } => objects.iter().any(|o| o.id() == id),
            Self::EditItem { id: target, .. } | Self::ObjectSetting { id: target, .. } => {
                *target == id
            }
            Self::PluginEnabled { .. } => false,
        }
    }
}

/// Shared handle to the canvas ledger.
pub type UndoLedger = Rc<RefCell<UndoManager<CanvasUndo>>>;

pub fn new_ledger(levels_of_undo: Option<usize>) -> UndoLedger {
    Rc::new(RefCell::new(UndoManager::with_levels(levels_of_undo)))
}
