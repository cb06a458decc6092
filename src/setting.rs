//! Observable values with undo and redraw policies.
//!
//! An [`ObservableValue`] never talks to an undo ledger itself. `set` reports
//! a [`SettingChange`] and the owner decides whether to register an undo entry
//! or request a redraw, so the same value type works inside objects, plugins
//! and the canvas.

use std::fmt;
use uuid::Uuid;

/// Whether a change is recorded for undo, and under which action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoMode {
    Disabled,
    Enabled { name: Option<String> },
}

impl UndoMode {
    pub fn enabled() -> Self {
        Self::Enabled { name: None }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Enabled {
            name: Some(name.into()),
        }
    }
}

impl Default for UndoMode {
    fn default() -> Self {
        Self::enabled()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawMode {
    Disabled,
    #[default]
    Enabled,
}

/// Handle returned by [`ObservableValue::observe`], used to stop observing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationToken(Uuid);

/// Options for [`ObservableValue::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObserveOptions {
    /// Call the handler once immediately with the current value.
    pub initial: bool,
}

impl ObserveOptions {
    pub const NEW: ObserveOptions = ObserveOptions { initial: false };
    pub const INITIAL: ObserveOptions = ObserveOptions { initial: true };
}

/// What a `set` did, for the owner to act on.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange<T> {
    pub old: T,
    /// `Some(name)` when the change should be recorded for undo.
    pub undo: Option<Option<String>>,
    pub redraw: bool,
}

impl<T> SettingChange<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SettingChange<U> {
        SettingChange {
            old: f(self.old),
            undo: self.undo,
            redraw: self.redraw,
        }
    }
}

type Observer<T> = Box<dyn FnMut(&T)>;

pub struct ObservableValue<T> {
    value: T,
    undo_mode: UndoMode,
    redraw_mode: RedrawMode,
    observers: Vec<(ObservationToken, Observer<T>)>,
}

impl<T: Clone> ObservableValue<T> {
    pub fn new(value: T) -> Self {
        Self::with_modes(value, UndoMode::default(), RedrawMode::default())
    }

    pub fn with_modes(value: T, undo_mode: UndoMode, redraw_mode: RedrawMode) -> Self {
        Self {
            value,
            undo_mode,
            redraw_mode,
            observers: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value`, notifies observers and reports the change.
    pub fn set(&mut self, value: T) -> SettingChange<T> {
        let old = std::mem::replace(&mut self.value, value);
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
        SettingChange {
            old,
            undo: match &self.undo_mode {
                UndoMode::Enabled { name } => Some(name.clone()),
                UndoMode::Disabled => None,
            },
            redraw: self.redraw_mode == RedrawMode::Enabled,
        }
    }

    pub fn undo_mode(&self) -> &UndoMode {
        &self.undo_mode
    }

    pub fn set_undo_mode(&mut self, mode: UndoMode) {
        self.undo_mode = mode;
    }

    pub fn redraw_mode(&self) -> RedrawMode {
        self.redraw_mode
    }

    pub fn set_redraw_mode(&mut self, mode: RedrawMode) {
        self.redraw_mode = mode;
    }

    pub fn observe(
        &mut self,
        options: ObserveOptions,
        mut handler: impl FnMut(&T) + 'static,
    ) -> ObservationToken {
        let token = ObservationToken(Uuid::new_v4());
        if options.initial {
            handler(&self.value);
        }
        self.observers.push((token, Box::new(handler)));
        token
    }

    /// Returns false when the token was unknown.
    pub fn remove_observer(&mut self, token: ObservationToken) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(t, _)| *t != token);
        self.observers.len() != before
    }

    pub fn remove_all_observers(&mut self) {
        self.observers.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableValue")
            .field("value", &self.value)
            .field("undo_mode", &self.undo_mode)
            .field("redraw_mode", &self.redraw_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: Clone + Default> Default for ObservableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
