//! Plugins: auxiliary overlays that can claim pointer gestures.
//!
//! Interactive tiers compete with the built-in hit testing when a gesture
//! begins: `InteractiveOverlay` plugins are asked before any object, and
//! `InteractiveUnderlay` plugins only when nothing else was hit. Overlay
//! tiers are drawn above the objects and underlay tiers below them.

use crate::geometry::{Point, Rect, Size};
use crate::graphics::RenderSurface;
use crate::input::ContentTransform;
use crate::object::{ObjectId, ObjectRenderer};
use crate::setting::ObservableValue;
use crate::undo::UndoLedger;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PLUGIN_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(u64);

impl PluginId {
    pub fn next() -> Self {
        Self(NEXT_PLUGIN_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plugin#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginPriority {
    #[default]
    Overlay,
    Underlay,
    InteractiveOverlay,
    InteractiveUnderlay,
}

impl PluginPriority {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::InteractiveOverlay | Self::InteractiveUnderlay)
    }

    /// Overlay tiers draw after the objects.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Overlay | Self::InteractiveOverlay)
    }
}

/// Gesture snapshot handed to a plugin. Locations are in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PluginState {
    #[default]
    Idle,
    Began {
        location: Point,
    },
    Changed {
        location: Point,
        last: Point,
        initial: Point,
    },
    Ended {
        location: Point,
        last: Point,
        initial: Point,
    },
}

impl PluginState {
    pub fn location(&self) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Began { location }
            | Self::Changed { location, .. }
            | Self::Ended { location, .. } => Some(location),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Read-only view of the canvas given to plugin callbacks.
#[derive(Clone, Copy)]
pub struct PluginContext<'a> {
    pub transform: ContentTransform,
    pub objects: &'a [ObjectRenderer],
    pub selection: &'a [ObjectId],
}

impl<'a> PluginContext<'a> {
    pub fn new(
        transform: ContentTransform,
        objects: &'a [ObjectRenderer],
        selection: &'a [ObjectId],
    ) -> Self {
        Self {
            transform,
            objects,
            selection,
        }
    }

    pub fn content_rect(&self) -> Rect {
        self.transform.content_rect()
    }

    pub fn content_size(&self) -> Size {
        self.transform.content_size()
    }

    /// Content-to-view scale factors.
    pub fn scale_factors(&self) -> Point {
        self.transform.to_view_scale()
    }

    pub fn convert_view_to_content(&self, point: Point) -> Point {
        self.transform.view_to_content(point)
    }

    pub fn convert_content_to_view(&self, point: Point) -> Point {
        self.transform.content_to_view(point)
    }

    pub fn object(&self, id: ObjectId) -> Option<&'a ObjectRenderer> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }
}

pub trait Plugin {
    fn priority(&self) -> PluginPriority {
        PluginPriority::Overlay
    }

    /// Called once the plugin is installed, with its id and the canvas ledger.
    fn installed(&mut self, _id: PluginId, _ledger: &UndoLedger) {}

    fn uninstalled(&mut self) {}

    /// Whether the plugin claims a gesture starting at `location`.
    fn should_begin(&mut self, _context: &PluginContext<'_>, _location: Point) -> bool {
        false
    }

    fn update(&mut self, _context: &PluginContext<'_>, _state: PluginState) {}

    fn should_draw(&self, _context: &PluginContext<'_>, _state: PluginState) -> bool {
        true
    }

    /// Draws in view coordinates.
    fn draw(
        &self,
        _context: &PluginContext<'_>,
        _state: PluginState,
        _surface: &mut dyn RenderSurface,
    ) {
    }
}

/// A plugin owned by a canvas.
pub(crate) struct InstalledPlugin {
    pub id: PluginId,
    pub plugin: Box<dyn Plugin>,
    pub enabled: ObservableValue<bool>,
    pub redraw_requested: bool,
}

impl InstalledPlugin {
    pub fn new(id: PluginId, plugin: Box<dyn Plugin>) -> Self {
        Self {
            id,
            plugin,
            enabled: ObservableValue::new(true),
            redraw_requested: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.get()
    }

    pub fn priority(&self) -> PluginPriority {
        self.plugin.priority()
    }
}

impl fmt::Debug for InstalledPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstalledPlugin")
            .field("id", &self.id)
            .field("priority", &self.priority())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
