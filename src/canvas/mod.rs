//! The canvas view: objects, selection, the pointer state machine and the
//! undo ledger behind one host-facing struct.
//!
//! This module is organized into several submodules:
//! - `delegate` - Host notifications
//! - `objects` - Add, remove and select objects
//! - `session` - Drawing sessions
//! - `undo` - Undo and redo application
//! - `plugins` - Plugin installation and dispatch
//! - `render` - The render pass
//!
//! Pointer handlers live in [`crate::input`].

mod delegate;
mod objects;
mod plugins;
mod render;
mod session;
mod undo;

pub use delegate::{CanvasDelegate, ContextMenu};

use crate::config::CanvasConfig;
use crate::geometry::{Point, Rect, Size};
use crate::input::{CanvasState, ContentTransform, InternalState};
use crate::layout::Position;
use crate::object::{ObjectId, ObjectRenderer};
use crate::plugin::InstalledPlugin;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::undo::{UndoLedger, new_ledger};
use std::collections::HashSet;
use tracing::debug;

pub struct CanvasView {
    pub(crate) config: CanvasConfig,
    pub(crate) transform: ContentTransform,
    pub(crate) objects: Vec<ObjectRenderer>,
    pub(crate) selection: Vec<ObjectId>,
    pub(crate) state: InternalState,
    pub(crate) plugins: Vec<InstalledPlugin>,
    pub(crate) ledger: UndoLedger,
    pub(crate) bidirectional_selection: bool,
    delegate: Option<Box<dyn CanvasDelegate>>,
    spatial_index: SpatialIndex,
    index_dirty: bool,
    needs_redraw: bool,
}

impl CanvasView {
    pub fn new(config: CanvasConfig) -> Self {
        let ledger = new_ledger(config.levels_of_undo);
        Self {
            config,
            transform: ContentTransform::default(),
            objects: Vec::new(),
            selection: Vec::new(),
            state: InternalState::Idle,
            plugins: Vec::new(),
            ledger,
            bidirectional_selection: false,
            delegate: None,
            spatial_index: SpatialIndex::new(),
            index_dirty: false,
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Replaces the configuration. The undo level cap applies immediately.
    pub fn set_config(&mut self, config: CanvasConfig) {
        self.ledger
            .borrow_mut()
            .set_levels_of_undo(config.levels_of_undo);
        self.config = config;
        self.request_redraw();
    }

    // ========================================================================
    // Read-only state
    // ========================================================================

    pub fn objects(&self) -> &[ObjectRenderer] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&ObjectRenderer> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Mutable access to a committed object. Invalidates hit-test caches.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ObjectRenderer> {
        self.index_dirty = true;
        self.needs_redraw = true;
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn contains_object(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }

    /// Selected object ids, in selection order.
    pub fn selected_objects(&self) -> &[ObjectId] {
        &self.selection
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }

    /// The object of the running drawing session.
    pub fn current_object(&self) -> Option<&ObjectRenderer> {
        self.state.drawing_object()
    }

    pub fn state(&self) -> CanvasState {
        self.state.tag()
    }

    /// The rubber-band rect in view coordinates while selecting.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.state.selection_rect()
    }

    pub fn undo_ledger(&self) -> &UndoLedger {
        &self.ledger
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    pub fn bounds(&self) -> Rect {
        self.transform.bounds()
    }

    pub fn content_size(&self) -> Size {
        self.transform.content_size()
    }

    pub fn content_rect(&self) -> Rect {
        self.transform.content_rect()
    }

    pub fn content_transform(&self) -> ContentTransform {
        self.transform
    }

    /// `(to_content, to_view)` scale factors.
    pub fn scale_factors(&self) -> (Point, Point) {
        (
            self.transform.to_content_scale(),
            self.transform.to_view_scale(),
        )
    }

    pub fn convert_view_to_content(&self, point: Point) -> Point {
        self.transform.view_to_content(point)
    }

    pub fn convert_content_to_view(&self, point: Point) -> Point {
        self.transform.content_to_view(point)
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.transform = ContentTransform::new(bounds, self.transform.content_size());
        self.request_redraw();
    }

    /// Changes the content size, rescaling every object and the drawing
    /// object to match.
    pub fn set_content_size(&mut self, size: Size) {
        let old = self.transform.content_size();
        if old == size {
            return;
        }

        if !old.is_empty() && !size.is_empty() {
            let (sx, sy) = (size.width / old.width, size.height / old.height);
            for object in &mut self.objects {
                object.rescale(sx, sy);
            }
            if let Some(object) = self.state.drawing_object_mut() {
                object.rescale(sx, sy);
            }
            debug!(sx, sy, "rescaled objects for new content size");
        }

        self.transform = ContentTransform::new(self.transform.bounds(), size);
        self.index_dirty = true;
        self.request_redraw();
    }

    /// Selection range converted to content units.
    pub(crate) fn content_selection_range(&self) -> f64 {
        self.config.selection_range * self.transform.to_content_scale().x
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    /// While set, clicks and rubber bands toggle instead of replacing the
    /// selection.
    pub fn set_bidirectional_selection(&mut self, enabled: bool) {
        self.bidirectional_selection = enabled;
    }

    pub fn is_bidirectional_selection(&self) -> bool {
        self.bidirectional_selection
    }

    /// Resets modifier state when the host window loses focus.
    pub fn focus_lost(&mut self) {
        self.bidirectional_selection = false;
    }

    // ========================================================================
    // Delegate
    // ========================================================================

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn CanvasDelegate>>) {
        self.delegate = delegate;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Calls into the delegate with a shared view of the canvas.
    pub(crate) fn notify<R>(
        &mut self,
        f: impl FnOnce(&mut dyn CanvasDelegate, &CanvasView) -> R,
    ) -> Option<R> {
        let mut delegate = self.delegate.take()?;
        let result = f(delegate.as_mut(), self);
        self.delegate = Some(delegate);
        Some(result)
    }

    // ========================================================================
    // Redraw
    // ========================================================================

    pub(crate) fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn invalidate_objects(&mut self) {
        self.index_dirty = true;
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
            || self.objects.iter().any(ObjectRenderer::needs_redraw)
            || self
                .state
                .drawing_object()
                .is_some_and(ObjectRenderer::needs_redraw)
            || self.plugins.iter().any(|p| p.redraw_requested)
    }

    /// Consumes every pending redraw request. Returns whether one was pending.
    pub fn take_redraw_request(&mut self) -> bool {
        let mut pending = std::mem::take(&mut self.needs_redraw);
        for object in &mut self.objects {
            pending |= object.take_redraw_request();
        }
        if let Some(object) = self.state.drawing_object_mut() {
            pending |= object.take_redraw_request();
        }
        for plugin in &mut self.plugins {
            pending |= std::mem::take(&mut plugin.redraw_requested);
        }
        pending
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    fn refresh_spatial_index(&mut self) {
        if !self.index_dirty {
            return;
        }
        profile_scope!("rebuild_spatial_index");
        let items = self.objects.iter().filter_map(|object| {
            let pad = object.line_width() / 2.0;
            object
                .hit_bounds()
                .map(|bounds| (object.id(), bounds.inset_by(-pad, -pad)))
        });
        self.spatial_index.rebuild(items);
        self.index_dirty = false;
    }

    /// Topmost object under `location` (content coordinates). Selected
    /// objects win over unselected ones.
    pub(crate) fn find_object(&mut self, location: Point) -> Option<ObjectId> {
        profile_scope!("find_object");
        self.refresh_spatial_index();

        let range = self.content_selection_range();
        let candidates: HashSet<ObjectId> = self
            .spatial_index
            .query_point(location, range)
            .into_iter()
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let hit = |object: &&ObjectRenderer| {
            candidates.contains(&object.id()) && object.selection_test_point(location, range)
        };
        let selected = self.selection.iter().rev().filter_map(|id| self.object(*id));
        let others = self
            .objects
            .iter()
            .rev()
            .filter(|o| !self.selection.contains(&o.id()));

        selected.chain(others).find(hit).map(ObjectRenderer::id)
    }

    /// Editable handle of a selected object under `location`.
    pub(crate) fn find_editable_item(&self, location: Point) -> Option<(ObjectId, Position)> {
        let range = self.content_selection_range();
        for id in self.selection.iter().rev() {
            let Some(object) = self.object(*id) else {
                continue;
            };
            if !object.is_editable() {
                continue;
            }
            let positions: Vec<(Position, Point)> = object.layout().positions().collect();
            let hit = positions.into_iter().rev().find(|(position, item)| {
                item.distance(location) <= range && object.can_edit_item(*position)
            });
            if let Some((position, _)) = hit {
                return Some((*id, position));
            }
        }
        None
    }

    /// Objects selected by `rect` (content coordinates), in z-order.
    pub(crate) fn objects_in_rect(&mut self, rect: Rect) -> Vec<ObjectId> {
        profile_scope!("objects_in_rect");
        self.refresh_spatial_index();

        let candidates: HashSet<ObjectId> =
            self.spatial_index.query_rect(rect).into_iter().collect();
        self.objects
            .iter()
            .filter(|o| candidates.contains(&o.id()) && o.selection_test_rect(rect))
            .map(ObjectRenderer::id)
            .collect()
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl std::fmt::Debug for CanvasView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasView")
            .field("state", &self.state.tag())
            .field("objects", &self.objects.len())
            .field("selection", &self.selection)
            .field("plugins", &self.plugins)
            .field("content_rect", &self.content_rect())
            .finish_non_exhaustive()
    }
}
