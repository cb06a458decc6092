//! Drawable objects built from an [`ObjectLayout`].
//!
//! An [`ObjectRenderer`] pairs a layout with a [`Shape`] that interprets it.
//! Every mutator is gated and lenient: illegal calls leave the object
//! untouched and report `false` instead of failing. The interaction state
//! machine checks the `can_*` predicates itself.

mod settings;

pub use settings::{SettingDescriptor, SettingKey, SettingValue, ShapeStyle};

use crate::constants::{OBJECT_FILL_COLOR, OBJECT_LINE_WIDTH, OBJECT_STROKE_COLOR};
use crate::geometry::{Angle, Line, Point, Rect};
use crate::graphics::{Color, Graphic, RenderSurface};
use crate::layout::{LayoutAction, ObjectLayout, Position};
use crate::selection::RectSelector;
use crate::setting::{
    ObservableValue, ObservationToken, ObserveOptions, RedrawMode, SettingChange, UndoMode,
};
use crate::shapes::Shape;
use crate::undo::{CanvasUndo, UndoLedger, UndoTarget};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an object, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Either a layout position or a free point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointDescriptor {
    Item(Position),
    Fixed(Point),
}

/// Editing `position` also moves the bound point by the edit delta times
/// `offset`, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBinding {
    pub position: Position,
    pub offset: Point,
}

impl ItemBinding {
    pub const fn new(position: Position, offset: Point) -> Self {
        Self { position, offset }
    }
}

/// When a group of graphics is built, relative to the object's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawingStrategy(u8);

impl DrawingStrategy {
    pub const NEVER: DrawingStrategy = DrawingStrategy(0);
    pub const BEFORE_FINISHABLE: DrawingStrategy = DrawingStrategy(1);
    pub const WHEN_FINISHABLE: DrawingStrategy = DrawingStrategy(1 << 1);
    pub const WHEN_FINISHED: DrawingStrategy = DrawingStrategy(1 << 2);
    pub const ALWAYS: DrawingStrategy = DrawingStrategy(0b111);

    pub fn contains(&self, other: DrawingStrategy) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DrawingStrategy {
    type Output = DrawingStrategy;

    fn bitor(self, rhs: Self) -> Self {
        DrawingStrategy(self.0 | rhs.0)
    }
}

/// A drawable object: a layout, a shape and style settings.
pub struct ObjectRenderer {
    id: ObjectId,
    shape: Box<dyn Shape>,
    layout: ObjectLayout,
    is_finished: bool,
    rotation_center: Option<PointDescriptor>,
    rotation_angle: Angle,
    stroke_color: ObservableValue<Color>,
    fill_color: ObservableValue<Color>,
    line_width: ObservableValue<f64>,
    preliminary_graphics: Vec<Graphic>,
    main_graphics: Vec<Graphic>,
    needs_redraw: bool,
    ledger: Option<UndoLedger>,
}

impl ObjectRenderer {
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self::from_boxed(Box::new(shape))
    }

    pub fn from_boxed(shape: Box<dyn Shape>) -> Self {
        let mut object = Self {
            id: ObjectId::next(),
            shape,
            layout: ObjectLayout::new(),
            is_finished: false,
            rotation_center: None,
            rotation_angle: Angle::zero(),
            stroke_color: ObservableValue::new(OBJECT_STROKE_COLOR),
            fill_color: ObservableValue::new(OBJECT_FILL_COLOR),
            line_width: ObservableValue::new(OBJECT_LINE_WIDTH),
            preliminary_graphics: Vec::new(),
            main_graphics: Vec::new(),
            needs_redraw: false,
            ledger: None,
        };
        object.recompute();
        object
    }

    /// Rebuilds an object from persisted parts. The layout is taken as is.
    pub(crate) fn restore(
        shape: Box<dyn Shape>,
        layout: ObjectLayout,
        style: ShapeStyle,
        rotation_center: Option<PointDescriptor>,
        rotation_angle: Angle,
        is_finished: bool,
    ) -> Self {
        let mut object = Self::from_boxed(shape);
        object.layout = layout;
        object.stroke_color.set(style.stroke_color);
        object.fill_color.set(style.fill_color);
        object.line_width.set(style.line_width);
        object.rotation_center = rotation_center;
        object.rotation_angle = rotation_angle;
        object.is_finished = is_finished;
        object.recompute();
        object
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    pub fn layout(&self) -> &ObjectLayout {
        &self.layout
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn layout_action(&self) -> LayoutAction {
        self.shape.layout_action(&self.layout)
    }

    pub fn rotation_center(&self) -> Option<PointDescriptor> {
        self.rotation_center
    }

    pub fn rotation_angle(&self) -> Angle {
        self.rotation_angle
    }

    pub fn is_editable(&self) -> bool {
        self.shape.is_editable()
    }

    pub fn can_edit_item(&self, position: Position) -> bool {
        self.shape.is_editable()
            && self.layout.contains_position(position)
            && self.shape.can_edit_item(&self.layout, position)
    }

    pub fn preliminary_graphics(&self) -> &[Graphic] {
        &self.preliminary_graphics
    }

    pub fn main_graphics(&self) -> &[Graphic] {
        &self.main_graphics
    }

    /// Resolves a descriptor against the current layout.
    pub fn point_for(&self, descriptor: PointDescriptor) -> Option<Point> {
        match descriptor {
            PointDescriptor::Item(position) => self.layout.get(position),
            PointDescriptor::Fixed(point) => Some(point),
        }
    }

    fn is_finished_or_finishable(&self) -> bool {
        self.is_finished || self.layout_action().is_finishable()
    }

    // ------------------------------------------------------------------
    // Layout mutation
    // ------------------------------------------------------------------

    pub fn can_push(&self) -> bool {
        !self.is_finished && self.layout_action().allows_push()
    }

    pub fn push(&mut self, point: Point) -> bool {
        if !self.can_push() {
            return false;
        }
        self.layout.push(point);
        self.recompute();
        true
    }

    pub fn can_push_section(&self) -> bool {
        !self.is_finished && self.layout_action().allows_push_section()
    }

    pub fn push_section(&mut self, point: Point) -> bool {
        if !self.can_push_section() {
            return false;
        }
        self.layout.push_section(point);
        self.recompute();
        true
    }

    /// Moves the point at `position`, dragging bound points along once the
    /// object is finished or finishable.
    ///
    /// # Panics
    /// When `position` is out of bounds.
    pub fn update(&mut self, point: Point, position: Position) {
        let bindings = if self.is_finished_or_finishable() {
            self.shape.item_bindings(&self.layout, position)
        } else {
            Vec::new()
        };

        if bindings.is_empty() {
            self.layout.update(point, position);
            self.recompute();
            return;
        }

        let current = self.layout.item(position);
        let rotation = self.rotation_angle.as_radians();
        let center = self
            .rotation_center
            .and_then(|d| self.point_for(d))
            .filter(|_| rotation != 0.0);
        let mut next = self.layout.clone();
        next.update(point, position);

        match center {
            Some(center) => {
                let line = Line::new(
                    current.rotated(center, -rotation),
                    point.rotated(center, -rotation),
                );
                for binding in bindings {
                    let moved = next
                        .item(binding.position)
                        .rotated(center, -rotation)
                        .translated(line.dx() * binding.offset.x, line.dy() * binding.offset.y)
                        .rotated(center, rotation);
                    next.update(moved, binding.position);
                }
            }
            None => {
                let line = Line::new(current, point);
                for binding in bindings {
                    let moved = next
                        .item(binding.position)
                        .translated(line.dx() * binding.offset.x, line.dy() * binding.offset.y);
                    next.update(moved, binding.position);
                }
            }
        }

        self.layout = next;
        self.recompute();
    }

    /// Updates the last point of the last section. False when empty.
    pub fn update_last(&mut self, point: Point) -> bool {
        match self.layout.last_position() {
            Some(position) => {
                self.update(point, position);
                true
            }
            None => false,
        }
    }

    /// Removes the last point. Used to drop the preview point of a session.
    pub fn pop(&mut self) -> Option<Point> {
        if self.is_finished {
            return None;
        }
        let point = self.layout.pop();
        self.recompute();
        point
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    pub fn set_rotation_center(&mut self, center: Option<PointDescriptor>) -> bool {
        if !self.is_finished_or_finishable() {
            return false;
        }
        self.rotation_center = center;
        self.recompute();
        true
    }

    /// Rotates to the absolute `angle`, turning the layout by the difference
    /// from the current angle.
    pub fn rotate(&mut self, angle: Angle) -> bool {
        if !self.is_finished_or_finishable() {
            return false;
        }
        let Some(center) = self.rotation_center.and_then(|d| self.point_for(d)) else {
            return false;
        };

        let delta = angle.as_radians() - self.rotation_angle.as_radians();
        self.layout.map_points(|p| p.rotated(center, delta));
        self.rotation_angle = angle;
        self.recompute();
        true
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> bool {
        if !self.is_finished_or_finishable() {
            return false;
        }
        self.layout.map_points(|p| p.translated(dx, dy));
        self.recompute();
        true
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> bool {
        if !self.is_finished_or_finishable() {
            return false;
        }
        self.layout.map_points(|p| p.scaled(sx, sy));
        if let Some(PointDescriptor::Fixed(center)) = self.rotation_center {
            self.rotation_center = Some(PointDescriptor::Fixed(center.scaled(sx, sy)));
        }
        self.recompute();
        true
    }

    /// Rescales every point regardless of progress. Used when the canvas
    /// content size changes under an in-progress object.
    pub(crate) fn rescale(&mut self, sx: f64, sy: f64) {
        self.layout.map_points(|p| p.scaled(sx, sy));
        if let Some(PointDescriptor::Fixed(center)) = self.rotation_center {
            self.rotation_center = Some(PointDescriptor::Fixed(center.scaled(sx, sy)));
        }
        self.recompute();
    }

    // ------------------------------------------------------------------
    // Finishing
    // ------------------------------------------------------------------

    pub fn can_finish(&self) -> bool {
        !self.is_finished && self.layout_action().is_finishable()
    }

    pub fn mark_as_finished(&mut self) {
        if !self.layout_action().is_finishable() {
            return;
        }
        self.is_finished = true;
        self.recompute();
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// True when `point` is within `range` of the main graphics.
    pub fn selection_test_point(&self, point: Point, range: f64) -> bool {
        self.main_graphics.iter().any(|g| g.contains(point, range))
    }

    /// True when any segment between consecutive points of a section is
    /// selected by `rect`.
    pub fn selection_test_rect(&self, rect: Rect) -> bool {
        let selector = RectSelector::new(rect);
        let closed = self.shape.is_closed();
        self.layout
            .iter()
            .any(|section| selector.selects_polyline(section, closed))
    }

    /// Bounds of the main graphics, falling back to the layout points.
    pub fn bounding_box(&self) -> Option<Rect> {
        let graphics = self.main_graphics.iter().filter_map(Graphic::bounds);
        let corners = graphics.flat_map(|r| [r.origin, Point::new(r.max_x(), r.max_y())]);
        Rect::from_points(corners).or_else(|| Rect::from_points(self.layout.points()))
    }

    /// Box covering both the main graphics and every layout point, so it
    /// bounds point and rect selection tests alike.
    pub fn hit_bounds(&self) -> Option<Rect> {
        let points = Rect::from_points(self.layout.points());
        match (self.bounding_box(), points) {
            (Some(graphics), Some(points)) => Some(graphics.union(&points)),
            (graphics, points) => graphics.or(points),
        }
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    fn should_draw(&self, strategy: DrawingStrategy) -> bool {
        if strategy.contains(DrawingStrategy::ALWAYS) {
            return true;
        }
        if self.is_finished {
            return strategy.contains(DrawingStrategy::WHEN_FINISHED);
        }
        if self.layout_action().is_finishable() {
            strategy.contains(DrawingStrategy::WHEN_FINISHABLE)
        } else {
            strategy.contains(DrawingStrategy::BEFORE_FINISHABLE)
        }
    }

    /// Rebuilds cached graphics and requests a redraw.
    fn recompute(&mut self) {
        let style = self.style();

        self.preliminary_graphics = if self.should_draw(self.shape.preliminary_strategy()) {
            self.shape.preliminary_graphics(&self.layout, &style)
        } else {
            Vec::new()
        };

        self.main_graphics = if self.should_draw(self.shape.main_strategy()) {
            self.shape.main_graphics(&self.layout, &style)
        } else {
            Vec::new()
        };

        self.needs_redraw = true;
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        for graphic in self.preliminary_graphics.iter().chain(&self.main_graphics) {
            surface.draw_graphic(graphic);
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consumes the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            line_width: *self.line_width.get(),
            stroke_color: *self.stroke_color.get(),
            fill_color: *self.fill_color.get(),
        }
    }

    pub fn stroke_color(&self) -> Color {
        *self.stroke_color.get()
    }

    pub fn fill_color(&self) -> Color {
        *self.fill_color.get()
    }

    pub fn line_width(&self) -> f64 {
        *self.line_width.get()
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.apply_setting(SettingValue::StrokeColor(color));
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.apply_setting(SettingValue::FillColor(color));
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.apply_setting(SettingValue::LineWidth(width));
    }

    /// The object's observable settings.
    pub fn settings(&self) -> Vec<SettingDescriptor> {
        SettingKey::ALL
            .into_iter()
            .map(|key| {
                let (undo_mode, redraw_mode) = self.setting_modes(key);
                SettingDescriptor {
                    key,
                    name: key.name(),
                    undo_mode,
                    redraw_mode,
                }
            })
            .collect()
    }

    fn setting_modes(&self, key: SettingKey) -> (UndoMode, RedrawMode) {
        match key {
            SettingKey::StrokeColor => (
                self.stroke_color.undo_mode().clone(),
                self.stroke_color.redraw_mode(),
            ),
            SettingKey::FillColor => (
                self.fill_color.undo_mode().clone(),
                self.fill_color.redraw_mode(),
            ),
            SettingKey::LineWidth => (
                self.line_width.undo_mode().clone(),
                self.line_width.redraw_mode(),
            ),
        }
    }

    pub fn set_setting_modes(&mut self, key: SettingKey, undo: UndoMode, redraw: RedrawMode) {
        match key {
            SettingKey::StrokeColor => {
                self.stroke_color.set_undo_mode(undo);
                self.stroke_color.set_redraw_mode(redraw);
            }
            SettingKey::FillColor => {
                self.fill_color.set_undo_mode(undo);
                self.fill_color.set_redraw_mode(redraw);
            }
            SettingKey::LineWidth => {
                self.line_width.set_undo_mode(undo);
                self.line_width.set_redraw_mode(redraw);
            }
        }
    }

    pub fn setting_value(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::StrokeColor => SettingValue::StrokeColor(self.stroke_color()),
            SettingKey::FillColor => SettingValue::FillColor(self.fill_color()),
            SettingKey::LineWidth => SettingValue::LineWidth(self.line_width()),
        }
    }

    /// Stores a setting, registering its previous value for undo when a
    /// ledger is attached. Returns the previous value.
    pub fn apply_setting(&mut self, value: SettingValue) -> SettingValue {
        let change: SettingChange<SettingValue> = match value {
            SettingValue::StrokeColor(c) => {
                self.stroke_color.set(c).map(SettingValue::StrokeColor)
            }
            SettingValue::FillColor(c) => self.fill_color.set(c).map(SettingValue::FillColor),
            SettingValue::LineWidth(w) => self.line_width.set(w).map(SettingValue::LineWidth),
        };

        if let (Some(name), Some(ledger)) = (change.undo, &self.ledger) {
            let name = name.or_else(|| Some(value.key().name().to_string()));
            ledger.borrow_mut().register(
                UndoTarget::Object(self.id),
                name,
                CanvasUndo::ObjectSetting {
                    id: self.id,
                    value: change.old,
                },
            );
        }

        if change.redraw {
            self.recompute();
        }
        change.old
    }

    /// Subscribes to changes of one setting.
    pub fn observe(
        &mut self,
        key: SettingKey,
        options: ObserveOptions,
        mut handler: impl FnMut(SettingValue) + 'static,
    ) -> ObservationToken {
        match key {
            SettingKey::StrokeColor => self
                .stroke_color
                .observe(options, move |c| handler(SettingValue::StrokeColor(*c))),
            SettingKey::FillColor => self
                .fill_color
                .observe(options, move |c| handler(SettingValue::FillColor(*c))),
            SettingKey::LineWidth => self
                .line_width
                .observe(options, move |w| handler(SettingValue::LineWidth(*w))),
        }
    }

    pub fn remove_observer(&mut self, key: SettingKey, token: ObservationToken) -> bool {
        match key {
            SettingKey::StrokeColor => self.stroke_color.remove_observer(token),
            SettingKey::FillColor => self.fill_color.remove_observer(token),
            SettingKey::LineWidth => self.line_width.remove_observer(token),
        }
    }

    // ------------------------------------------------------------------
    // Undo ledger
    // ------------------------------------------------------------------

    pub(crate) fn attach_ledger(&mut self, ledger: UndoLedger) {
        self.ledger = Some(ledger);
    }

    pub(crate) fn detach_ledger(&mut self) {
        self.ledger = None;
    }

    pub fn has_ledger(&self) -> bool {
        self.ledger.is_some()
    }
}

impl fmt::Debug for ObjectRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRenderer")
            .field("id", &self.id)
            .field("kind", &self.shape.kind())
            .field("layout", &self.layout)
            .field("is_finished", &self.is_finished)
            .field("rotation_center", &self.rotation_center)
            .field("rotation_angle", &self.rotation_angle)
            .finish_non_exhaustive()
    }
}
