//! The render pass.
//!
//! Drawing order, back to front: content background, underlay plugins,
//! unselected objects, selected objects with their decorations, the drawing
//! object, overlay plugins and finally the rubber-band rect. Objects draw in
//! content coordinates; decorations and plugins draw in view coordinates.

use super::CanvasView;
use crate::constants::RENDER_WARN_MS;
use crate::geometry::Rect;
use crate::graphics::RenderSurface;
use crate::input::InternalState;
use crate::layout::Position;
use crate::object::{ObjectId, ObjectRenderer};
use crate::plugin::PluginContext;
use crate::profile_scope;

/// How a selected object is decorated.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Decoration {
    None,
    /// Item handles, with the pressed one highlighted
    Items(Option<Position>),
    /// Bounding box, highlighted while pressed
    BoundingBox(bool),
}

impl CanvasView {
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        profile_scope!("render", RENDER_WARN_MS);

        let content_rect = self.content_rect();
        surface.save();
        surface.fill_rect(content_rect, self.config.content_background_color);
        surface.clip(content_rect);

        self.draw_plugins(surface, false);

        for object in self.objects.iter().filter(|o| !self.is_selected(o.id())) {
            self.draw_object(object, surface);
        }
        for object in self.selection.iter().filter_map(|id| self.object(*id)) {
            self.draw_object(object, surface);
            self.draw_decoration(object, surface);
        }
        if let Some(object) = self.current_object() {
            self.draw_object(object, surface);
        }

        self.draw_plugins(surface, true);

        if let Some(rect) = self.selection_rect() {
            let rect = rect.standardized();
            surface.fill_rect(rect, self.config.selection_rect_fill_color);
            surface.stroke_rect(
                rect,
                self.config.selection_rect_border_color,
                self.config.decoration_line_width,
            );
        }

        surface.restore();
    }

    fn draw_object(&self, object: &ObjectRenderer, surface: &mut dyn RenderSurface) {
        surface.save();
        surface.concat_transform(self.transform.content_to_view_transform());
        object.draw(surface);
        surface.restore();
    }

    fn decoration_for(&self, object: &ObjectRenderer) -> Decoration {
        let id = object.id();
        match self.state {
            InternalState::Editing { .. } | InternalState::Moving { .. } => Decoration::None,
            InternalState::OnItem {
                object: pressed,
                position,
                ..
            } if pressed == id => Decoration::Items(Some(position)),
            InternalState::OnObject {
                object: pressed, ..
            } if pressed == id && !self.is_editable(id) => Decoration::BoundingBox(true),
            _ if object.is_editable() => Decoration::Items(None),
            _ => Decoration::BoundingBox(false),
        }
    }

    fn is_editable(&self, id: ObjectId) -> bool {
        self.object(id).is_some_and(ObjectRenderer::is_editable)
    }

    fn draw_decoration(&self, object: &ObjectRenderer, surface: &mut dyn RenderSurface) {
        let config = &self.config;
        let range = config.selection_range;

        match self.decoration_for(object) {
            Decoration::None => {}
            Decoration::Items(highlighted) => {
                for (position, item) in object.layout().positions() {
                    let center = self.transform.content_to_view(item);
                    let rect = Rect::from_xywh(
                        center.x - range,
                        center.y - range,
                        range * 2.0,
                        range * 2.0,
                    );
                    let (fill, border) = if highlighted == Some(position) {
                        (config.item_highlight_fill_color, config.item_highlight_border_color)
                    } else {
                        (config.item_fill_color, config.item_border_color)
                    };
                    surface.fill_ellipse(rect, fill);
                    surface.stroke_ellipse(rect, border, config.decoration_line_width);
                }
            }
            Decoration::BoundingBox(highlighted) => {
                let Some(bounds) = object.bounding_box() else {
                    return;
                };
                let rect = self
                    .transform
                    .content_rect_to_view(bounds)
                    .inset_by(-range, -range);
                let (fill, border) = if highlighted {
                    (
                        config.bounding_box_highlight_fill_color,
                        config.bounding_box_highlight_border_color,
                    )
                } else {
                    (config.bounding_box_fill_color, config.bounding_box_border_color)
                };
                surface.fill_rect(rect, fill);
                surface.stroke_rect(rect, border, config.decoration_line_width);
            }
        }
    }

    fn draw_plugins(&self, surface: &mut dyn RenderSurface, overlay: bool) {
        let context = PluginContext::new(self.transform, &self.objects, &self.selection);
        for installed in &self.plugins {
            if !installed.is_enabled() || installed.priority().is_overlay() != overlay {
                continue;
            }
            let state = self.state.plugin_state(installed.id);
            if installed.plugin.should_draw(&context, state) {
                surface.save();
                installed.plugin.draw(&context, state, surface);
                surface.restore();
            }
        }
    }
}
