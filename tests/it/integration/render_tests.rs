//! Render pass order and decorations, via a recording surface.

use crate::helpers::{RecordingSurface, SurfaceOp, TestCanvasBuilder};
use inkboard::{CanvasConfig, Color, Point, Rect};

fn render(canvas: &inkboard::CanvasView) -> RecordingSurface {
    let mut surface = RecordingSurface::default();
    canvas.render(&mut surface);
    surface
}

#[test]
fn test_background_is_painted_first() {
    let canvas = TestCanvasBuilder::new().build();
    let surface = render(&canvas);

    let content_rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
    assert_eq!(surface.ops[0], SurfaceOp::Save);
    assert_eq!(
        surface.ops[1],
        SurfaceOp::FillRect(content_rect, CanvasConfig::default().content_background_color)
    );
    assert_eq!(surface.ops.last(), Some(&SurfaceOp::Restore));
}

#[test]
fn test_objects_draw_their_graphics() {
    let canvas = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (40.0, 10.0))
        .with_line((60.0, 10.0), (90.0, 10.0))
        .build();
    let surface = render(&canvas);
    assert!(surface.graphics().count() >= 2);
}

#[test]
fn test_selected_line_shows_item_handles() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (40.0, 10.0))
        .build_with_ids();

    let is_ellipse = |op: &SurfaceOp| matches!(op, SurfaceOp::FillEllipse(..));
    assert_eq!(render(&canvas).count(is_ellipse), 0);

    canvas.select_objects(&ids, false);
    let surface = render(&canvas);
    assert_eq!(surface.count(is_ellipse), 2);
    assert_eq!(surface.count(|op| matches!(op, SurfaceOp::StrokeEllipse(..))), 2);
}

#[test]
fn test_pressed_handle_is_highlighted() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (40.0, 10.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);
    canvas.pointer_down(Point::new(10.0, 10.0));

    let highlight = CanvasConfig::default().item_highlight_fill_color;
    let surface = render(&canvas);
    assert_eq!(
        surface.count(|op| matches!(op, SurfaceOp::FillEllipse(_, color) if *color == highlight)),
        1
    );
}

#[test]
fn test_rubber_band_is_drawn_while_selecting() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.pointer_down(Point::new(50.0, 50.0));
    canvas.pointer_moved(Point::new(70.0, 80.0));

    let config = CanvasConfig::default();
    let surface = render(&canvas);
    let fill = config.selection_rect_fill_color;
    assert!(surface.ops.iter().any(|op| matches!(
        op,
        SurfaceOp::FillRect(rect, color)
            if *color == fill && rect.width() == 20.0 && rect.height() == 30.0
    )));

    canvas.pointer_up(Point::new(70.0, 80.0));
    let surface = render(&canvas);
    assert_eq!(
        surface.count(|op| matches!(op, SurfaceOp::FillRect(_, color) if *color == fill)),
        0
    );
}

#[test]
fn test_configured_background_color() {
    let mut config = CanvasConfig::default();
    config.content_background_color = Color::CYAN;
    let canvas = TestCanvasBuilder::new().with_config(config).build();
    let surface = render(&canvas);
    assert!(matches!(surface.ops[1], SurfaceOp::FillRect(_, color) if color == Color::CYAN));
}
