//! Undo and redo of canvas operations.

use crate::helpers::{TestCanvasBuilder, drag, finished_object, points_of};
use inkboard::object::PointDescriptor;
use inkboard::shapes::LineSegment;
use inkboard::{CanvasConfig, Color, Point, Size, UndoCategory};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn named_config() -> CanvasConfig {
    CanvasConfig::default()
        .with_undo_name(UndoCategory::AddObjects, "Add")
        .with_undo_name(UndoCategory::RemoveObjects, "Remove")
        .with_undo_name(UndoCategory::Dragging, "Move")
}

#[test]
fn test_add_then_undo_redo() {
    let mut canvas = TestCanvasBuilder::new().with_config(named_config()).build();
    let line = finished_object(LineSegment, &[p(10.0, 10.0), p(20.0, 10.0)]);
    let ids = canvas.add_objects(vec![line]);

    assert_eq!(canvas.undo_action_name().as_deref(), Some("Add"));
    assert!(canvas.undo());
    assert!(canvas.objects().is_empty());
    assert_eq!(canvas.redo_action_name().as_deref(), Some("Remove"));

    assert!(canvas.redo());
    assert!(canvas.contains_object(ids[0]));
    assert!(canvas.object(ids[0]).unwrap().has_ledger());
    assert!(!canvas.can_redo());
}

#[test]
fn test_remove_deselects_and_undo_restores() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (20.0, 10.0))
        .with_line((10.0, 30.0), (20.0, 30.0))
        .build_with_ids();
    canvas.select_all_objects();

    canvas.remove_selected_objects();
    assert!(canvas.objects().is_empty());
    assert!(canvas.selected_objects().is_empty());

    assert!(canvas.undo());
    assert_eq!(canvas.objects().len(), 2);
    assert!(canvas.contains_object(ids[0]) && canvas.contains_object(ids[1]));
    assert!(canvas.selected_objects().is_empty());
}

#[test]
fn test_add_rejects_unfinishable_and_duplicates() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (20.0, 10.0))
        .build_with_ids();

    let mut partial = inkboard::ObjectRenderer::new(LineSegment);
    partial.push(p(0.0, 0.0));
    let complete = finished_object(LineSegment, &[p(0.0, 0.0), p(5.0, 5.0)]);

    let added = canvas.add_objects(vec![partial, complete]);
    assert_eq!(added.len(), 1);
    assert_eq!(canvas.objects().len(), 2);
    assert!(canvas.contains_object(ids[0]));
}

#[test]
fn test_restore_rescales_to_new_content_size() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (20.0, 10.0))
        .build_with_ids();

    canvas.remove_objects(&ids);
    canvas.set_content_size(Size::new(200.0, 200.0));
    assert!(canvas.undo());

    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 20.0), p(40.0, 20.0)]);
}

#[test]
fn test_move_undo_scales_offset_after_resize() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);
    drag(&mut canvas, (50.0, 50.0), &[(50.0, 60.0)]);
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 60.0), p(90.0, 60.0)]);

    canvas.set_content_size(Size::new(200.0, 200.0));
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 120.0), p(180.0, 120.0)]);

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 100.0), p(180.0, 100.0)]);
    assert!(canvas.redo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 120.0), p(180.0, 120.0)]);
}

#[test]
fn test_edit_undo_scales_offset_after_resize() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);
    drag(&mut canvas, (90.0, 50.0), &[(90.0, 60.0)]);
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 60.0)]);

    canvas.set_content_size(Size::new(200.0, 100.0));
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 50.0), p(180.0, 60.0)]);

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 50.0), p(180.0, 50.0)]);
    assert!(canvas.redo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 50.0), p(180.0, 60.0)]);
}

#[test]
fn test_stale_entries_are_skipped() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_config(named_config())
        .with_line((10.0, 50.0), (90.0, 50.0))
        .with_line((10.0, 80.0), (90.0, 80.0))
        .build_with_ids();

    canvas.select_objects(&[ids[0]], false);
    drag(&mut canvas, (50.0, 50.0), &[(50.0, 40.0)]);

    // Removal is not recorded, so the move entry now points at nothing.
    canvas.undo_ledger().borrow_mut().disable_registration();
    canvas.remove_objects(&[ids[0]]);
    canvas.undo_ledger().borrow_mut().enable_registration();

    let before = points_of(&canvas, ids[1]);
    assert!(!canvas.undo());
    assert!(!canvas.can_undo());
    assert_eq!(points_of(&canvas, ids[1]), before);
}

#[test]
fn test_object_setting_changes_are_undoable() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (20.0, 10.0))
        .build_with_ids();

    canvas.object_mut(ids[0]).unwrap().set_stroke_color(Color::CYAN);
    assert_eq!(canvas.undo_action_name().as_deref(), Some("Stroke Color"));

    assert!(canvas.undo());
    assert_eq!(canvas.object(ids[0]).unwrap().stroke_color(), Color::BLACK);
    assert!(canvas.redo());
    assert_eq!(canvas.object(ids[0]).unwrap().stroke_color(), Color::CYAN);
}

#[test]
fn test_levels_of_undo_cap_history() {
    let mut config = CanvasConfig::default();
    config.levels_of_undo = Some(2);
    let mut canvas = TestCanvasBuilder::new().with_config(config).build();

    for y in [10.0, 20.0, 30.0] {
        canvas.add_objects(vec![finished_object(LineSegment, &[p(0.0, y), p(10.0, y)])]);
    }

    assert!(canvas.undo());
    assert!(canvas.undo());
    assert!(!canvas.undo());
    assert_eq!(canvas.objects().len(), 1);
}

#[test]
fn test_rotation_center_survives_rescale() {
    let mut line = finished_object(LineSegment, &[p(10.0, 10.0), p(20.0, 10.0)]);
    line.set_rotation_center(Some(PointDescriptor::Fixed(p(15.0, 15.0))));
    let mut canvas = TestCanvasBuilder::new().with_object(line).build();

    canvas.set_content_size(Size::new(50.0, 50.0));
    let object = &canvas.objects()[0];
    assert_eq!(
        object.rotation_center(),
        Some(PointDescriptor::Fixed(p(7.5, 7.5)))
    );
}
