//! Dragging item handles and whole objects.

use crate::helpers::{
    DelegateEvent, RecordingDelegate, TestCanvasBuilder, drag, finished_object, points_of,
};
use inkboard::shapes::Diameter;
use inkboard::{CanvasConfig, CanvasState, Point, Position, UndoCategory};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_dragging_selected_object_moves_it() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);
    let events = RecordingDelegate::install(&mut canvas);

    canvas.pointer_down(p(50.0, 50.0));
    canvas.pointer_moved(p(60.0, 55.0));
    assert_eq!(canvas.state(), CanvasState::Moving { object: ids[0] });
    canvas.pointer_moved(p(70.0, 50.0));
    canvas.pointer_up(p(70.0, 50.0));

    assert!(canvas.state().is_idle());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(30.0, 50.0), p(110.0, 50.0)]);
    assert_eq!(
        *events.borrow(),
        vec![
            DelegateEvent::Moved(vec![ids[0]]),
            DelegateEvent::Moved(vec![ids[0]]),
        ]
    );

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 50.0)]);
    assert!(canvas.redo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(30.0, 50.0), p(110.0, 50.0)]);
}

#[test]
fn test_dragging_unselected_object_selects_and_moves_it() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .with_line((10.0, 80.0), (90.0, 80.0))
        .build_with_ids();

    drag(&mut canvas, (50.0, 80.0), &[(50.0, 90.0)]);

    assert_eq!(canvas.selected_objects(), &[ids[1]]);
    assert_eq!(points_of(&canvas, ids[1]), vec![p(10.0, 90.0), p(90.0, 90.0)]);
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 50.0)]);
}

#[test]
fn test_move_translates_whole_selection() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .with_line((10.0, 80.0), (90.0, 80.0))
        .build_with_ids();
    canvas.select_all_objects();

    drag(&mut canvas, (50.0, 50.0), &[(50.0, 40.0)]);

    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 40.0), p(90.0, 40.0)]);
    assert_eq!(points_of(&canvas, ids[1]), vec![p(10.0, 70.0), p(90.0, 70.0)]);

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[1]), vec![p(10.0, 80.0), p(90.0, 80.0)]);
}

#[test]
fn test_press_and_release_without_moving_registers_nothing() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);

    drag(&mut canvas, (50.0, 50.0), &[(60.0, 50.0), (50.0, 50.0)]);

    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 50.0)]);
    assert!(!canvas.can_undo());
}

#[test]
fn test_dragging_handle_edits_item() {
    let config = CanvasConfig::default().with_undo_name(UndoCategory::Editing, "Edit Point");
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_config(config)
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();
    canvas.select_objects(&ids, false);
    let events = RecordingDelegate::install(&mut canvas);

    let end = Position::new(0, 1);
    canvas.pointer_down(p(88.0, 52.0));
    assert_eq!(
        canvas.state(),
        CanvasState::OnItem {
            object: ids[0],
            position: end
        }
    );
    canvas.pointer_moved(p(88.0, 62.0));
    assert_eq!(
        canvas.state(),
        CanvasState::Editing {
            object: ids[0],
            position: end
        }
    );
    canvas.pointer_up(p(88.0, 62.0));

    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 60.0)]);
    assert_eq!(*events.borrow(), vec![DelegateEvent::Edited(ids[0], end)]);
    assert_eq!(canvas.undo_action_name().as_deref(), Some("Edit Point"));

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 50.0)]);
    assert!(canvas.redo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(10.0, 50.0), p(90.0, 60.0)]);
}

#[test]
fn test_handles_only_react_on_selected_objects() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 50.0), (90.0, 50.0))
        .build_with_ids();

    canvas.pointer_down(p(90.0, 50.0));
    assert_eq!(canvas.state(), CanvasState::OnObject { object: ids[0] });
}

#[test]
fn test_editing_bound_item_moves_partner() {
    let diameter = finished_object(Diameter, &[p(20.0, 50.0), p(80.0, 50.0)]);
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_object(diameter)
        .build_with_ids();
    canvas.select_objects(&ids, false);

    drag(&mut canvas, (80.0, 50.0), &[(80.0, 60.0)]);
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 40.0), p(80.0, 60.0)]);

    assert!(canvas.undo());
    assert_eq!(points_of(&canvas, ids[0]), vec![p(20.0, 50.0), p(80.0, 50.0)]);
}
