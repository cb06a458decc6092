//! Click selection, rubber-band selection and context menus.

use crate::helpers::{
    DelegateEvent, RecordingDelegate, TestCanvasBuilder, click, drag, finished_object,
};
use inkboard::shapes::CircularArc;
use inkboard::{CanvasState, Point, Rect};

fn two_lines() -> TestCanvasBuilder {
    TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (40.0, 10.0))
        .with_line((60.0, 10.0), (90.0, 10.0))
}

#[test]
fn test_click_selects_object_under_pointer() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    let events = RecordingDelegate::install(&mut canvas);

    canvas.pointer_down(Point::new(25.0, 12.0));
    assert_eq!(canvas.state(), CanvasState::OnObject { object: ids[0] });
    canvas.pointer_up(Point::new(25.0, 12.0));

    assert_eq!(canvas.selected_objects(), &[ids[0]]);
    assert_eq!(*events.borrow(), vec![DelegateEvent::Selected(vec![ids[0]])]);
}

#[test]
fn test_click_on_other_object_replaces_selection() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    canvas.select_objects(&[ids[0]], false);
    let events = RecordingDelegate::install(&mut canvas);

    click(&mut canvas, 75.0, 10.0);

    assert_eq!(canvas.selected_objects(), &[ids[1]]);
    assert_eq!(
        *events.borrow(),
        vec![
            DelegateEvent::Deselected(vec![ids[0]]),
            DelegateEvent::Selected(vec![ids[1]]),
        ]
    );
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    canvas.select_all_objects();
    assert_eq!(canvas.selected_objects().len(), 2);

    canvas.pointer_down(Point::new(40.0, 80.0));
    assert!(canvas.state().is_selecting());
    assert!(canvas.selected_objects().is_empty());
    canvas.pointer_up(Point::new(40.0, 80.0));

    assert!(canvas.state().is_idle());
    assert!(canvas.selection_rect().is_none());
    assert!(!canvas.is_selected(ids[0]));
}

#[test]
fn test_modifier_click_toggles_selection() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    canvas.set_bidirectional_selection(true);

    click(&mut canvas, 25.0, 10.0);
    click(&mut canvas, 75.0, 10.0);
    assert_eq!(canvas.selected_objects(), &[ids[0], ids[1]]);

    click(&mut canvas, 25.0, 10.0);
    assert_eq!(canvas.selected_objects(), &[ids[1]]);
}

#[test]
fn test_rubber_band_selects_touched_objects() {
    let (mut canvas, ids) = two_lines().build_with_ids();

    canvas.pointer_down(Point::new(0.0, 50.0));
    canvas.pointer_moved(Point::new(30.0, 0.0));
    assert_eq!(canvas.selected_objects(), &[ids[0]]);
    assert!(canvas.selection_rect().is_some());

    canvas.pointer_moved(Point::new(80.0, 0.0));
    assert_eq!(canvas.selected_objects(), &[ids[0], ids[1]]);

    canvas.pointer_up(Point::new(80.0, 0.0));
    assert!(canvas.selection_rect().is_none());
    assert_eq!(canvas.selected_objects(), &[ids[0], ids[1]]);
}

#[test]
fn test_rubber_band_with_modifier_toggles_against_initial_selection() {
    let (mut canvas, ids) = two_lines().with_bidirectional_selection().build_with_ids();
    canvas.select_objects(&[ids[0]], false);

    drag(&mut canvas, (0.0, 50.0), &[(80.0, 0.0)]);

    assert_eq!(canvas.selected_objects(), &[ids[1]]);
}

#[test]
fn test_rubber_band_shrinking_restores_selection() {
    let (mut canvas, ids) = two_lines().build_with_ids();

    canvas.pointer_down(Point::new(0.0, 50.0));
    canvas.pointer_moved(Point::new(80.0, 0.0));
    assert_eq!(canvas.selected_objects().len(), 2);
    canvas.pointer_moved(Point::new(5.0, 45.0));
    assert!(canvas.selected_objects().is_empty());
    canvas.pointer_up(Point::new(5.0, 45.0));

    assert!(!canvas.is_selected(ids[0]));
}

#[test]
fn test_rubber_band_over_layout_segment_outside_graphics() {
    // Only the arc is drawn; the center-to-start segment is far from it.
    let arc = finished_object(
        CircularArc,
        &[Point::new(10.0, 10.0), Point::new(60.0, 10.0), Point::new(56.98, 27.10)],
    );
    let (mut canvas, ids) = TestCanvasBuilder::new().with_object(arc).build_with_ids();

    drag(&mut canvas, (5.0, 5.0), &[(17.0, 17.0)]);
    assert_eq!(canvas.selected_objects(), ids.as_slice());
}

#[test]
fn test_selection_api_filters_unknown_ids() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    let stray = inkboard::ObjectId::next();

    canvas.select_objects(&[ids[1], stray], false);
    assert_eq!(canvas.selected_objects(), &[ids[1]]);

    canvas.select_objects(&[ids[0]], true);
    assert_eq!(canvas.selected_objects(), &[ids[1], ids[0]]);

    canvas.deselect_objects(&[ids[1]]);
    assert_eq!(canvas.selected_objects(), &[ids[0]]);

    canvas.deselect_all_objects();
    assert!(canvas.selected_objects().is_empty());
}

#[test]
fn test_context_menu_selects_object_under_pointer() {
    let (mut canvas, ids) = two_lines().build_with_ids();
    let events = RecordingDelegate::install_with(
        &mut canvas,
        RecordingDelegate {
            menu: Some("object menu"),
            ..Default::default()
        },
    );

    let menu = canvas.request_context_menu(Point::new(75.0, 10.0)).expect("menu");
    assert_eq!(menu.downcast_ref::<&str>(), Some(&"object menu"));
    assert_eq!(canvas.selected_objects(), &[ids[1]]);
    assert_eq!(
        events.borrow().last(),
        Some(&DelegateEvent::ContextMenu(Some(ids[1])))
    );

    canvas.request_context_menu(Point::new(40.0, 80.0));
    assert!(canvas.selected_objects().is_empty());
    assert_eq!(events.borrow().last(), Some(&DelegateEvent::ContextMenu(None)));
}

#[test]
fn test_context_menu_outside_content_rect() {
    let mut canvas = TestCanvasBuilder::new()
        .with_bounds(Rect::from_xywh(0.0, 0.0, 200.0, 100.0))
        .build();
    let events = RecordingDelegate::install(&mut canvas);

    assert!(canvas.request_context_menu(Point::new(10.0, 10.0)).is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_context_menu_ignored_during_gesture() {
    let mut canvas = two_lines().build();
    canvas.pointer_down(Point::new(40.0, 80.0));
    assert!(canvas.request_context_menu(Point::new(25.0, 10.0)).is_none());
}
