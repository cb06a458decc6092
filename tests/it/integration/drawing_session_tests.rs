//! Drawing sessions driven by pointer input.

use crate::helpers::{DelegateEvent, RecordingDelegate, TestCanvasBuilder};
use inkboard::shapes::{Freehand, LineSegment, Polygon, Scribble};
use inkboard::{CanvasState, Point, SessionState};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_line_is_placed_by_two_clicks() {
    let mut canvas = TestCanvasBuilder::new().build();
    let events = RecordingDelegate::install(&mut canvas);

    let id = canvas.start_drawing_session(LineSegment);
    assert_eq!(canvas.state().session(), Some(SessionState::Idle));

    canvas.pointer_down(p(10.0, 10.0));
    assert_eq!(canvas.state().session(), Some(SessionState::Pressing));
    // The placed point and its preview
    assert_eq!(canvas.current_object().unwrap().layout().point_count(), 2);

    canvas.pointer_up(p(10.0, 10.0));
    assert_eq!(canvas.state().session(), Some(SessionState::Tracking));

    canvas.pointer_tracked(p(50.0, 40.0));
    let preview: Vec<Point> = canvas.current_object().unwrap().layout().points().collect();
    assert_eq!(preview, vec![p(10.0, 10.0), p(50.0, 40.0)]);

    canvas.pointer_down(p(50.0, 40.0));
    canvas.pointer_up(p(50.0, 40.0));

    assert!(canvas.state().is_idle());
    assert!(canvas.current_object().is_none());
    let object = canvas.object(id).expect("line was added");
    assert!(object.is_finished());
    assert_eq!(
        object.layout().points().collect::<Vec<_>>(),
        vec![p(10.0, 10.0), p(50.0, 40.0)]
    );
    assert_eq!(
        *events.borrow(),
        vec![
            DelegateEvent::SessionStarted(id),
            DelegateEvent::SessionFinished(id)
        ]
    );
}

#[test]
fn test_polygon_grows_one_point_per_click() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.start_drawing_session(Polygon);

    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_up(p(0.0, 0.0));
    assert_eq!(canvas.current_object().unwrap().layout().point_count(), 2);

    canvas.pointer_down(p(20.0, 0.0));
    canvas.pointer_up(p(20.0, 0.0));
    assert_eq!(canvas.current_object().unwrap().layout().point_count(), 3);
    assert_eq!(canvas.state().session(), Some(SessionState::Tracking));

    canvas.pointer_down(p(20.0, 20.0));
    canvas.pointer_up(p(20.0, 20.0));
    let points: Vec<Point> = canvas.current_object().unwrap().layout().points().collect();
    assert_eq!(
        points,
        vec![p(0.0, 0.0), p(20.0, 0.0), p(20.0, 20.0), p(20.0, 20.0)]
    );

    let id = canvas.finish_drawing_session().expect("polygon is finishable");
    assert!(canvas.object(id).unwrap().is_finished());
    assert!(canvas.state().is_idle());
}

#[test]
fn test_freehand_finishes_on_release() {
    let mut canvas = TestCanvasBuilder::new().build();
    let id = canvas.start_drawing_session(Freehand);

    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_moved(p(5.0, 5.0));
    assert_eq!(canvas.state().session(), Some(SessionState::Moving));
    canvas.pointer_moved(p(10.0, 10.0));
    canvas.pointer_up(p(10.0, 10.0));

    assert!(canvas.state().is_idle());
    let points: Vec<Point> = canvas.object(id).unwrap().layout().points().collect();
    assert_eq!(points.first(), Some(&p(0.0, 0.0)));
    assert_eq!(points.last(), Some(&p(10.0, 10.0)));
    assert!(points.contains(&p(5.0, 5.0)));
}

#[test]
fn test_scribble_collects_one_section_per_stroke() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.start_drawing_session(Scribble);

    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_moved(p(5.0, 0.0));
    canvas.pointer_up(p(5.0, 0.0));
    assert_eq!(canvas.state().session(), Some(SessionState::Idle));

    canvas.pointer_down(p(0.0, 10.0));
    canvas.pointer_moved(p(5.0, 10.0));
    canvas.pointer_up(p(5.0, 10.0));

    let id = canvas.finish_drawing_session().expect("scribble is finishable");
    let layout = canvas.object(id).unwrap().layout().clone();
    assert_eq!(layout.section_sizes(), vec![2, 2]);
}

#[test]
fn test_finish_refuses_incomplete_object() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.start_drawing_session(Polygon);
    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_up(p(0.0, 0.0));

    assert_eq!(canvas.finish_drawing_session(), None);
    assert!(canvas.state().is_drawing());
    assert!(canvas.objects().is_empty());
}

#[test]
fn test_delegate_can_discard_finished_object() {
    let mut canvas = TestCanvasBuilder::new().build();
    let events = RecordingDelegate::install_with(
        &mut canvas,
        RecordingDelegate {
            discard: true,
            ..Default::default()
        },
    );

    let id = canvas.start_drawing_session(LineSegment);
    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_up(p(0.0, 0.0));
    canvas.pointer_down(p(30.0, 0.0));
    canvas.pointer_up(p(30.0, 0.0));

    assert!(canvas.objects().is_empty());
    assert!(canvas.state().is_idle());
    assert!(!canvas.can_undo());
    assert_eq!(
        *events.borrow(),
        vec![
            DelegateEvent::SessionStarted(id),
            DelegateEvent::SessionCancelled
        ]
    );
}

#[test]
fn test_cancel_drops_object_and_history() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.start_drawing_session(Polygon);
    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_up(p(0.0, 0.0));

    assert!(canvas.cancel_drawing_session());
    assert!(canvas.state().is_idle());
    assert!(canvas.objects().is_empty());
    assert!(!canvas.cancel_drawing_session());
}

#[test]
fn test_new_session_finishes_previous_one() {
    let mut canvas = TestCanvasBuilder::new().build();
    let first = canvas.start_drawing_session(Polygon);
    for (x, y) in [(0.0, 0.0), (20.0, 0.0), (20.0, 20.0)] {
        canvas.pointer_down(p(x, y));
        canvas.pointer_up(p(x, y));
    }

    let second = canvas.start_drawing_session(LineSegment);
    assert!(canvas.contains_object(first));
    assert!(!canvas.contains_object(second));
    assert!(matches!(
        canvas.state(),
        CanvasState::Drawing { object, .. } if object == second
    ));
}

#[test]
fn test_new_session_cancels_unfinishable_previous_one() {
    let mut canvas = TestCanvasBuilder::new().build();
    let events = RecordingDelegate::install(&mut canvas);
    let first = canvas.start_drawing_session(Polygon);

    let second = canvas.start_drawing_session(LineSegment);
    assert!(!canvas.contains_object(first));
    assert_eq!(
        *events.borrow(),
        vec![
            DelegateEvent::SessionStarted(first),
            DelegateEvent::SessionCancelled,
            DelegateEvent::SessionStarted(second),
        ]
    );
}

#[test]
fn test_session_style_comes_from_config() {
    let mut config = inkboard::CanvasConfig::default();
    config.session_line_width = 4.0;
    config.session_stroke_color = inkboard::Color::CYAN;
    let mut canvas = TestCanvasBuilder::new().with_config(config).build();

    canvas.start_drawing_session(LineSegment);
    let object = canvas.current_object().unwrap();
    assert_eq!(object.line_width(), 4.0);
    assert_eq!(object.stroke_color(), inkboard::Color::CYAN);
}

#[test]
fn test_undo_is_refused_while_drawing() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((10.0, 10.0), (20.0, 10.0))
        .build_with_ids();
    canvas.remove_objects(&ids);
    assert!(canvas.can_undo());

    canvas.start_drawing_session(LineSegment);
    assert!(!canvas.undo());
    canvas.cancel_drawing_session();
    assert!(canvas.undo());
    assert!(canvas.contains_object(ids[0]));
}
