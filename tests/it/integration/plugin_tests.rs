//! Plugin gesture dispatch, enabled flag and ledger purging.

use crate::helpers::{RecordingSurface, TestCanvasBuilder, TestPlugin};
use inkboard::setting::ObserveOptions;
use inkboard::{CanvasState, Point, PluginPriority, PluginState, Rect};
use std::cell::RefCell;
use std::rc::Rc;

fn corner() -> Rect {
    Rect::from_xywh(0.0, 0.0, 20.0, 20.0)
}

#[test]
fn test_interactive_overlay_receives_full_gesture() {
    let mut canvas = TestCanvasBuilder::new().build();
    let plugin = TestPlugin::new(PluginPriority::InteractiveOverlay, corner());
    let states = plugin.states.clone();
    let id = canvas.install_plugin(plugin);

    canvas.pointer_down(Point::new(5.0, 5.0));
    assert_eq!(canvas.state(), CanvasState::Plugin { plugin: id });
    canvas.pointer_moved(Point::new(6.0, 6.0));
    canvas.pointer_moved(Point::new(8.0, 7.0));
    canvas.pointer_up(Point::new(9.0, 9.0));

    assert!(canvas.state().is_idle());
    assert_eq!(
        *states.borrow(),
        vec![
            PluginState::Began {
                location: Point::new(5.0, 5.0)
            },
            PluginState::Changed {
                location: Point::new(6.0, 6.0),
                last: Point::new(5.0, 5.0),
                initial: Point::new(5.0, 5.0),
            },
            PluginState::Changed {
                location: Point::new(8.0, 7.0),
                last: Point::new(6.0, 6.0),
                initial: Point::new(5.0, 5.0),
            },
            PluginState::Ended {
                location: Point::new(9.0, 9.0),
                last: Point::new(8.0, 7.0),
                initial: Point::new(5.0, 5.0),
            },
            PluginState::Idle,
        ]
    );
}

#[test]
fn test_overlay_wins_over_objects_and_underlay_loses() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_line((0.0, 10.0), (40.0, 10.0))
        .build_with_ids();
    let overlay =
        canvas.install_plugin(TestPlugin::new(PluginPriority::InteractiveOverlay, corner()));
    canvas.install_plugin(TestPlugin::new(
        PluginPriority::InteractiveUnderlay,
        Rect::from_xywh(0.0, 0.0, 100.0, 100.0),
    ));

    canvas.pointer_down(Point::new(10.0, 10.0));
    assert_eq!(canvas.state(), CanvasState::Plugin { plugin: overlay });
    canvas.pointer_up(Point::new(10.0, 10.0));

    canvas.pointer_down(Point::new(30.0, 10.0));
    assert_eq!(canvas.state(), CanvasState::OnObject { object: ids[0] });
    canvas.pointer_up(Point::new(30.0, 10.0));
}

#[test]
fn test_underlay_claims_empty_space_before_selection() {
    let mut canvas = TestCanvasBuilder::new().build();
    let underlay = canvas.install_plugin(TestPlugin::new(
        PluginPriority::InteractiveUnderlay,
        Rect::from_xywh(0.0, 0.0, 100.0, 100.0),
    ));

    canvas.pointer_down(Point::new(50.0, 50.0));
    assert_eq!(canvas.state(), CanvasState::Plugin { plugin: underlay });
}

#[test]
fn test_non_interactive_plugins_never_claim_gestures() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.install_plugin(TestPlugin::new(PluginPriority::Overlay, corner()));
    canvas.install_plugin(TestPlugin::new(PluginPriority::Underlay, corner()));

    canvas.pointer_down(Point::new(5.0, 5.0));
    assert!(canvas.state().is_selecting());
}

#[test]
fn test_disabled_plugin_is_skipped_and_undo_reenables() {
    let mut canvas = TestCanvasBuilder::new().build();
    let id = canvas.install_plugin(TestPlugin::new(PluginPriority::InteractiveOverlay, corner()));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    canvas
        .observe_plugin_enabled(id, ObserveOptions::NEW, move |enabled| {
            sink.borrow_mut().push(enabled)
        })
        .expect("plugin is installed");

    assert!(canvas.set_plugin_enabled(id, false));
    assert_eq!(canvas.is_plugin_enabled(id), Some(false));
    assert_eq!(canvas.undo_action_name().as_deref(), Some("Enabled"));

    canvas.pointer_down(Point::new(5.0, 5.0));
    assert!(canvas.state().is_selecting());
    canvas.pointer_up(Point::new(5.0, 5.0));

    assert!(canvas.undo());
    assert_eq!(canvas.is_plugin_enabled(id), Some(true));
    assert_eq!(*seen.borrow(), vec![false, true]);
}

#[test]
fn test_disabling_active_plugin_ends_gesture() {
    let mut canvas = TestCanvasBuilder::new().build();
    let id = canvas.install_plugin(TestPlugin::new(PluginPriority::InteractiveOverlay, corner()));

    canvas.pointer_down(Point::new(5.0, 5.0));
    canvas.set_plugin_enabled(id, false);
    assert!(canvas.state().is_idle());
}

#[test]
fn test_uninstall_purges_history() {
    let mut canvas = TestCanvasBuilder::new().build();
    let id = canvas.install_plugin(TestPlugin::new(PluginPriority::InteractiveOverlay, corner()));
    canvas.set_plugin_enabled(id, false);
    assert!(canvas.can_undo());

    assert!(canvas.uninstall_plugin(id).is_some());
    assert!(!canvas.can_undo());
    assert!(canvas.plugin_ids().is_empty());
    assert_eq!(canvas.is_plugin_enabled(id), None);
    assert!(!canvas.set_plugin_enabled(id, true));
}

#[test]
fn test_enabled_plugins_are_drawn() {
    let mut canvas = TestCanvasBuilder::new().build();
    let overlay = TestPlugin::new(PluginPriority::Overlay, corner());
    let underlay = TestPlugin::new(PluginPriority::Underlay, corner());
    let (overlay_draws, underlay_draws) = (overlay.draws.clone(), underlay.draws.clone());
    canvas.install_plugin(overlay);
    let underlay_id = canvas.install_plugin(underlay);

    canvas.render(&mut RecordingSurface::default());
    assert_eq!((*overlay_draws.borrow(), *underlay_draws.borrow()), (1, 1));

    canvas.set_plugin_enabled(underlay_id, false);
    canvas.render(&mut RecordingSurface::default());
    assert_eq!((*overlay_draws.borrow(), *underlay_draws.borrow()), (2, 1));
}
