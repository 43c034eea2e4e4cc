use swipecard_animation::Easing;
use swipecard_foundation::PointerSample;
use swipecard_testing::{SwipeCall, SwipeRobot};
use swipecard_ui::{Badge, ExitOutcome, LegacyQuirks, SwipeConfig};
use swipecard_ui_graphics::{Point, Size};

const ORIGIN: Point = Point::new(250.0, 250.0);

fn robot() -> SwipeRobot {
    SwipeRobot::standard().expect("default config is valid")
}

#[test]
fn scenario_left_exit_notifies_once_after_animation() {
    let mut robot = robot();
    robot.drag_by(-260.0, 0.0, 4);

    assert_eq!(robot.item_position(), Point::new(-10.0, 250.0));
    let run = *robot.card().current_run().expect("exit animation running");
    assert_eq!(run.outcome, ExitOutcome::Left);
    assert_eq!(run.target, Point::new(-600.0, 250.0));
    assert_eq!(run.spec.duration_millis, 100);
    assert_eq!(run.spec.easing, Easing::Accelerate { factor: 1.0 });
    assert_eq!(robot.listener().count(), 0, "no callback before completion");

    robot.item().clear_history();
    let frames = robot.wait_for_idle();
    assert!(frames > 1);

    assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);
    let history = robot.item().history();
    assert_eq!(history[history.len() - 2], Point::new(-600.0, 250.0));
    assert_eq!(robot.item_position(), ORIGIN);
    assert!(!robot.card().is_tracking());

    for _ in 0..10 {
        robot.advance_frame();
    }
    assert_eq!(robot.listener().count(), 1);
}

#[test]
fn scenario_small_drag_springs_back_without_callback() {
    let mut robot = robot();
    robot.drag_by(10.0, 10.0, 2);

    let run = *robot.card().current_run().expect("reset animation running");
    assert_eq!(run.outcome, ExitOutcome::Reset);
    assert_eq!(run.target, ORIGIN);
    assert_eq!(run.spec.duration_millis, 200);
    assert_eq!(run.spec.easing, Easing::Overshoot { tension: 1.5 });

    robot.item().clear_history();
    robot.wait_for_idle();

    assert!(robot.listener().calls().is_empty());
    assert_eq!(robot.item_position(), ORIGIN);
    assert!(
        robot.item().history().iter().any(|p| p.x < ORIGIN.x),
        "overshoot should carry the item past its origin"
    );
}

#[test]
fn scenario_cancel_never_notifies() {
    let mut robot = robot();
    let start = robot.item_center();
    robot.press(0, start);
    for step in 1..=3 {
        robot.move_to(0, start.offset_by(-100.0 * step as f32, 0.0));
    }
    assert!(robot.badge(Badge::Left).alpha() < 0.0);

    robot.cancel(0, start.offset_by(-300.0, 0.0));
    assert_eq!(
        robot.card().current_run().map(|run| run.outcome),
        Some(ExitOutcome::Reset)
    );
    robot.wait_for_idle();

    assert!(robot.listener().calls().is_empty());
    assert!(!robot.card().is_tracking());
    assert!(robot.card().geometry().is_zero());
    assert_eq!(robot.item_position(), ORIGIN);
    for badge in Badge::ALL {
        assert_eq!(robot.badge(badge).alpha(), 0.0, "{badge:?} not cleared");
    }
}

#[test]
fn every_edge_reports_its_own_direction() {
    let cases = [
        ((-260.0, 0.0), SwipeCall::Left),
        ((260.0, 0.0), SwipeCall::Right),
        ((0.0, -260.0), SwipeCall::Top),
        ((0.0, 260.0), SwipeCall::Bottom),
    ];
    for ((dx, dy), expected) in cases {
        let mut robot = robot();
        robot.drag_by(dx, dy, 3);
        robot.wait_for_idle();
        assert_eq!(robot.listener().calls(), vec![expected], "drag by ({dx}, {dy})");
    }
}

#[test]
fn corner_release_prefers_horizontal_exit() {
    let mut robot = robot();
    robot.drag_by(-260.0, -260.0, 3);
    robot.wait_for_idle();
    assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);

    let mut robot = self::robot();
    robot.drag_by(260.0, 260.0, 3);
    robot.wait_for_idle();
    assert_eq!(robot.listener().calls(), vec![SwipeCall::Right]);
}

#[test]
fn consecutive_gestures_each_notify_once() {
    let mut robot = robot();
    robot.drag_by(260.0, 0.0, 2);
    // Extra input during the exit is swallowed.
    robot.press(1, Point::new(20.0, 20.0));
    robot.release(1, Point::new(20.0, 20.0));
    robot.wait_for_idle();

    robot.drag_by(0.0, -260.0, 2);
    robot.wait_for_idle();

    robot.drag_by(5.0, 0.0, 2);
    robot.wait_for_idle();

    assert_eq!(
        robot.listener().calls(),
        vec![SwipeCall::Right, SwipeCall::Top]
    );
}

#[test]
fn second_contact_keeps_session_snapshot() {
    let mut robot = robot();
    let start = robot.item_center();
    robot.press(0, start);
    robot.move_to(0, start.offset_by(30.0, 0.0));
    let session = *robot.card().session().expect("session open");
    let geometry = *robot.card().geometry();

    robot.press(1, Point::new(10.0, 10.0));
    robot.press_secondary(
        2,
        Point::new(20.0, 20.0),
        &[
            PointerSample::new(0, start.offset_by(30.0, 0.0)),
            PointerSample::new(2, Point::new(20.0, 20.0)),
        ],
    );

    let after = *robot.card().session().expect("session open");
    assert_eq!(after.origin, session.origin);
    assert_eq!(after.down_point, session.down_point);
    assert_eq!(after.active_pointer, Some(0));
    assert_eq!(*robot.card().geometry(), geometry);
}

#[test]
fn drag_continues_with_remaining_finger() {
    let mut robot = robot();
    let start = robot.item_center();
    robot.press(0, start);
    robot.move_to(0, start.offset_by(-100.0, 0.0));

    let second = Point::new(400.0, 400.0);
    robot.press_secondary(
        1,
        second,
        &[
            PointerSample::new(0, start.offset_by(-100.0, 0.0)),
            PointerSample::new(1, second),
        ],
    );
    robot.release_secondary(
        0,
        start.offset_by(-100.0, 0.0),
        &[
            PointerSample::new(0, start.offset_by(-100.0, 0.0)),
            PointerSample::new(1, second),
        ],
    );
    assert_eq!(robot.item_position(), Point::new(150.0, 250.0));

    robot.move_to(1, second.offset_by(-160.0, 0.0));
    assert_eq!(robot.item_position(), Point::new(-10.0, 250.0));

    robot.release(1, second.offset_by(-160.0, 0.0));
    robot.wait_for_idle();
    assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);
}

#[test]
fn badges_follow_drag_distance() {
    let mut robot = robot();
    robot.drag_without_release(150.0, -75.0, 3);

    assert_eq!(robot.badge(Badge::Left).alpha(), 0.5);
    assert_eq!(robot.badge(Badge::Right).alpha(), 0.5);
    assert_eq!(robot.badge(Badge::Top).alpha(), -0.25);
    assert_eq!(robot.badge(Badge::Bottom).alpha(), -0.25);
    assert_eq!(robot.badge(Badge::Top).opacity(), 0.0);
    assert!(robot.badge(Badge::Left).updates() >= 3);
}

#[test]
fn legacy_quirks_reproduce_old_widget() {
    let mut robot =
        SwipeRobot::with_config(SwipeConfig::default().with_quirks(LegacyQuirks::parity()))
            .expect("valid config");
    robot.drag_without_release(150.0, -75.0, 1);
    assert_eq!(robot.badge(Badge::Top).alpha(), 0.5);
    robot.release(0, robot.item_center());
    robot.wait_for_idle();
    assert!(robot.listener().calls().is_empty());

    robot.drag_by(0.0, 260.0, 2);
    robot.wait_for_idle();
    assert!(
        robot.listener().calls().is_empty(),
        "bottom boundary lies outside the container"
    );
}

#[test]
fn geometry_is_captured_per_session() {
    let mut robot = robot();
    assert!(robot.card().geometry().is_zero());

    robot.press(0, robot.item_center());
    assert_eq!(robot.card().geometry().container, Size::new(600.0, 600.0));
    robot.release(0, robot.item_center());
    robot.wait_for_idle();
    assert!(robot.card().geometry().is_zero());

    robot.container().resize(Size::new(1200.0, 600.0));
    robot.press(0, robot.item_center());
    assert_eq!(robot.card().geometry().container, Size::new(1200.0, 600.0));
    assert!((robot.card().geometry().left_boundary - 200.0).abs() < 1e-3);
}

#[test]
fn stop_tracking_is_idempotent() {
    let mut robot = robot();
    robot.drag_without_release(120.0, 40.0, 2);

    robot.card_mut().stop_tracking();
    let once = (
        robot.item_position(),
        *robot.card().geometry(),
        robot.badge(Badge::Right).alpha(),
    );
    robot.card_mut().stop_tracking();
    let twice = (
        robot.item_position(),
        *robot.card().geometry(),
        robot.badge(Badge::Right).alpha(),
    );

    assert_eq!(once, twice);
    assert_eq!(once.0, ORIGIN);
    assert!(once.1.is_zero());
    assert_eq!(once.2, 0.0);
}

#[test]
fn parent_intercept_is_released_after_gesture() {
    let mut robot = robot();
    robot.drag_by(20.0, 0.0, 1);
    robot.wait_for_idle();

    let start = robot.item_center();
    robot.press(0, start);
    robot.cancel(0, start);
    robot.wait_for_idle();

    assert_eq!(robot.container().intercept_requests(), vec![true, false, true, false]);
}

#[test]
fn detaching_mid_animation_still_completes() {
    let mut robot = robot();
    robot.drag_by(260.0, 0.0, 2);
    robot.card_mut().detach();

    assert!(!robot.press(3, Point::new(1.0, 1.0)));
    robot.wait_for_idle();
    assert_eq!(robot.listener().calls(), vec![SwipeCall::Right]);
    assert!(!robot.card().is_attached());
}

#[test]
fn detaching_mid_drag_abandons_gesture() {
    let mut robot = robot();
    let start = robot.item_center();
    robot.press(0, start);
    robot.move_to(0, start.offset_by(-50.0, 0.0));

    robot.card_mut().detach();
    assert!(!robot.card().is_tracking());
    assert!(robot.card().geometry().is_zero());
    assert_eq!(robot.item_position(), ORIGIN);
    assert_eq!(robot.badge(Badge::Left).alpha(), 0.0);
    assert_eq!(robot.container().intercept_requests(), vec![true, false]);

    // The lost release never reaches the card.
    assert!(!robot.release(0, start.offset_by(-50.0, 0.0)));
    robot.card_mut().attach();

    // A fresh contact reusing the old id drags from its own down point.
    let contact = Point::new(500.0, 500.0);
    robot.press(0, contact);
    robot.move_to(0, contact.offset_by(1.0, 0.0));
    assert_eq!(robot.item_position(), Point::new(251.0, 250.0));
    robot.release(0, contact.offset_by(1.0, 0.0));
    robot.wait_for_idle();

    assert!(robot.listener().calls().is_empty());
    assert_eq!(robot.item_position(), ORIGIN);
    assert_eq!(
        robot.container().intercept_requests(),
        vec![true, false, true, false]
    );
}

#[test]
fn reattached_card_accepts_new_pointer() {
    let mut robot = robot();
    let start = robot.item_center();
    robot.press(0, start);
    robot.move_to(0, start.offset_by(-50.0, 0.0));
    robot.card_mut().detach();
    robot.card_mut().attach();

    robot.press(1, start);
    assert!(robot.card().is_dragging());
    robot.move_to(1, start.offset_by(-300.0, 0.0));
    robot.release(1, start.offset_by(-300.0, 0.0));
    robot.wait_for_idle();

    assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);
    assert!(!robot.card().is_tracking());
}

#[test]
fn stop_tracking_during_exit_still_restores_origin() {
    let mut robot = robot();
    robot.drag_by(-260.0, 0.0, 4);
    assert!(robot.card().is_animating());

    robot.card_mut().stop_tracking();
    assert!(robot.card().is_tracking());
    assert!(robot.card().is_animating());

    robot.wait_for_idle();
    assert_eq!(robot.item_position(), ORIGIN);
    assert!(!robot.card().is_tracking());
    assert!(robot.card().geometry().is_zero());
    assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);
}
