//! Scripted swipe card walkthrough.
//!
//! Replays three gestures against a 600×600 container holding a 100×100 card:
//! a fling off the left edge, a short drag that springs back, and a drag the
//! platform cancels. Each run prints the listener calls it produced.
//!
//! Run with:
//! ```bash
//! RUST_LOG=swipecard_ui=debug cargo run --package swipe-demo
//! ```

use anyhow::{bail, Result};
use swipecard_testing::{SwipeCall, SwipeRobot};
use swipecard_ui::{Badge, SwipeConfig};
use web_time::Instant;

struct Scenario {
    name: &'static str,
    expected: &'static [SwipeCall],
    script: fn(&mut SwipeRobot),
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "fling left",
        expected: &[SwipeCall::Left],
        script: fling_left,
    },
    Scenario {
        name: "short drag springs back",
        expected: &[],
        script: short_drag,
    },
    Scenario {
        name: "cancelled drag",
        expected: &[],
        script: cancelled_drag,
    },
];

fn fling_left(robot: &mut SwipeRobot) {
    robot.drag_by(-260.0, 0.0, 4);
}

fn short_drag(robot: &mut SwipeRobot) {
    robot.drag_by(10.0, 10.0, 2);
}

fn cancelled_drag(robot: &mut SwipeRobot) {
    let start = robot.item_center();
    robot.press(0, start);
    for step in 1..=3 {
        robot.move_to(0, start.offset_by(-100.0 * step as f32, 0.0));
    }
    robot.cancel(0, start.offset_by(-300.0, 0.0));
}

fn run(scenario: &Scenario, config: SwipeConfig) -> Result<bool> {
    let mut robot = SwipeRobot::with_config(config)?;
    let started = Instant::now();

    (scenario.script)(&mut robot);
    let outcome = robot.card().current_run().map(|run| run.outcome);
    let frames = robot.wait_for_idle();

    let calls = robot.listener().calls();
    let passed = calls == scenario.expected
        && !robot.card().is_tracking()
        && Badge::ALL
            .into_iter()
            .all(|badge| robot.badge(badge).alpha() == 0.0);

    println!(
        "  {} {}: outcome {:?}, {} frames, calls {:?} ({:?})",
        if passed { "✓" } else { "✗" },
        scenario.name,
        outcome,
        frames,
        calls,
        started.elapsed()
    );
    log::debug!("final state {:?}", robot);
    Ok(passed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe Card Walkthrough ===");
    let config = SwipeConfig::default();
    log::info!("config: {:?}", config);

    let mut failures = 0;
    for scenario in SCENARIOS {
        if !run(scenario, config)? {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} scenarios failed", failures, SCENARIOS.len());
    }
    println!("All {} scenarios passed", SCENARIOS.len());
    Ok(())
}
