//! Owns the single in-flight exit or reset animation.

use crate::exit::ExitOutcome;
use swipecard_animation::{AnimationEngine, AnimationSpec, Easing};
use swipecard_ui_graphics::Point;

/// One transition from release to rest, and the outcome it reports on completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub outcome: ExitOutcome,
    pub from: Point,
    pub target: Point,
    pub spec: AnimationSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    accelerate_factor: f32,
    overshoot_tension: f32,
    run: Option<AnimationRun>,
}

impl AnimationDriver {
    pub fn new(accelerate_factor: f32, overshoot_tension: f32) -> Self {
        Self {
            accelerate_factor,
            overshoot_tension,
            run: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Exits accelerate off screen; a reset overshoots its origin and settles.
    pub fn easing_for(&self, outcome: ExitOutcome) -> Easing {
        if outcome.is_exit() {
            Easing::Accelerate {
                factor: self.accelerate_factor,
            }
        } else {
            Easing::Overshoot {
                tension: self.overshoot_tension,
            }
        }
    }

    /// Hand a new run to `engine`. Returns false, leaving the current run
    /// untouched, if one is already in flight.
    pub fn start_exit(
        &mut self,
        engine: &mut dyn AnimationEngine,
        outcome: ExitOutcome,
        from: Point,
        target: Point,
        duration_millis: u64,
    ) -> bool {
        if let Some(current) = &self.run {
            log::debug!(
                "{:?} animation rejected: {:?} still running",
                outcome,
                current.outcome
            );
            return false;
        }

        let run = AnimationRun {
            outcome,
            from,
            target,
            spec: AnimationSpec::tween(duration_millis, self.easing_for(outcome)),
        };
        engine.animate(run.from, run.target, run.spec);
        self.run = Some(run);
        true
    }

    /// Take the finished run. Yields it once; later calls return `None`.
    pub fn complete(&mut self) -> Option<AnimationRun> {
        self.run.take()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(crate::config::ACCELERATE_FACTOR, crate::config::OVERSHOOT_TENSION)
    }
}
