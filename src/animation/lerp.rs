// src/animation/lerp.rs
//
// Fixed-speed linear stepping. Each call moves a value at most
// `max_delta` closer to its target and reports whether it arrived.

use nannou::prelude::*;

pub trait StepToward: Sized + Copy {
    fn step_toward(self, target: Self, max_delta: f32) -> (Self, bool);
}

impl StepToward for f32 {
    fn step_toward(self, target: f32, max_delta: f32) -> (f32, bool) {
        let remaining = target - self;
        if remaining.abs() <= max_delta {
            (target, true)
        } else {
            (self + max_delta * remaining.signum(), false)
        }
    }
}

impl StepToward for Vec2 {
    fn step_toward(self, target: Vec2, max_delta: f32) -> (Vec2, bool) {
        let remaining = target - self;
        let distance = remaining.length();
        if distance <= max_delta {
            (target, true)
        } else {
            (self + remaining / distance * max_delta, false)
        }
    }
}

// channels move independently, all at the same speed
impl StepToward for Rgba {
    fn step_toward(self, target: Rgba, max_delta: f32) -> (Rgba, bool) {
        let (r, r_done) = self.red.step_toward(target.red, max_delta);
        let (g, g_done) = self.green.step_toward(target.green, max_delta);
        let (b, b_done) = self.blue.step_toward(target.blue, max_delta);
        let (a, a_done) = self.alpha.step_toward(target.alpha, max_delta);
        (rgba(r, g, b, a), r_done && g_done && b_done && a_done)
    }
}

/// Steps `current` toward `target`, clearing the target once reached.
pub fn advance<T: StepToward>(current: &mut T, target: &mut Option<T>, max_delta: f32) {
    if let Some(goal) = *target {
        let (next, arrived) = current.step_toward(goal, max_delta);
        *current = next;
        if arrived {
            *target = None;
        }
    }
}
