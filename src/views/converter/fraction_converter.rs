// src/views/converter/fraction_converter.rs
//
// Drives a sequence of MultiplyStep widgets. Each finished step
// contributes one binary digit; its fractional remainder seeds the
// next step until the remainder is zero or the step limit is hit.

use nannou::prelude::*;
use tracing::{debug, info};

use super::{MultiplyStep, StepStyle};
use crate::{
    animation::Animated,
    controllers::InputEvent,
    models::{Bounds, Decimal},
};

pub struct FractionConverter {
    steps: Vec<MultiplyStep>,
    value: Decimal,
    origin: Vec2,
    viewport: Bounds,
    style: StepStyle,
    step_limit: Option<usize>,
    remainder_exhausted: bool,
    final_layout_applied: bool,
}

impl FractionConverter {
    pub fn new(value: Decimal, origin: Vec2, viewport: Bounds, style: StepStyle) -> Self {
        let spawn = Self::spawn_point(&viewport, origin.y);
        let first = MultiplyStep::new(value, spawn, &style);

        let mut converter = Self {
            steps: vec![first],
            value,
            origin,
            viewport,
            style,
            step_limit: None,
            remainder_exhausted: false,
            final_layout_applied: false,
        };
        converter.reposition();
        converter
    }

    // new steps enter from just past the right edge of the viewport
    fn spawn_point(viewport: &Bounds, y: f32) -> Vec2 {
        vec2(viewport.right() + viewport.w * 0.1, y)
    }

    /// `None` or `Some(0)` lets the conversion run until the remainder is zero.
    /// A limit below the steps already taken is raised to that count.
    pub fn set_step_limit(&mut self, limit: Option<usize>) {
        self.step_limit = limit
            .filter(|l| *l > 0)
            .map(|l| l.max(self.steps.len()));
        if !self.is_complete() {
            self.final_layout_applied = false;
        }
        self.reposition();
    }

    /// One more step than now; an unlimited conversion is capped one past
    /// the steps it has taken.
    pub fn raise_step_limit(&mut self) {
        let limit = self.step_limit.map_or(self.steps.len() + 1, |l| l + 1);
        self.set_step_limit(Some(limit));
    }

    /// One step fewer, never below one. Unlimited stays unlimited.
    pub fn lower_step_limit(&mut self) {
        if let Some(limit) = self.step_limit {
            self.set_step_limit(Some(limit.saturating_sub(1).max(1)));
        }
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.origin = vec2(x, y);
        self.reposition();
    }

    pub fn set_viewport(&mut self, viewport: Bounds) {
        self.viewport = viewport;
        self.reposition();
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn steps(&self) -> &[MultiplyStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    fn limit_reached(&self) -> bool {
        self.step_limit.map_or(false, |limit| self.steps.len() >= limit)
    }

    fn last_step_done(&self) -> bool {
        self.steps.last().map_or(false, MultiplyStep::is_done)
    }

    pub fn is_complete(&self) -> bool {
        self.remainder_exhausted || (self.limit_reached() && self.last_step_done())
    }

    /// One leading digit per step, available once the conversion is complete.
    pub fn digit_string(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(self.steps.iter().map(MultiplyStep::digit).collect())
    }

    pub fn whole_digit_position(&self, index: usize) -> Option<Vec2> {
        self.steps.get(index).map(MultiplyStep::whole_digit_position)
    }

    /****************************** Layout ***********************************/

    fn scale_steps(&mut self) {
        let shrink = self.style.shrink_factor;
        let complete = self.is_complete();
        let last = self.steps.len() - 1;
        for (i, step) in self.steps.iter_mut().enumerate() {
            // the active step stays full size until the conversion ends
            if i != last || (complete && step.is_done()) {
                step.widget_mut().set_interpolate_to_scale(shrink, shrink);
            }
        }
    }

    /// Recomputes every step's target scale and position.
    pub fn reposition(&mut self) {
        self.scale_steps();

        let spacing = self.style.spacing();
        let complete = self.is_complete();
        let last = self.steps.len() - 1;

        let mut last_x = self.origin.x;
        let mut last_width = 0.0;
        let mut row_offset = 0.0;

        for (i, step) in self.steps.iter_mut().enumerate() {
            let width = step.width();
            let mut new_x = if i == 0 {
                self.origin.x
            } else {
                last_x + last_width + spacing
            };

            // the step being worked on sits half a width further right
            let active_offset = if i == last && i != 0 && !complete {
                0.5 * width
            } else {
                0.0
            };

            if i != 0 && new_x + active_offset + width > self.viewport.right() {
                row_offset -= self.style.row_spacing;
                new_x = self.origin.x;
            }

            step.widget_mut().set_interpolate_to_point(vec2(
                new_x + active_offset,
                self.origin.y + row_offset,
            ));

            last_x = new_x;
            last_width = width;
        }
    }

    /****************************** Frame hooks ******************************/

    pub fn logic(&mut self) {
        for step in self.steps.iter_mut() {
            step.logic();
        }

        if self.is_complete() {
            if !self.final_layout_applied {
                self.reposition();
                if let Some(last) = self.steps.last_mut() {
                    last.color_whole_digit();
                }
                self.final_layout_applied = true;
                info!(
                    "conversion of {} complete: 0.{}",
                    self.value,
                    self.digit_string().unwrap_or_default()
                );
            }
            return;
        }

        let Some(last) = self.steps.last_mut() else {
            return;
        };
        if !last.is_done() {
            return;
        }

        last.color_whole_digit();
        let remainder = last.product().fractional();
        let next_y = last
            .widget()
            .position_target()
            .unwrap_or(last.widget().position())
            .y;

        if remainder.is_zero() {
            self.remainder_exhausted = true;
            self.reposition();
        } else {
            let spawn = Self::spawn_point(&self.viewport, next_y);
            self.steps.push(MultiplyStep::new(remainder, spawn, &self.style));
            debug!(step = self.steps.len(), %remainder, "appended multiply step");
            self.reposition();
        }
    }

    pub fn io(&mut self, event: InputEvent) {
        for step in self.steps.iter_mut() {
            if !step.is_interpolating() {
                step.io(event);
            }
        }
    }

    pub fn draw(&self, draw: &Draw) {
        for step in &self.steps {
            step.draw(draw);
        }
    }
}
