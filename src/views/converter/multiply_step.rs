// src/views/converter/multiply_step.rs
//
// One doubling of the conversion: "<input> x 2 = <product>".
// The whole digit of the product is the next binary digit.

use nannou::prelude::*;

use super::StepStyle;
use crate::{
    animation::{Animated, AnimatedWidget},
    controllers::InputEvent,
    draw::{draw_label, draw_widget},
    models::{Bounds, Decimal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    AnimatingIn,
    Multiplying { ticks_left: u32 },
    Done,
}

#[derive(Debug, Clone)]
pub struct MultiplyStep {
    input: Decimal,
    product: Decimal,
    phase: StepPhase,
    whole_digit_colored: bool,
    widget: AnimatedWidget,
    style: StepStyle,
}

impl MultiplyStep {
    pub fn new(input: Decimal, spawn: Vec2, style: &StepStyle) -> Self {
        let product = input.double_fraction();
        let chars = Self::text_for(&input, Some(&product)).chars().count() as f32;
        let size = vec2(
            chars * style.char_width() + 2.0 * style.padding(),
            style.line_height() + 2.0 * style.padding(),
        );
        Self {
            input,
            product,
            phase: StepPhase::AnimatingIn,
            whole_digit_colored: false,
            widget: AnimatedWidget::new(spawn, size, style.widget_color, style.speeds),
            style: style.clone(),
        }
    }

    fn text_for(input: &Decimal, product: Option<&Decimal>) -> String {
        match product {
            Some(p) => format!("{} x 2 = {}", input, p),
            None => format!("{} x 2 = ?", input),
        }
    }

    fn prefix(&self) -> String {
        format!("{} x 2 = ", self.input)
    }

    pub fn input(&self) -> Decimal {
        self.input
    }

    /// The doubled input, available before the reveal for the caller's logic.
    pub fn product(&self) -> Decimal {
        self.product
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == StepPhase::Done
    }

    /// Text as currently shown: the product stays hidden until done.
    pub fn display_text(&self) -> String {
        let product = self.is_done().then_some(&self.product);
        Self::text_for(&self.input, product)
    }

    pub fn result_text(&self) -> String {
        self.product.to_string()
    }

    /// Leading character of the product, '0' or '1'.
    pub fn digit(&self) -> char {
        if self.product.whole() == 0 {
            '0'
        } else {
            '1'
        }
    }

    pub fn color_whole_digit(&mut self) {
        self.whole_digit_colored = true;
    }

    pub fn is_whole_digit_colored(&self) -> bool {
        self.whole_digit_colored
    }

    pub fn widget(&self) -> &AnimatedWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut AnimatedWidget {
        &mut self.widget
    }

    pub fn width(&self) -> f32 {
        self.widget.target_size().x
    }

    /// World position of the product's whole digit at the widget's current scale.
    pub fn whole_digit_position(&self) -> Vec2 {
        let scale = self.widget.scale();
        let offset = vec2(
            self.style.padding() + self.prefix().chars().count() as f32 * self.style.char_width(),
            self.style.padding(),
        );
        self.widget.position() + offset * scale
    }

    pub fn io(&mut self, event: InputEvent) {
        match event {
            InputEvent::Skip => {
                if let StepPhase::Multiplying { .. } = self.phase {
                    self.phase = StepPhase::Done;
                }
            }
        }
    }

    pub fn draw(&self, draw: &Draw) {
        draw_widget(draw, &self.widget);

        let scale = self.widget.scale();
        let font_size = ((self.style.font_size as f32) * scale.y).max(1.0) as u32;
        let char_w = self.style.char_width() * scale.x;
        let bounds = self.widget.bounds();
        let pad = self.style.padding() * scale;
        let line = Bounds::new(
            bounds.x + pad.x,
            bounds.y + pad.y,
            bounds.w - 2.0 * pad.x,
            bounds.h - 2.0 * pad.y,
        );

        if !self.whole_digit_colored {
            draw_label(draw, &self.display_text(), line, font_size, self.style.text_color);
            return;
        }

        // prefix, highlighted whole digit, then the fractional part
        let prefix = self.prefix();
        let product = self.result_text();
        let (whole, rest) = product.split_at(1);
        let prefix_w = prefix.chars().count() as f32 * char_w;

        draw_label(draw, &prefix, line, font_size, self.style.text_color);
        let digit_box = Bounds::new(line.x + prefix_w, line.y, char_w * 2.0, line.h);
        draw_label(draw, whole, digit_box, font_size, self.style.whole_digit_color);
        let rest_box = Bounds::new(line.x + prefix_w + char_w, line.y, line.w, line.h);
        draw_label(draw, rest, rest_box, font_size, self.style.text_color);
    }
}

impl Animated for MultiplyStep {
    fn logic(&mut self) {
        self.widget.logic();

        self.phase = match self.phase {
            StepPhase::AnimatingIn if !self.widget.is_interpolating() => StepPhase::Multiplying {
                ticks_left: self.style.multiply_ticks,
            },
            StepPhase::Multiplying { ticks_left: 0 } => StepPhase::Done,
            StepPhase::Multiplying { ticks_left } => StepPhase::Multiplying {
                ticks_left: ticks_left - 1,
            },
            phase => phase,
        };
    }

    fn is_interpolating(&self) -> bool {
        self.widget.is_interpolating()
    }
}
