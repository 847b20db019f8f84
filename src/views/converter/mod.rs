// src/views/converter/mod.rs
//
// Animated decimal-fraction to binary conversion by repeated doubling.

pub mod fraction_converter;
pub mod multiply_step;

pub use fraction_converter::FractionConverter;
pub use multiply_step::{MultiplyStep, StepPhase};

use nannou::prelude::*;

use crate::config::{AnimationConfig, Config};

/// Sizing, timing and colors shared by every step of a conversion.
#[derive(Debug, Clone)]
pub struct StepStyle {
    pub font_size: u32,
    pub shrink_factor: f32,
    pub multiply_ticks: u32,
    pub row_spacing: f32,
    pub widget_color: Rgba,
    pub text_color: Rgba,
    pub whole_digit_color: Rgba,
    pub speeds: AnimationConfig,
}

impl StepStyle {
    pub fn from_config(config: &Config) -> Self {
        let palette = config.palette();
        Self {
            font_size: config.converter.font_size,
            shrink_factor: config.converter.shrink_factor,
            multiply_ticks: config.converter.multiply_ticks,
            row_spacing: config.converter.row_spacing,
            widget_color: palette.widget,
            text_color: palette.text,
            whole_digit_color: palette.whole_digit,
            speeds: config.animation,
        }
    }

    // rough advance of the default font, good enough for layout
    pub fn char_width(&self) -> f32 {
        self.font_size as f32 * 0.6
    }

    pub fn padding(&self) -> f32 {
        self.font_size as f32 * 0.5
    }

    pub fn line_height(&self) -> f32 {
        self.font_size as f32 * 1.25
    }

    /// Gap between neighbouring steps.
    pub fn spacing(&self) -> f32 {
        self.line_height() * 0.5
    }
}

impl Default for StepStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
