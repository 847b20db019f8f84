// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self { rx_port: 9000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eduvis=info".to_string(),
        }
    }
}

/************************* Animation Configs ********************/

/// Per-tick linear speeds shared by every animated widget.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub position_speed: f32,
    pub scale_speed: f32,
    pub color_speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            position_speed: 12.0,
            scale_speed: 0.04,
            color_speed: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub initial_value: String,
    pub step_limit: usize, // 0 means unlimited
    pub shrink_factor: f32,
    pub font_size: u32,
    pub multiply_ticks: u32, // ticks the product stays hidden
    pub row_spacing: f32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            initial_value: "0.625".to_string(),
            step_limit: 0,
            shrink_factor: 0.45,
            font_size: 28,
            multiply_ticks: 45,
            row_spacing: 110.0,
        }
    }
}

impl ConverterConfig {
    pub fn limit(&self) -> Option<usize> {
        (self.step_limit > 0).then_some(self.step_limit)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub elements: usize,
    pub max_value: u32,
    pub element_width: f32,
    pub seed: u64,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            elements: 10,
            max_value: 20,
            element_width: 36.0,
            seed: 7,
        }
    }
}

/************************* Palette ********************/

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub background: [f32; 4],
    pub widget: [f32; 4],
    pub text: [f32; 4],
    pub whole_digit: [f32; 4],
    pub column: [f32; 4],
    pub moved: [f32; 4],
    pub displaced: [f32; 4],
    pub iteration_marker: [f32; 4],
    pub step_marker: [f32; 4],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: [0.05, 0.05, 0.08, 1.0],
            widget: [0.20, 0.22, 0.30, 1.0],
            text: [0.95, 0.95, 0.95, 1.0],
            whole_digit: [0.98, 0.78, 0.18, 1.0],
            column: [0.55, 0.60, 0.70, 1.0],
            moved: [0.85, 0.20, 0.20, 1.0],
            displaced: [0.20, 0.40, 0.85, 1.0],
            iteration_marker: [0.35, 0.35, 0.35, 1.0],
            step_marker: [0.95, 0.90, 0.10, 1.0],
        }
    }
}

/// Resolved colors, built once from the `[palette]` section.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgba,
    pub widget: Rgba,
    pub text: Rgba,
    pub whole_digit: Rgba,
    pub column: Rgba,
    pub moved: Rgba,
    pub displaced: Rgba,
    pub iteration_marker: Rgba,
    pub step_marker: Rgba,
}

fn to_rgba(c: [f32; 4]) -> Rgba {
    rgba(c[0], c[1], c[2], c[3])
}

impl From<&PaletteConfig> for Palette {
    fn from(p: &PaletteConfig) -> Self {
        Self {
            background: to_rgba(p.background),
            widget: to_rgba(p.widget),
            text: to_rgba(p.text),
            whole_digit: to_rgba(p.whole_digit),
            column: to_rgba(p.column),
            moved: to_rgba(p.moved),
            displaced: to_rgba(p.displaced),
            iteration_marker: to_rgba(p.iteration_marker),
            step_marker: to_rgba(p.step_marker),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from(&PaletteConfig::default())
    }
}
