// src/views/sorting/mod.rs
//
// An array of draggable columns that can be swapped by dropping one
// onto another.

pub mod column;
pub mod sortable_array;

pub use column::{Column, ColumnId};
pub use sortable_array::{Marker, SortableArray};

use nannou::prelude::*;
use thiserror::Error;

use crate::config::{AnimationConfig, Config};

/// Height of a column holding the array's maximum value.
pub const MAX_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("an array needs at least one element")]
    Empty,
    #[error("the maximum element value must be at least 1")]
    ZeroMaxValue,
}

#[derive(Debug, Clone)]
pub struct ArrayStyle {
    pub column_color: Rgba,
    pub moved_color: Rgba,
    pub displaced_color: Rgba,
    pub iteration_marker_color: Rgba,
    pub step_marker_color: Rgba,
    pub text_color: Rgba,
    pub speeds: AnimationConfig,
}

impl ArrayStyle {
    pub fn from_config(config: &Config) -> Self {
        let palette = config.palette();
        Self {
            column_color: palette.column,
            moved_color: palette.moved,
            displaced_color: palette.displaced,
            iteration_marker_color: palette.iteration_marker,
            step_marker_color: palette.step_marker,
            text_color: palette.text,
            speeds: config.animation,
        }
    }
}

impl Default for ArrayStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
