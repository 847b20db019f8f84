// src/views/mod.rs

pub mod converter;
pub mod sorting;

pub use converter::{FractionConverter, MultiplyStep, StepPhase, StepStyle};
pub use sorting::{ArrayError, ArrayStyle, Column, ColumnId, Marker, SortableArray};
