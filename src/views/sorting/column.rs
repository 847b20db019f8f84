// src/views/sorting/column.rs
//
// A single array value drawn as a bar whose height is proportional to it.

use nannou::prelude::*;

use super::ArrayStyle;
use crate::{
    animation::{Animated, AnimatedWidget},
    draw::{draw_label, draw_widget},
    models::Bounds,
};

/// Stable identity of a column; survives swaps, unlike its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(pub usize);

#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    value: u32,
    widget: AnimatedWidget,
    drag_offset: Option<Vec2>,
    label_color: Rgba,
}

impl Column {
    pub fn new(
        id: ColumnId,
        value: u32,
        max_value: u32,
        position: Vec2,
        width: f32,
        style: &ArrayStyle,
    ) -> Self {
        let height = value as f32 / max_value.max(1) as f32 * super::MAX_HEIGHT;
        Self {
            id,
            value,
            widget: AnimatedWidget::new(
                position,
                vec2(width, height),
                style.column_color,
                style.speeds,
            ),
            drag_offset: None,
            label_color: style.text_color,
        }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn widget(&self) -> &AnimatedWidget {
        &self.widget
    }

    pub fn position(&self) -> Vec2 {
        self.widget.position()
    }

    pub fn bounds(&self) -> Bounds {
        self.widget.bounds()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.widget.contains(point)
    }

    pub fn colliding_with(&self, other: &Column) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.widget.translate(delta);
    }

    pub fn set_interpolate_point(&mut self, target: Vec2) {
        self.widget.set_interpolate_to_point(target);
    }

    pub fn set_override_color(&mut self, color: Rgba) {
        self.widget.set_color(color);
    }

    /*********************** Dragging ******************************/

    /// Freezes the column under the pointer, remembering where it was grabbed.
    pub fn started_dragging(&mut self, point: Vec2) {
        let position = self.widget.position();
        self.drag_offset = Some(point - position);
        self.widget.set_position(position);
    }

    pub fn dragged_to_point(&mut self, point: Vec2) {
        if let Some(offset) = self.drag_offset {
            self.widget.set_position(point - offset);
        }
    }

    pub fn ended_dragging(&mut self, point: Vec2) {
        self.dragged_to_point(point);
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn draw(&self, draw: &Draw) {
        draw_widget(draw, &self.widget);
        let b = self.bounds();
        let label = Bounds::new(b.x, b.top(), b.w.max(24.0), 24.0);
        draw_label(draw, &self.value.to_string(), label, 14, self.label_color);
    }
}

impl Animated for Column {
    fn logic(&mut self) {
        self.widget.logic();
    }

    fn is_interpolating(&self) -> bool {
        self.widget.is_interpolating()
    }
}
