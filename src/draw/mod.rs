// src/draw/mod.rs
//
// Shared nannou drawing for widgets. Widgets keep bottom-left anchored
// bounds while nannou draws primitives from their centre.

use nannou::prelude::*;

use crate::{animation::AnimatedWidget, models::Bounds};

pub fn draw_box(draw: &Draw, bounds: Bounds, color: Rgba) {
    let center = bounds.center();
    draw.rect()
        .x_y(center.x, center.y)
        .w_h(bounds.w, bounds.h)
        .color(color);
}

pub fn draw_widget(draw: &Draw, widget: &AnimatedWidget) {
    draw_box(draw, widget.bounds(), widget.color());
}

/// Left-justified single line of text inside `bounds`.
pub fn draw_label(draw: &Draw, text: &str, bounds: Bounds, font_size: u32, color: Rgba) {
    let center = bounds.center();
    draw.text(text)
        .x_y(center.x, center.y)
        .w_h(bounds.w, bounds.h)
        .font_size(font_size)
        .left_justify()
        .color(color);
}

/// Upward-pointing arrow filling the widget's bounds.
pub fn draw_marker(draw: &Draw, widget: &AnimatedWidget) {
    let b = widget.bounds();
    draw.tri()
        .points(
            pt2(b.left(), b.bottom()),
            pt2(b.right(), b.bottom()),
            pt2(b.center().x, b.top()),
        )
        .color(widget.color());
}

pub fn draw_outline(draw: &Draw, bounds: Bounds, color: Rgba, weight: f32) {
    let corners = [
        pt2(bounds.left(), bounds.bottom()),
        pt2(bounds.right(), bounds.bottom()),
        pt2(bounds.right(), bounds.top()),
        pt2(bounds.left(), bounds.top()),
        pt2(bounds.left(), bounds.bottom()),
    ];
    draw.polyline().weight(weight).points(corners).color(color);
}
