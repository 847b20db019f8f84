// src/controllers/input.rs
//
// Input contracts between the host window and the scenes.
// nannou already reports mouse and touch positions in world
// coordinates, so handlers receive points ready for hit-testing.

use nannou::prelude::*;

/// Identifies the pointer driving a gesture. The mouse is always 0,
/// touches use nannou's touch id offset by one.
pub type PointerId = u64;

pub const MOUSE_POINTER: PointerId = 0;

pub fn touch_pointer(id: u64) -> PointerId {
    id.wrapping_add(1)
}

/// Discrete, non-positional inputs forwarded through `io()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Finish the current animation step immediately.
    Skip,
}

pub trait Touchable {
    fn touch_down(&mut self, point: Point2, pointer: PointerId, button: MouseButton) -> bool;
    fn touch_dragged(&mut self, point: Point2, pointer: PointerId) -> bool;
    fn touch_up(&mut self, point: Point2, pointer: PointerId, button: MouseButton) -> bool;
}
