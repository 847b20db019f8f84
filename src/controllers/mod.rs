pub mod input;
pub mod osc;

pub use input::{touch_pointer, InputEvent, PointerId, Touchable, MOUSE_POINTER};
pub use osc::{OscCommand, OscController};
