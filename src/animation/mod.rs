pub mod lerp;
pub mod widget;

pub use lerp::{advance, StepToward};
pub use widget::AnimatedWidget;

/// Anything the host steps once per frame.
pub trait Animated {
    fn logic(&mut self); // advance one tick toward current targets
    fn is_interpolating(&self) -> bool; // true while any target is pending
}
