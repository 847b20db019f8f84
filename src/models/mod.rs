pub mod fraction;
pub mod geometry;

pub use fraction::{Decimal, FractionError};
pub use geometry::Bounds;
