mod bounds;
mod point;

pub use bounds::Bounds1D;
pub use point::Point2;

pub mod prelude {
    pub use crate::{Bounds1D, Point2};
}
