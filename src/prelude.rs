pub use crate::bounding_box::{BoundingBox, Children};
pub use crate::bounds::IntegralBounds;
pub use crate::curves::{Curve, DecreasingFunction};
pub use crate::grid::Grid;
pub use crate::profile::RefineProfile;
pub use crate::sequence::HintSequence;

pub use math::prelude::*;
