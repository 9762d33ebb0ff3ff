use crate::bounds::IntegralBounds;
use crate::curves::DecreasingFunction;

use math::{Bounds1D, Point2};

use deepsize::DeepSizeOf;
use smallvec::SmallVec;

use std::fmt;

/// At most four quadrants survive a refinement.
pub type Children = SmallVec<[BoundingBox; 4]>;

/// A cell `x × y` of the covering between a decreasing curve and its baseline.
///
/// Bounds are only defined once the box has passed [`BoundingBox::intersects`],
/// i.e. `y.lower() <= f(x.lower())`.
#[derive(Copy, Clone, Debug, PartialEq, DeepSizeOf)]
pub struct BoundingBox {
    pub x: Bounds1D,
    pub y: Bounds1D,
}

impl BoundingBox {
    pub const fn new(x: Bounds1D, y: Bounds1D) -> Self {
        BoundingBox { x, y }
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x.midpoint(), self.y.midpoint())
    }

    // f(x.lower) is the largest value of f inside the box, so if the floor is
    // above it the curve cannot pass through.
    pub fn intersects<F: DecreasingFunction + ?Sized>(&self, f: &F) -> bool {
        self.y.lower() <= f.evaluate(self.x.lower())
    }

    pub fn bounds<F: DecreasingFunction + ?Sized>(&self, f: &F) -> IntegralBounds {
        let dx = self.x.span();
        let floor = self.y.lower();
        IntegralBounds::new(
            dx * (self.upper_edge_y(f) - floor),
            dx * (self.lower_edge_y(f) - floor),
        )
    }

    fn upper_edge_y<F: DecreasingFunction + ?Sized>(&self, f: &F) -> f64 {
        let at_left = f.evaluate(self.x.lower());
        assert!(
            self.y.lower() <= at_left,
            "box {} does not intersect the curve, f({}) = {}",
            self,
            self.x.lower(),
            at_left
        );
        if at_left <= self.y.upper() {
            at_left
        } else {
            self.y.upper()
        }
    }

    fn lower_edge_y<F: DecreasingFunction + ?Sized>(&self, f: &F) -> f64 {
        let at_right = f.evaluate(self.x.upper());
        if at_right <= self.y.lower() {
            self.y.lower()
        } else if at_right <= self.y.upper() {
            at_right
        } else {
            self.y.upper()
        }
    }

    /// Quad-splits the box at its center and keeps the quadrants the curve can reach.
    /// Children come out ordered left-bottom, left-top, right-bottom, right-top.
    pub fn refine<F: DecreasingFunction + ?Sized>(&self, f: &F) -> Children {
        let (left, right) = self.x.bisect();
        let (bottom, top) = self.y.bisect();
        [left, right]
            .into_iter()
            .flat_map(|x| [bottom, top].into_iter().map(move |y| BoundingBox::new(x, y)))
            .filter(|child| child.intersects(f))
            .collect()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}
