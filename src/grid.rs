use crate::bounding_box::BoundingBox;
use crate::bounds::IntegralBounds;
use crate::curves::DecreasingFunction;
use crate::profile::RefineProfile;

use math::Bounds1D;

use deepsize::DeepSizeOf;

/// The live covering of the area between a decreasing curve and the baseline
/// `y = f(domain.upper())`.
///
/// The boxes bracket the area above the baseline; the rectangle below it is
/// known exactly and is added back by [`Grid::bounds`].
///
/// Every call to [`Grid::refine`] splits every live box once and replaces the
/// whole collection with the surviving children.
pub struct Grid<F> {
    function: F,
    domain: Bounds1D,
    baseline: f64,
    boxes: Vec<BoundingBox>,
    // previous generation's allocation, reused by the next refinement
    scratch: Vec<BoundingBox>,
    level: usize,
}

impl<F: DecreasingFunction> Grid<F> {
    pub fn new(function: F, domain: Bounds1D) -> Self {
        let (top, bottom) = (
            function.evaluate(domain.lower()),
            function.evaluate(domain.upper()),
        );
        let y = Bounds1D::try_new(bottom, top).unwrap_or_else(|| {
            panic!(
                "function is not decreasing over {}: f(lower) = {}, f(upper) = {}",
                domain, top, bottom
            )
        });
        Grid {
            function,
            domain,
            baseline: bottom,
            boxes: vec![BoundingBox::new(domain, y)],
            scratch: Vec::new(),
            level: 0,
        }
    }

    /// Bracket on the integral of `f` over the domain.
    pub fn bounds(&self) -> IntegralBounds {
        let base = self.baseline_area();
        self.box_bounds().combine(IntegralBounds::new(base, base))
    }

    /// Sum of the per-box brackets, i.e. the bracket on the area above the baseline.
    pub fn box_bounds(&self) -> IntegralBounds {
        self.boxes.iter().map(|b| b.bounds(&self.function)).sum()
    }

    pub fn refine(&mut self) -> RefineProfile {
        let mut profile = RefineProfile::default();
        self.scratch.clear();
        for parent in &self.boxes {
            let children = parent.refine(&self.function);
            profile.record_split(children.len());
            self.scratch.extend(children);
        }
        std::mem::swap(&mut self.boxes, &mut self.scratch);
        self.scratch.clear();
        self.level += 1;
        profile
    }

    pub fn function(&self) -> &F {
        &self.function
    }
}

impl<F> Grid<F> {
    pub fn domain(&self) -> Bounds1D {
        self.domain
    }

    pub fn baseline_area(&self) -> f64 {
        self.baseline * self.domain.span()
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Number of refinements applied since construction.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn memory_footprint(&self) -> usize {
        self.boxes.deep_size_of() + self.scratch.deep_size_of()
    }
}
