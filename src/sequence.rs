use crate::bounds::IntegralBounds;
use crate::curves::{Curve, DecreasingFunction};
use crate::grid::Grid;
use crate::profile::RefineProfile;

use math::Bounds1D;

#[derive(Copy, Clone, Debug, PartialEq)]
enum SequenceState {
    Unrefined,
    Refined,
}

/// Unbounded sequence of brackets, one refinement level per element.
///
/// The first element is the bracket of the unrefined grid. Each later call to
/// `next` refines once and then measures, so no work happens ahead of the
/// consumer. The sequence never ends; take a prefix.
pub struct HintSequence<F> {
    grid: Grid<F>,
    state: SequenceState,
    profile: RefineProfile,
}

impl<F: DecreasingFunction> HintSequence<F> {
    pub fn new(function: F, domain: Bounds1D) -> Self {
        HintSequence::from_grid(Grid::new(function, domain))
    }

    pub fn from_grid(grid: Grid<F>) -> Self {
        HintSequence {
            grid,
            state: SequenceState::Unrefined,
            profile: RefineProfile::default(),
        }
    }
}

impl HintSequence<Curve> {
    /// `(1 - x) / (1 + x)` over `[0, 1]`.
    pub fn benchmark() -> Self {
        HintSequence::new(Curve::Hint, Bounds1D::new(0.0, 1.0))
    }
}

impl<F> HintSequence<F> {
    pub fn grid(&self) -> &Grid<F> {
        &self.grid
    }

    /// Current refinement depth of the underlying grid.
    pub fn level(&self) -> usize {
        self.grid.level()
    }

    /// Totals over every refinement performed so far.
    pub fn profile(&self) -> RefineProfile {
        self.profile
    }

    pub fn into_grid(self) -> Grid<F> {
        self.grid
    }
}

impl<F: DecreasingFunction> Iterator for HintSequence<F> {
    type Item = IntegralBounds;

    fn next(&mut self) -> Option<IntegralBounds> {
        match self.state {
            SequenceState::Unrefined => {
                self.state = SequenceState::Refined;
            }
            SequenceState::Refined => {
                let profile = self.grid.refine();
                profile.log_summary(self.grid.level(), self.grid.memory_footprint());
                self.profile = self.profile.combine(profile);
            }
        }
        let bounds = self.grid.bounds();
        trace!(
            "level {}: {} over {} boxes",
            self.grid.level(),
            bounds,
            self.grid.len()
        );
        Some(bounds)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_first_element_is_unrefined() {
        let mut sequence = HintSequence::benchmark();
        assert_eq!(sequence.next(), Some(IntegralBounds::new(1.0, 0.0)));
        assert_eq!(sequence.level(), 0);
        assert_eq!(sequence.grid().len(), 1);
        assert_eq!(sequence.profile(), RefineProfile::default());
    }

    #[test]
    fn test_one_refinement_per_element() {
        let mut sequence = HintSequence::benchmark();
        for expected_level in 0..6 {
            sequence.next();
            assert_eq!(sequence.level(), expected_level);
        }
        let grid = sequence.into_grid();
        assert_eq!(grid.level(), 5);
    }

    #[test]
    fn test_second_element_matches_single_refine() {
        let mut grid = Grid::new(Curve::Hint, Bounds1D::new(0.0, 1.0));
        grid.refine();
        let second = HintSequence::benchmark().nth(1).unwrap();
        assert!((second.upper - grid.bounds().upper).abs() < EPS);
        assert!((second.lower - grid.bounds().lower).abs() < EPS);
        assert!((second.quality() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_grows_over_prefix() {
        let qualities: Vec<f64> = HintSequence::benchmark()
            .take(8)
            .map(|b| b.quality())
            .collect();
        assert_eq!(qualities.len(), 8);
        assert_eq!(qualities[0], 1.0);
        for pair in qualities.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-9, "{:?}", qualities);
        }
        assert!(qualities[7] > qualities[0]);
    }

    #[test]
    fn test_profile_accumulates() {
        let mut sequence = HintSequence::benchmark();
        sequence.next();
        sequence.next();
        assert_eq!(sequence.profile(), RefineProfile::new(4, 3, 1));
        sequence.next();
        let profile = sequence.profile();
        assert_eq!(profile.candidates, 4 + 4 * 3);
        assert_eq!(profile.kept + profile.pruned, profile.candidates);
        assert_eq!(sequence.grid().len(), profile.kept - 3);
    }

    #[test]
    fn test_restart_needs_a_fresh_sequence() {
        let first: Vec<IntegralBounds> = HintSequence::benchmark().take(4).collect();
        let second: Vec<IntegralBounds> = HintSequence::benchmark().take(4).collect();
        assert_eq!(first, second);
    }
}
