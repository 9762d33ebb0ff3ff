#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RefineProfile {
    pub candidates: usize, // quadrants produced by splitting
    pub kept: usize,       // quadrants the curve can reach
    pub pruned: usize,     // quadrants discarded as lying above the curve
}

impl RefineProfile {
    pub fn new(candidates: usize, kept: usize, pruned: usize) -> Self {
        RefineProfile {
            candidates,
            kept,
            pruned,
        }
    }

    pub fn record_split(&mut self, kept: usize) {
        debug_assert!(kept <= 4);
        self.candidates += 4;
        self.kept += kept;
        self.pruned += 4 - kept;
    }

    pub fn combine(&self, other: Self) -> Self {
        RefineProfile::new(
            self.candidates + other.candidates,
            self.kept + other.kept,
            self.pruned + other.pruned,
        )
    }

    pub fn prune_ratio(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.pruned as f64 / self.candidates as f64
        }
    }

    pub fn log_summary(&self, level: usize, bytes: usize) {
        let &RefineProfile {
            candidates,
            kept,
            pruned,
        } = self;
        debug!(
            "level {}: {} candidate boxes, {} kept, {} pruned ({:.1}%), {} bytes live",
            level,
            candidates,
            kept,
            pruned,
            100.0 * self.prune_ratio(),
            bytes
        );
    }
}
