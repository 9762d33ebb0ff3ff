use std::fmt;

#[cfg(feature = "deepsize")]
use deepsize::DeepSizeOf;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]` with `lower <= upper`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
#[cfg_attr(feature = "deepsize", derive(DeepSizeOf))]
pub struct Bounds1D {
    lower: f64,
    upper: f64,
}

impl Bounds1D {
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(
            lower <= upper,
            "interval lower bound {} exceeds upper bound {}",
            lower,
            upper
        );
        Bounds1D { lower, upper }
    }

    // rejects inverted or NaN endpoints instead of panicking
    pub fn try_new(lower: f64, upper: f64) -> Option<Self> {
        if lower <= upper {
            Some(Bounds1D { lower, upper })
        } else {
            None
        }
    }

    pub const fn lower(&self) -> f64 {
        self.lower
    }

    pub const fn upper(&self) -> f64 {
        self.upper
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Splits at the midpoint into `(lower half, upper half)`.
    pub fn bisect(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (
            Bounds1D {
                lower: self.lower,
                upper: mid,
            },
            Bounds1D {
                lower: mid,
                upper: self.upper,
            },
        )
    }
}

impl TryFrom<(f64, f64)> for Bounds1D {
    type Error = String;
    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        Bounds1D::try_new(value.0, value.1).ok_or_else(|| {
            format!(
                "interval lower bound {} must not exceed upper bound {}",
                value.0, value.1
            )
        })
    }
}

impl From<Bounds1D> for (f64, f64) {
    fn from(bounds: Bounds1D) -> Self {
        (bounds.lower, bounds.upper)
    }
}

impl fmt::Display for Bounds1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
