// this module contains the monotonically decreasing curves that can be bracketed

use math::Bounds1D;

use anyhow::{bail, ensure};
use serde::Deserialize;

/// A real function that is monotonically decreasing over the domain it is integrated on.
///
/// Nothing checks the monotonicity. Every bound derived from a box assumes that
/// `f(x.lower)` is the maximum and `f(x.upper)` the minimum of `f` inside it.
pub trait DecreasingFunction {
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> DecreasingFunction for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Curve {
    /// `(1 - x) / (1 + x)`, the classic hint benchmark integrand.
    Hint,
    Exponential { scale: f64, rate: f64 },
    Reciprocal { shift: f64 },
    Linear { slope: f64, intercept: f64 },
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Hint
    }
}

impl Curve {
    /// Checks parameters against the domain. Monotonicity follows from the
    /// parameter constraints for every variant.
    pub fn validate(&self, domain: Bounds1D) -> anyhow::Result<()> {
        ensure!(
            domain.lower().is_finite() && domain.upper().is_finite(),
            "domain {} must be finite",
            domain
        );
        match *self {
            Curve::Hint => {
                ensure!(
                    domain.lower() > -1.0,
                    "hint curve has a pole at x = -1, domain {} must lie to its right",
                    domain
                );
            }
            Curve::Exponential { scale, rate } => {
                ensure!(
                    scale.is_finite() && rate.is_finite(),
                    "exponential parameters must be finite"
                );
                if scale < 0.0 || rate < 0.0 {
                    bail!(
                        "exponential curve with scale {} and rate {} is not decreasing",
                        scale,
                        rate
                    );
                }
            }
            Curve::Reciprocal { shift } => {
                ensure!(shift.is_finite(), "reciprocal shift must be finite");
                ensure!(
                    domain.lower() + shift > 0.0,
                    "reciprocal curve with shift {} has a pole inside domain {}",
                    shift,
                    domain
                );
            }
            Curve::Linear { slope, intercept } => {
                ensure!(
                    slope.is_finite() && intercept.is_finite(),
                    "linear parameters must be finite"
                );
                ensure!(
                    slope <= 0.0,
                    "linear curve with slope {} is increasing",
                    slope
                );
            }
        }
        // monotone, so the endpoint values bound the curve over the whole domain
        let (top, bottom) = (self.evaluate(domain.lower()), self.evaluate(domain.upper()));
        ensure!(
            top.is_finite() && bottom.is_finite(),
            "curve {:?} overflows over domain {}: f(lower) = {}, f(upper) = {}",
            self,
            domain,
            top,
            bottom
        );
        Ok(())
    }

    /// Exact value of the definite integral over `domain`.
    pub fn integral(&self, domain: Bounds1D) -> f64 {
        let (a, b) = (domain.lower(), domain.upper());
        match *self {
            // (1 - x) / (1 + x) = 2 / (1 + x) - 1
            Curve::Hint => 2.0 * ((1.0 + b).ln() - (1.0 + a).ln()) - (b - a),
            Curve::Exponential { scale, rate } => {
                if rate == 0.0 {
                    scale * (b - a)
                } else {
                    scale / rate * ((-rate * a).exp() - (-rate * b).exp())
                }
            }
            Curve::Reciprocal { shift } => (b + shift).ln() - (a + shift).ln(),
            Curve::Linear { slope, intercept } => {
                intercept * (b - a) + slope * (b * b - a * a) / 2.0
            }
        }
    }
}

impl DecreasingFunction for Curve {
    fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Curve::Hint => (1.0 - x) / (1.0 + x),
            Curve::Exponential { scale, rate } => scale * (-rate * x).exp(),
            Curve::Reciprocal { shift } => 1.0 / (x + shift),
            Curve::Linear { slope, intercept } => intercept + slope * x,
        }
    }
}
