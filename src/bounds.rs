use std::fmt;
use std::iter::Sum;

/// Upper and lower bracket on a definite integral.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IntegralBounds {
    pub upper: f64,
    pub lower: f64,
}

impl IntegralBounds {
    pub const fn new(upper: f64, lower: f64) -> Self {
        IntegralBounds { upper, lower }
    }

    pub fn gap(&self) -> f64 {
        self.upper - self.lower
    }

    /// Reciprocal of the gap. A closed bracket (`upper == lower`) reports `+inf`.
    pub fn quality(&self) -> f64 {
        1.0 / self.gap()
    }

    pub fn brackets(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn combine(&self, other: Self) -> Self {
        IntegralBounds::new(self.upper + other.upper, self.lower + other.lower)
    }
}

impl Sum for IntegralBounds {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(IntegralBounds::default(), |acc, b| acc.combine(b))
    }
}

impl fmt::Display for IntegralBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ub = {}, lb = {}", self.upper, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_is_reciprocal_gap() {
        let bounds = IntegralBounds::new(1.0, 0.75);
        assert_eq!(bounds.gap(), 0.25);
        assert_eq!(bounds.quality(), 4.0);
    }

    #[test]
    fn test_closed_bracket_quality_is_infinite() {
        let bounds = IntegralBounds::new(0.5, 0.5);
        assert_eq!(bounds.gap(), 0.0);
        assert!(bounds.quality().is_infinite());
        assert!(bounds.quality() > 0.0);
        assert_eq!(format!("{}", bounds.quality()), "inf");
    }

    #[test]
    fn test_sum_combines_componentwise() {
        let total: IntegralBounds = vec![
            IntegralBounds::new(0.5, 0.25),
            IntegralBounds::new(0.25, 0.0),
            IntegralBounds::new(0.125, 0.125),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, IntegralBounds::new(0.875, 0.375));
        assert!(total.brackets(0.5));
        assert!(!total.brackets(1.0));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: IntegralBounds = std::iter::empty().sum();
        assert_eq!(total, IntegralBounds::default());
        assert_eq!(format!("{}", total), "ub = 0, lb = 0");
    }
}
