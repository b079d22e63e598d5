/// Fraction of the iteration budget used before a point's orbit escaped.
///
/// `0.0` both for points presumed inside the set and for points that
/// escape on the very first iteration.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct EscapeSample(f64);

impl EscapeSample {
    pub const INSIDE: Self = Self(0.0);

    /// Sample for an orbit that escaped at `iteration` under `budget`.
    #[must_use]
    pub fn escaped_at(iteration: u32, budget: f64) -> Self {
        Self(f64::from(iteration) / budget)
    }

    /// Wraps an already normalised value, clamped to `[0, 1]`.
    #[must_use]
    pub fn from_fraction(q: f64) -> Self {
        Self(q.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_at_normalises_by_budget() {
        assert_eq!(EscapeSample::escaped_at(13, 52.0).value(), 0.25);
        assert_eq!(EscapeSample::escaped_at(0, 52.0), EscapeSample::INSIDE);
    }

    #[test]
    fn test_from_fraction_clamps() {
        assert_eq!(EscapeSample::from_fraction(-0.5).value(), 0.0);
        assert_eq!(EscapeSample::from_fraction(0.75).value(), 0.75);
        assert_eq!(EscapeSample::from_fraction(3.0).value(), 1.0);
    }
}
