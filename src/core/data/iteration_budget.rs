use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationBudgetError {
    NotPositive { value: f64 },
}

impl fmt::Display for IterationBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { value } => {
                write!(f, "iteration budget must be a positive finite number: {}", value)
            }
        }
    }
}

impl Error for IterationBudgetError {}

/// Escape-time cutoff, kept fractional so geometric growth compounds exactly.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct IterationBudget(f64);

impl IterationBudget {
    pub fn new(value: f64) -> Result<Self, IterationBudgetError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(IterationBudgetError::NotPositive { value });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole iterations attempted per pixel: `floor(budget)`.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.0.floor() as u32
    }

    /// Budget scaled by `factor`. Growth past `f64::MAX` saturates there.
    #[must_use]
    pub(crate) fn scaled(self, factor: f64) -> Self {
        Self((self.0 * factor).min(f64::MAX))
    }
}

impl fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
