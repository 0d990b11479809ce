use std::fmt;

use crate::error::InvalidArgumentError;
use crate::uncertain_value::UncertainValue;
use crate::Scalar;

/// A point `(x, y)` whose `y` carries its own uncertainty.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Observation<F> {
    x: F,
    y: UncertainValue<F>,
}

impl<F: Scalar> Observation<F> {
    /// An observation whose `y` is known exactly.
    pub fn new(x: F, y: F) -> Self {
        Self {
            x,
            y: UncertainValue::exact(y),
        }
    }

    pub fn with_y_variance(x: F, y: F, y_variance: F) -> Result<Self, InvalidArgumentError<F>> {
        Ok(Self {
            x,
            y: UncertainValue::new(y, y_variance)?,
        })
    }

    pub fn with_y_standard_deviation(
        x: F,
        y: F,
        y_standard_deviation: F,
    ) -> Result<Self, InvalidArgumentError<F>> {
        Ok(Self {
            x,
            y: UncertainValue::with_standard_deviation(y, y_standard_deviation)?,
        })
    }

    pub fn from_uncertain(x: F, y: UncertainValue<F>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> F {
        self.x
    }

    pub fn y(&self) -> UncertainValue<F> {
        self.y
    }

    pub fn y_has_variance(&self) -> bool {
        self.y.has_variance()
    }

    /// The same point with its `y` variance replaced.
    pub fn with_variance(&self, y_variance: F) -> Result<Self, InvalidArgumentError<F>> {
        Self::with_y_variance(self.x, self.y.value(), y_variance)
    }

    /// The same point with its `y` standard deviation replaced.
    pub fn with_standard_deviation(
        &self,
        y_standard_deviation: F,
    ) -> Result<Self, InvalidArgumentError<F>> {
        Self::with_y_standard_deviation(self.x, self.y.value(), y_standard_deviation)
    }
}

impl<F: Scalar> From<(F, F)> for Observation<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Scalar> fmt::Display for Observation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
