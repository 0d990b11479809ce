use std::fmt;

use crate::error::InvalidArgumentError;
use crate::Scalar;

/// A value together with the variance of its uncertainty.
///
/// The standard deviation is computed once at construction, so it is always
/// exactly `variance.sqrt()` (or the standard deviation that was supplied).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UncertainValue<F> {
    value: F,
    variance: F,
    standard_deviation: F,
}

impl<F: Scalar> UncertainValue<F> {
    pub fn new(value: F, variance: F) -> Result<Self, InvalidArgumentError<F>> {
        // Written as a negated comparison so NaN is rejected as well.
        if !(variance >= F::zero()) {
            return Err(InvalidArgumentError::NegativeVariance(variance));
        }
        Ok(Self {
            value,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }

    pub fn with_standard_deviation(
        value: F,
        standard_deviation: F,
    ) -> Result<Self, InvalidArgumentError<F>> {
        if !(standard_deviation >= F::zero()) {
            return Err(InvalidArgumentError::NegativeStandardDeviation(
                standard_deviation,
            ));
        }
        Ok(Self {
            value,
            variance: standard_deviation * standard_deviation,
            standard_deviation,
        })
    }

    /// A value known without uncertainty.
    pub fn exact(value: F) -> Self {
        Self {
            value,
            variance: F::zero(),
            standard_deviation: F::zero(),
        }
    }

    /// For variances obtained by error propagation, where rounding may leave
    /// the result a hair below zero.
    pub(crate) fn propagated(value: F, variance: F) -> Self {
        let variance = variance.max(F::zero());
        Self {
            value,
            variance,
            standard_deviation: variance.sqrt(),
        }
    }

    pub fn value(&self) -> F {
        self.value
    }

    pub fn variance(&self) -> F {
        self.variance
    }

    pub fn standard_deviation(&self) -> F {
        self.standard_deviation
    }

    pub fn has_variance(&self) -> bool {
        self.variance > F::zero()
    }
}

impl<F: Scalar> fmt::Display for UncertainValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.value, self.standard_deviation)
    }
}
