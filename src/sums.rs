use derive_more::Add;
use derive_more::Sub;

use crate::error::InvalidArgumentError;
use crate::Scalar;

/// Running sums over a collection of observations, each term divided by the
/// observation's y-variance.
///
/// Adding or subtracting the [`contribution`](WeightedSums::contribution) of
/// one observation updates the sums in constant time.
#[derive(Clone, Copy, PartialEq, Debug, Add, Sub)]
pub struct WeightedSums<F> {
    one_over_variance_y: F,
    x_over_variance_y: F,
    y_over_variance_y: F,
    xy_over_variance_y: F,
    x_squared_over_variance_y: F,
    y_squared_over_variance_y: F,
}

/// Means of `x`, `y`, `xy`, `x²` and `y²` weighted by `1 / variance_y`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WeightedMeans<F> {
    pub x: F,
    pub y: F,
    pub xy: F,
    pub x_squared: F,
    pub y_squared: F,
}

impl<F: Scalar> WeightedSums<F> {
    pub fn zero() -> Self {
        Self {
            one_over_variance_y: F::zero(),
            x_over_variance_y: F::zero(),
            y_over_variance_y: F::zero(),
            xy_over_variance_y: F::zero(),
            x_squared_over_variance_y: F::zero(),
            y_squared_over_variance_y: F::zero(),
        }
    }

    pub fn new(
        one_over_variance_y: F,
        x_over_variance_y: F,
        y_over_variance_y: F,
        xy_over_variance_y: F,
        x_squared_over_variance_y: F,
        y_squared_over_variance_y: F,
    ) -> Result<Self, InvalidArgumentError<F>> {
        for sum in [
            one_over_variance_y,
            x_squared_over_variance_y,
            y_squared_over_variance_y,
        ] {
            if !(sum >= F::zero()) {
                return Err(InvalidArgumentError::NegativeValue(sum));
            }
        }
        Ok(Self {
            one_over_variance_y,
            x_over_variance_y,
            y_over_variance_y,
            xy_over_variance_y,
            x_squared_over_variance_y,
            y_squared_over_variance_y,
        })
    }

    /// The terms a single observation adds to the sums.
    ///
    /// `variance_y` must be strictly positive; the engine resolves it before
    /// calling this.
    pub fn contribution(x: F, y: F, variance_y: F) -> Self {
        let w = variance_y.recip();
        Self {
            one_over_variance_y: w,
            x_over_variance_y: x * w,
            y_over_variance_y: y * w,
            xy_over_variance_y: x * y * w,
            x_squared_over_variance_y: x * x * w,
            y_squared_over_variance_y: y * y * w,
        }
    }

    pub fn one_over_variance_y(&self) -> F {
        self.one_over_variance_y
    }

    pub fn x_over_variance_y(&self) -> F {
        self.x_over_variance_y
    }

    pub fn y_over_variance_y(&self) -> F {
        self.y_over_variance_y
    }

    pub fn xy_over_variance_y(&self) -> F {
        self.xy_over_variance_y
    }

    pub fn x_squared_over_variance_y(&self) -> F {
        self.x_squared_over_variance_y
    }

    pub fn y_squared_over_variance_y(&self) -> F {
        self.y_squared_over_variance_y
    }

    /// All means are zero when the sums are empty.
    pub fn means(&self) -> WeightedMeans<F> {
        let total = self.one_over_variance_y;
        let mean = |sum: F| {
            if total == F::zero() {
                F::zero()
            } else {
                sum / total
            }
        };
        WeightedMeans {
            x: mean(self.x_over_variance_y),
            y: mean(self.y_over_variance_y),
            xy: mean(self.xy_over_variance_y),
            x_squared: mean(self.x_squared_over_variance_y),
            y_squared: mean(self.y_squared_over_variance_y),
        }
    }

    /// Clamps the intrinsically non-negative sums back to zero after
    /// subtraction left them slightly negative. Returns whether anything
    /// was clamped.
    pub(crate) fn clamp_drift(&mut self) -> bool {
        let mut clamped = false;
        for sum in [
            &mut self.one_over_variance_y,
            &mut self.x_squared_over_variance_y,
            &mut self.y_squared_over_variance_y,
        ] {
            if *sum < F::zero() {
                *sum = F::zero();
                clamped = true;
            }
        }
        clamped
    }
}

impl<F: Scalar> Default for WeightedSums<F> {
    fn default() -> Self {
        Self::zero()
    }
}
