use std::cmp::Ordering;

use crate::equation::RegressionEquation;
use crate::observation::Observation;
use crate::sums::WeightedSums;
use crate::uncertain_value::UncertainValue;
use crate::Scalar;

/// The state of a regression right after one mutation.
///
/// The squared-error quantities are means, i.e. sums of weighted squared
/// errors divided by the total weight `Σ 1/σ²`.
#[derive(Clone, PartialEq, Debug)]
pub struct RegressionSnapshot<F> {
    index: usize,
    observations: Vec<Observation<F>>,
    sums: WeightedSums<F>,
    delta: F,
    delta_times_slope: F,
    delta_times_intercept_y: F,
    total_sse: F,
    residual_sse: Option<F>,
    regression_sse: Option<F>,
    r_squared: Option<F>,
    equation: Option<RegressionEquation<F>>,
}

impl<F: Scalar> RegressionSnapshot<F> {
    /// The snapshot of a regression without observations.
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            observations: Vec::new(),
            sums: WeightedSums::zero(),
            delta: F::zero(),
            delta_times_slope: F::zero(),
            delta_times_intercept_y: F::zero(),
            total_sse: F::zero(),
            residual_sse: None,
            regression_sse: None,
            r_squared: None,
            equation: None,
        }
    }

    /// Derives the regression of `observations` from their weighted sums.
    ///
    /// The moments come from `sums`. `observations` is only consulted to tell
    /// whether every x or every y is the same, in which case `delta` or
    /// `total_sse` is exactly zero rather than rounding noise.
    pub fn derive(index: usize, observations: Vec<Observation<F>>, sums: WeightedSums<F>) -> Self {
        if observations.is_empty() {
            return Self {
                observations,
                sums,
                ..Self::empty(index)
            };
        }
        let total_weight = sums.one_over_variance_y();
        let m = sums.means();
        let first = observations[0];
        let x_constant = observations.iter().all(|o| o.x() == first.x());
        let y_constant = observations.iter().all(|o| o.y().value() == first.y().value());

        let delta_times_slope = m.xy - m.x * m.y;
        let delta_times_intercept_y = m.x_squared * m.y - m.x * m.xy;
        let delta = if x_constant {
            F::zero()
        } else {
            (m.x_squared - m.x * m.x).max(F::zero())
        };
        let total_sse = if y_constant {
            F::zero()
        } else {
            (m.y_squared - m.y * m.y).max(F::zero())
        };

        let (residual_sse, regression_sse, r_squared, equation) = if delta == F::zero() {
            if total_sse == F::zero() {
                (None, None, None, RegressionEquation::Degenerate { x: m.x, y: m.y })
            } else {
                let vertical = RegressionEquation::InfiniteSlope { intercept_x: m.x };
                (None, None, Some(F::one()), vertical)
            }
        } else {
            let slope_variance = (total_weight * delta).recip();
            let intercept_y_variance = m.x_squared * slope_variance;
            let (slope, intercept_y) = if y_constant {
                (F::zero(), m.y)
            } else {
                (delta_times_slope / delta, delta_times_intercept_y / delta)
            };
            // Since intercept_y = mean(y) - slope * mean(x), the regression
            // error reduces to slope² · delta.
            let regression = (slope * slope * delta).max(F::zero());
            let residual = (total_sse - regression).max(F::zero());
            let r_squared = if total_sse == F::zero() {
                F::one()
            } else {
                (F::one() - residual / total_sse).max(F::zero())
            };
            let line = RegressionEquation::FiniteSlope {
                slope: UncertainValue::propagated(slope, slope_variance),
                intercept_y: UncertainValue::propagated(intercept_y, intercept_y_variance),
            };
            (Some(residual), Some(regression), Some(r_squared), line)
        };

        Self {
            index,
            observations,
            sums,
            delta,
            delta_times_slope,
            delta_times_intercept_y,
            total_sse,
            residual_sse,
            regression_sse,
            r_squared,
            equation: Some(equation),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn observations(&self) -> &[Observation<F>] {
        &self.observations
    }

    pub fn number_of_observations(&self) -> usize {
        self.observations.len()
    }

    pub fn sums(&self) -> WeightedSums<F> {
        self.sums
    }

    /// Discriminant of the normal equations. Zero when all x coincide.
    pub fn delta(&self) -> F {
        self.delta
    }

    pub fn delta_times_slope(&self) -> F {
        self.delta_times_slope
    }

    pub fn delta_times_intercept_y(&self) -> F {
        self.delta_times_intercept_y
    }

    pub fn total_sse(&self) -> F {
        self.total_sse
    }

    pub fn residual_sse(&self) -> Option<F> {
        self.residual_sse
    }

    pub fn regression_sse(&self) -> Option<F> {
        self.regression_sse
    }

    pub fn r_squared(&self) -> Option<F> {
        self.r_squared
    }

    pub fn equation(&self) -> Option<RegressionEquation<F>> {
        self.equation
    }

    pub fn slope(&self) -> Option<UncertainValue<F>> {
        self.equation.and_then(|eq| eq.slope())
    }

    pub fn intercept_y(&self) -> Option<UncertainValue<F>> {
        self.equation.and_then(|eq| eq.intercept_y())
    }

    pub fn intercept_x(&self) -> Option<F> {
        self.equation.and_then(|eq| eq.intercept_x())
    }
}

/// Snapshots are ordered by the mutation that produced them. Two snapshots
/// with the same index but different contents are incomparable.
impl<F: Scalar> PartialOrd for RegressionSnapshot<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.index.cmp(&other.index) {
            Ordering::Equal => (self == other).then(|| Ordering::Equal),
            ordering => Some(ordering),
        }
    }
}
