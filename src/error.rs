use thiserror::Error;

use crate::observation::Observation;
use crate::Scalar;

#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum InvalidArgumentError<F: Scalar> {
    #[error("Expected a non-negative value, got {0}")]
    NegativeValue(F),
    #[error("Expected a non-negative variance, got {0}")]
    NegativeVariance(F),
    #[error("Expected a non-negative standard deviation, got {0}")]
    NegativeStandardDeviation(F),
}

#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum RegressionError<F: Scalar> {
    #[error("Minimum variance in y must be strictly positive, got {0}")]
    InvalidMinimumVarianceInY(F),
    #[error("Cannot remove {0} from an empty collection of observations")]
    EmptyCollection(Observation<F>),
    #[error("Cannot remove {0}: no such observation was added")]
    ObservationNotFound(Observation<F>),
}
