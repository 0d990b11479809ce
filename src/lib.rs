use std::fmt::Debug;
use std::fmt::Display;

use num_traits::Float;

pub mod config;
pub mod equation;
pub mod error;
pub mod linest;
pub mod observation;
pub mod snapshot;
pub mod sums;
pub mod uncertain_value;

pub use config::RegressionConfig;
pub use equation::RegressionEquation;
pub use error::InvalidArgumentError;
pub use error::RegressionError;
pub use linest::LinearRegression;
pub use observation::Observation;
pub use snapshot::RegressionSnapshot;
pub use sums::WeightedSums;
pub use uncertain_value::UncertainValue;

/// Floating point type the regression is computed in, e.g. `f32` or `f64`.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<F> Scalar for F where F: Float + Debug + Display + 'static {}
