use crate::uncertain_value::UncertainValue;
use crate::Scalar;

/// The line that best represents a collection of observations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RegressionEquation<F> {
    /// `y = slope * x + intercept_y`.
    FiniteSlope {
        slope: UncertainValue<F>,
        intercept_y: UncertainValue<F>,
    },
    /// The vertical line `x = intercept_x`.
    InfiniteSlope { intercept_x: F },
    /// No line can be drawn through the observations, which all sit at `(x, y)`.
    Degenerate { x: F, y: F },
}

impl<F: Scalar> RegressionEquation<F> {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    pub fn has_finite_slope(&self) -> bool {
        matches!(self, Self::FiniteSlope { .. })
    }

    pub fn has_zero_slope(&self) -> bool {
        match self {
            Self::FiniteSlope { slope, .. } => slope.value() == F::zero(),
            _ => false,
        }
    }

    pub fn slope(&self) -> Option<UncertainValue<F>> {
        match *self {
            Self::FiniteSlope { slope, .. } => Some(slope),
            _ => None,
        }
    }

    pub fn intercept_y(&self) -> Option<UncertainValue<F>> {
        match *self {
            Self::FiniteSlope { intercept_y, .. } => Some(intercept_y),
            _ => None,
        }
    }

    /// Where the line crosses the x axis, if it crosses it at a single point.
    pub fn intercept_x(&self) -> Option<F> {
        match *self {
            Self::FiniteSlope { slope, intercept_y } => {
                if slope.value() == F::zero() {
                    None
                } else {
                    Some(-(intercept_y.value() / slope.value()))
                }
            }
            Self::InfiniteSlope { intercept_x } => Some(intercept_x),
            Self::Degenerate { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::RegressionEquation;
    use crate::uncertain_value::UncertainValue;

    fn finite(slope: f64, intercept_y: f64) -> RegressionEquation<f64> {
        RegressionEquation::FiniteSlope {
            slope: UncertainValue::new(slope, 2.0).unwrap(),
            intercept_y: UncertainValue::new(intercept_y, 4.0).unwrap(),
        }
    }

    #[test]
    fn test_kind_predicates() {
        let eq1 = finite(1.0, 3.0);
        let eq2 = RegressionEquation::InfiniteSlope { intercept_x: 5.0 };
        let eq3 = RegressionEquation::Degenerate { x: 1.0, y: 2.0 };

        assert!(!eq1.is_degenerate());
        assert!(!eq2.is_degenerate());
        assert!(eq3.is_degenerate());

        assert!(eq1.has_finite_slope());
        assert!(!eq2.has_finite_slope());
        assert!(!eq3.has_finite_slope());

        assert!(!eq1.has_zero_slope());
        assert!(finite(0.0, 3.0).has_zero_slope());
        assert!(!eq2.has_zero_slope());
        assert!(!eq3.has_zero_slope());
    }

    #[test]
    fn test_slope_and_intercept_y() {
        let eq = finite(1.0, 3.0);
        assert_eq!(eq.slope(), Some(UncertainValue::new(1.0, 2.0).unwrap()));
        assert_eq!(eq.intercept_y(), Some(UncertainValue::new(3.0, 4.0).unwrap()));

        let vertical = RegressionEquation::InfiniteSlope { intercept_x: 5.0 };
        assert_eq!(vertical.slope(), None);
        assert_eq!(vertical.intercept_y(), None);

        let degenerate = RegressionEquation::Degenerate { x: 1.0, y: 2.0 };
        assert_eq!(degenerate.slope(), None);
        assert_eq!(degenerate.intercept_y(), None);
    }

    #[test]
    fn test_intercept_x() {
        assert_eq!(finite(2.0, 3.0).intercept_x(), Some(-1.5));
        assert_eq!(finite(0.0, 3.0).intercept_x(), None);
        assert_eq!(
            RegressionEquation::InfiniteSlope { intercept_x: 5.0 }.intercept_x(),
            Some(5.0)
        );
        assert_eq!(
            RegressionEquation::Degenerate { x: 1.0, y: 2.0 }.intercept_x(),
            None
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(finite(1.0, 3.0), finite(1.0, 3.0));
        assert_ne!(finite(10.0, 3.0), finite(1.0, 3.0));
        assert_ne!(finite(1.0, 30.0), finite(1.0, 3.0));
        assert_ne!(
            finite(1.0, 3.0),
            RegressionEquation::FiniteSlope {
                slope: UncertainValue::new(1.0, 20.0).unwrap(),
                intercept_y: UncertainValue::new(3.0, 4.0).unwrap(),
            }
        );
        assert_ne!(
            RegressionEquation::InfiniteSlope { intercept_x: 10.0 },
            RegressionEquation::InfiniteSlope { intercept_x: 1.0 }
        );
        assert_ne!(
            RegressionEquation::Degenerate { x: 1.0, y: 20.0 },
            RegressionEquation::Degenerate { x: 1.0, y: 2.0 }
        );
        assert_ne!(
            RegressionEquation::InfiniteSlope { intercept_x: 1.0 },
            RegressionEquation::Degenerate { x: 1.0, y: 0.0 }
        );
    }
}
