use derive_getters::Getters;
use derive_new::new;
use itertools::Itertools;
use log::debug;
use log::trace;
use log::warn;

use crate::config::RegressionConfig;
use crate::error::RegressionError;
use crate::observation::Observation;
use crate::snapshot::RegressionSnapshot;
use crate::sums::WeightedSums;
use crate::Scalar;

/// An observation together with the y-variance it was weighted with.
#[derive(Clone, Copy, Debug, new)]
struct WeightedObservation<F> {
    observation: Observation<F>,
    variance_y: F,
}

/// Weighted least-squares line over a collection of observations that can
/// grow and shrink one observation at a time.
///
/// Every successful [`add`](Self::add) or [`remove`](Self::remove) publishes
/// a new [`RegressionSnapshot`] whose index is one higher than the previous.
///
/// ```
/// use weighted_linest::LinearRegression;
/// use weighted_linest::Observation;
///
/// let mut reg: LinearRegression<f64> = LinearRegression::new(true).unwrap();
/// reg.add(Observation::new(0.0, 1.0));
/// reg.add(Observation::new(1.0, 3.0));
/// let slope = reg.current_snapshot().slope().unwrap();
/// assert!((slope.value() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Getters)]
pub struct LinearRegression<F> {
    ignoring_variance_in_y: bool,
    keeping_history: bool,
    minimum_variance_in_y: F,
    current_snapshot: RegressionSnapshot<F>,
    /// Every snapshot published so far, oldest first. Empty unless
    /// `keeping_history` is set.
    history: Vec<RegressionSnapshot<F>>,
    #[getter(skip)]
    sums: WeightedSums<F>,
    #[getter(skip)]
    weighted: Vec<WeightedObservation<F>>,
}

impl<F: Scalar> LinearRegression<F> {
    pub fn new(ignoring_variance_in_y: bool) -> Result<Self, RegressionError<F>> {
        Self::with_config(RegressionConfig::new(ignoring_variance_in_y))
    }

    pub fn with_config(config: RegressionConfig<F>) -> Result<Self, RegressionError<F>> {
        let RegressionConfig {
            ignoring_variance_in_y,
            keeping_history,
            minimum_variance_in_y,
        } = config;
        if !(minimum_variance_in_y > F::zero()) {
            return Err(RegressionError::InvalidMinimumVarianceInY(
                minimum_variance_in_y,
            ));
        }
        Ok(Self {
            ignoring_variance_in_y,
            keeping_history,
            minimum_variance_in_y,
            current_snapshot: RegressionSnapshot::empty(0),
            history: Vec::new(),
            sums: WeightedSums::zero(),
            weighted: Vec::new(),
        })
    }

    pub fn config(&self) -> RegressionConfig<F> {
        RegressionConfig {
            ignoring_variance_in_y: self.ignoring_variance_in_y,
            keeping_history: self.keeping_history,
            minimum_variance_in_y: self.minimum_variance_in_y,
        }
    }

    /// The observations currently held, in the order they were added.
    pub fn observations(&self) -> &[Observation<F>] {
        self.current_snapshot.observations()
    }

    pub fn number_of_observations(&self) -> usize {
        self.weighted.len()
    }

    /// The y-variance `observation` is weighted with: 1 when variances are
    /// ignored, the configured floor when it has none of its own.
    pub fn resolve_variance_y(&self, observation: &Observation<F>) -> F {
        if self.ignoring_variance_in_y {
            F::one()
        } else if observation.y_has_variance() {
            observation.y().variance()
        } else {
            self.minimum_variance_in_y
        }
    }

    pub fn add(&mut self, observation: Observation<F>) {
        let variance_y = self.resolve_variance_y(&observation);
        debug!("Adding {} weighted with y-variance {}", observation, variance_y);
        self.sums = self.sums + contribution(&observation, variance_y);
        self.weighted
            .push(WeightedObservation::new(observation, variance_y));
        self.publish();
    }

    /// Removes one occurrence of `observation`, retracting the weight it was
    /// added with.
    pub fn remove(&mut self, observation: Observation<F>) -> Result<(), RegressionError<F>> {
        if self.weighted.is_empty() {
            return Err(RegressionError::EmptyCollection(observation));
        }
        let position = self
            .weighted
            .iter()
            .position(|w| w.observation == observation)
            .ok_or(RegressionError::ObservationNotFound(observation))?;
        let removed = self.weighted.remove(position);
        debug!(
            "Removing {} weighted with y-variance {}",
            removed.observation, removed.variance_y
        );
        if self.weighted.is_empty() {
            self.sums = WeightedSums::zero();
        } else {
            self.sums = self.sums - contribution(&removed.observation, removed.variance_y);
            if self.sums.clamp_drift() {
                warn!("Clamped weighted sums that drifted below zero after removing {}", observation);
            }
        }
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        let index = self.current_snapshot.index() + 1;
        let observations = self.weighted.iter().map(|w| w.observation).collect_vec();
        let snapshot = RegressionSnapshot::derive(index, observations, self.sums);
        trace!(
            "Snapshot {}: n = {}, delta = {}, r² = {:?}, equation = {:?}",
            snapshot.index(),
            snapshot.number_of_observations(),
            snapshot.delta(),
            snapshot.r_squared(),
            snapshot.equation()
        );
        if self.keeping_history {
            self.history.push(snapshot.clone());
        }
        self.current_snapshot = snapshot;
    }
}

impl<F: Scalar> Extend<Observation<F>> for LinearRegression<F> {
    fn extend<I: IntoIterator<Item = Observation<F>>>(&mut self, iter: I) {
        for observation in iter {
            self.add(observation);
        }
    }
}

fn contribution<F: Scalar>(observation: &Observation<F>, variance_y: F) -> WeightedSums<F> {
    WeightedSums::contribution(observation.x(), observation.y().value(), variance_y)
}

#[cfg(test)]
mod test {
    use super::LinearRegression;
    use crate::config::RegressionConfig;
    use crate::error::RegressionError;
    use crate::observation::Observation;
    use crate::snapshot::RegressionSnapshot;

    #[test]
    fn test_defaults() {
        let reg = LinearRegression::<f64>::new(false).unwrap();
        assert!(!*reg.ignoring_variance_in_y());
        assert!(!*reg.keeping_history());
        assert_eq!(*reg.minimum_variance_in_y(), 1e-3);
        assert_eq!(reg.current_snapshot(), &RegressionSnapshot::empty(0));
        assert!(reg.history().is_empty());
    }

    #[test]
    fn test_rejects_non_positive_minimum_variance() {
        for minimum in [0.0, -5.0] {
            let config = RegressionConfig::new(false).minimum_variance_in_y(minimum);
            assert_eq!(
                LinearRegression::with_config(config).unwrap_err(),
                RegressionError::InvalidMinimumVarianceInY(minimum)
            );
        }
        let config = RegressionConfig::new(false).minimum_variance_in_y(f64::NAN);
        assert!(LinearRegression::with_config(config).is_err());
    }

    #[test]
    fn test_resolve_variance_y() {
        let exact = Observation::new(1.0, 2.0);
        let uncertain = Observation::with_y_variance(1.0, 2.0, 0.5).unwrap();

        let reg = LinearRegression::new(false).unwrap();
        assert_eq!(reg.resolve_variance_y(&exact), 1e-3);
        assert_eq!(reg.resolve_variance_y(&uncertain), 0.5);

        let reg = LinearRegression::new(true).unwrap();
        assert_eq!(reg.resolve_variance_y(&exact), 1.0);
        assert_eq!(reg.resolve_variance_y(&uncertain), 1.0);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut reg = LinearRegression::new(false).unwrap();
        let obs = Observation::new(1.0, 0.0);
        assert_eq!(reg.remove(obs), Err(RegressionError::EmptyCollection(obs)));
        assert_eq!(reg.current_snapshot().index(), 0);
    }

    #[test]
    fn test_remove_unknown() {
        let mut reg = LinearRegression::new(false).unwrap();
        let obs1 = Observation::new(1.0, 0.0);
        let obs2 = Observation::new(0.0, 2.0);
        reg.add(obs1);
        let before = reg.current_snapshot().clone();
        assert_eq!(
            reg.remove(obs2),
            Err(RegressionError::ObservationNotFound(obs2))
        );
        assert_eq!(reg.current_snapshot(), &before);
    }

    #[test]
    fn test_remove_matches_the_observation_as_added() {
        let mut reg = LinearRegression::new(false).unwrap();
        let obs = Observation::new(1.0, 0.0);
        reg.add(obs);
        let floored = obs.with_variance(1e-3).unwrap();
        assert_eq!(
            reg.remove(floored),
            Err(RegressionError::ObservationNotFound(floored))
        );
        assert_eq!(reg.remove(obs), Ok(()));
    }

    #[test]
    fn test_remove_only_one_occurrence() {
        let mut reg = LinearRegression::new(true).unwrap();
        let obs = Observation::new(1.0, 0.0);
        reg.extend([obs, obs, Observation::new(2.0, 1.0)]);
        reg.remove(obs).unwrap();
        assert_eq!(reg.number_of_observations(), 2);
        assert_eq!(reg.observations(), &[obs, Observation::new(2.0, 1.0)]);
    }

    #[test]
    fn test_removing_everything_resets_sums_exactly() {
        let mut reg = LinearRegression::new(false).unwrap();
        let observations = [
            Observation::with_y_variance(0.1, 0.7, 0.3).unwrap(),
            Observation::new(0.2, 1.3),
            Observation::with_y_standard_deviation(0.3, 1.9, 0.7).unwrap(),
        ];
        reg.extend(observations);
        for obs in observations {
            reg.remove(obs).unwrap();
        }
        assert_eq!(reg.current_snapshot(), &RegressionSnapshot::empty(6));
    }

    #[test]
    fn test_index_increases_on_every_mutation() {
        let mut reg = LinearRegression::new(true).unwrap();
        let obs = Observation::new(1.0, 0.0);
        reg.add(obs);
        reg.add(obs);
        reg.remove(obs).unwrap();
        assert!(reg.remove(Observation::new(5.0, 5.0)).is_err());
        assert_eq!(reg.current_snapshot().index(), 3);
    }

    #[test]
    fn test_config_round_trips() {
        let config = RegressionConfig::new(true)
            .keeping_history(true)
            .minimum_variance_in_y(0.5);
        let reg = LinearRegression::with_config(config).unwrap();
        assert_eq!(reg.config(), config);
    }
}
