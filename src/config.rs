use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::Scalar;

/// Floor applied to the y-variance of observations that carry none.
pub const DEFAULT_MINIMUM_VARIANCE_IN_Y: f64 = 1e-3;

/// How a [`LinearRegression`](crate::LinearRegression) weighs its observations.
///
/// Can be read from a TOML document; keys that are absent take their defaults:
///
/// ```toml
/// ignoring_variance_in_y = false
/// keeping_history = true
/// minimum_variance_in_y = 0.001
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(default, bound(deserialize = "F: Scalar + Deserialize<'de>"))]
pub struct RegressionConfig<F> {
    /// Weigh every observation equally, whatever its y-variance.
    pub ignoring_variance_in_y: bool,
    /// Keep every published snapshot, not only the current one.
    pub keeping_history: bool,
    /// Variance assumed for observations whose y is exact. Must be positive.
    pub minimum_variance_in_y: F,
}

impl<F: Scalar> RegressionConfig<F> {
    pub fn new(ignoring_variance_in_y: bool) -> Self {
        Self {
            ignoring_variance_in_y,
            ..Self::default()
        }
    }

    pub fn keeping_history(self, keeping_history: bool) -> Self {
        Self {
            keeping_history,
            ..self
        }
    }

    pub fn minimum_variance_in_y(self, minimum_variance_in_y: F) -> Self {
        Self {
            minimum_variance_in_y,
            ..self
        }
    }
}

impl<F: Scalar + for<'de> Deserialize<'de>> RegressionConfig<F> {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let mut s = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut s)?;
        Self::from_toml_str(&s)
    }
}

impl<F: Scalar> Default for RegressionConfig<F> {
    fn default() -> Self {
        Self {
            ignoring_variance_in_y: false,
            keeping_history: false,
            minimum_variance_in_y: F::from(DEFAULT_MINIMUM_VARIANCE_IN_Y)
                .unwrap_or_else(F::epsilon),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    IllegalConfigEntry(#[from] toml::de::Error),
}
