//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A hypothesis `ŷ = intercept + slope·x` for the single-feature model.
///
/// A diverged run can hold NaN or infinite components. JSON has no literal for
/// those, so they are written as strings (`"NaN"`, `"inf"`, `"-inf"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    #[serde(with = "weight_repr")]
    pub intercept: f64,
    #[serde(with = "weight_repr")]
    pub slope: f64,
}

mod weight_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => s
                .parse::<f64>()
                .ok()
                .filter(|v| !v.is_finite())
                .ok_or_else(|| D::Error::custom(format!("invalid weight component {s:?}"))),
        }
    }
}

impl WeightVector {
    /// Number of components (bias + one feature).
    pub const LEN: usize = 2;

    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Column vector `[intercept, slope]` matching the design matrix layout.
    pub fn to_vector(self) -> DVector<f64> {
        DVector::from_row_slice(&[self.intercept, self.slope])
    }

    /// Build from a solver output; the vector must have exactly two entries.
    pub fn from_vector(v: &DVector<f64>) -> Result<Self, AppError> {
        if v.len() != Self::LEN {
            return Err(AppError::invalid_config(format!(
                "Expected {} weights (bias + slope), got {}.",
                Self::LEN,
                v.len()
            )));
        }
        Ok(Self::new(v[0], v[1]))
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn norm(&self) -> f64 {
        self.intercept.hypot(self.slope)
    }

    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope.is_finite()
    }

    /// Euclidean distance to another weight vector.
    pub fn distance(&self, other: &WeightVector) -> f64 {
        (self.intercept - other.intercept).hypot(self.slope - other.slope)
    }
}

impl std::fmt::Display for WeightVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.intercept, self.slope)
    }
}

/// Weight snapshots recorded by one optimizer run.
///
/// Index 0 is the initial guess; index `i` holds the weights after `i` steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConvergenceHistory {
    entries: Vec<WeightVector>,
}

impl ConvergenceHistory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, w: WeightVector) {
        self.entries.push(w);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, iteration: usize) -> Option<&WeightVector> {
        self.entries.get(iteration)
    }

    pub fn first(&self) -> Option<&WeightVector> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&WeightVector> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightVector> {
        self.entries.iter()
    }

    /// Intercept sequence, aligned with [`Self::slopes`].
    pub fn intercepts(&self) -> Vec<f64> {
        self.entries.iter().map(|w| w.intercept).collect()
    }

    pub fn slopes(&self) -> Vec<f64> {
        self.entries.iter().map(|w| w.slope).collect()
    }
}

impl<'a> IntoIterator for &'a ConvergenceHistory {
    type Item = &'a WeightVector;
    type IntoIter = std::slice::Iter<'a, WeightVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One solver's answer, with the trajectory when the solver is iterative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub solver: String,
    pub weights: WeightVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<ConvergenceHistory>,
}

/// Settings for synthetic data generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub n_samples: usize,
    pub seed: u64,
    /// Generating weights (`y = intercept + slope·x + noise`).
    pub truth: WeightVector,
    /// Features are drawn uniformly from `[0, x_scale)`.
    pub x_scale: f64,
    /// Standard deviation of the Gaussian target noise.
    pub noise_std: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            seed: 123,
            truth: WeightVector::new(17.0, 2.43),
            x_scale: 2.0,
            noise_std: 1.0,
        }
    }
}

/// Settings for one gradient descent run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GdConfig {
    pub initial: WeightVector,
    pub learning_rate: f64,
    pub n_iter: usize,
}

impl Default for GdConfig {
    fn default() -> Self {
        Self {
            initial: WeightVector::new(-94.0, 18.2),
            learning_rate: 0.15,
            n_iter: 100,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dataset: DatasetConfig,
    pub gd: GdConfig,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub svg: Option<PathBuf>,
    pub export_history: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// A saved run summary (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub generated: String,
    pub dataset: DatasetConfig,
    pub gd: GdConfig,
    pub estimates: Vec<Estimate>,
}

impl RunFile {
    /// The first estimate that carries a convergence history.
    pub fn history(&self) -> Option<&ConvergenceHistory> {
        self.estimates.iter().find_map(|e| e.history.as_ref())
    }
}
