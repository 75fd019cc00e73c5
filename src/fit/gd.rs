//! Batch gradient descent on the mean-squared-error surface.
//!
//! Every step uses the full dataset:
//!
//! ```text
//! g = (2/N) · Xᵗ(Xw − y)
//! w ← w − η·g
//! ```
//!
//! The run length is fixed. There is no convergence test and no clamping, so
//! an oversized `η` simply produces huge (possibly non-finite) weights.

use nalgebra::DVector;

use crate::domain::{ConvergenceHistory, Dataset, WeightVector};
use crate::error::AppError;
use crate::math::mse_gradient;

/// An optimizer bound to one dataset for one run.
///
/// A value of this type only exists after [`GradientDescent::initialize`]
/// accepted the configuration.
#[derive(Debug, Clone)]
pub struct GradientDescent<'a> {
    dataset: &'a Dataset,
    weights: DVector<f64>,
    learning_rate: f64,
    n_iter: usize,
    iteration: usize,
    history: ConvergenceHistory,
}

/// Final weights plus the full trajectory of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GdOutcome {
    pub weights: WeightVector,
    pub history: ConvergenceHistory,
}

impl<'a> GradientDescent<'a> {
    /// Validate the run settings and record `w0` as history entry 0.
    pub fn initialize(
        w0: WeightVector,
        dataset: &'a Dataset,
        learning_rate: f64,
        n_iter: usize,
    ) -> Result<Self, AppError> {
        if n_iter < 1 {
            return Err(AppError::invalid_config("Iteration count must be >= 1."));
        }
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(AppError::invalid_config(format!(
                "Learning rate must be a positive finite number, got {learning_rate}."
            )));
        }
        if dataset.n_features() != WeightVector::LEN {
            return Err(AppError::invalid_config(format!(
                "Initial weights have {} components but the design matrix has {} columns.",
                WeightVector::LEN,
                dataset.n_features()
            )));
        }

        let mut history = ConvergenceHistory::with_capacity(n_iter);
        history.push(w0);

        log::debug!("gradient descent: w0={w0} eta={learning_rate} n_iter={n_iter}");

        Ok(Self {
            dataset,
            weights: w0.to_vector(),
            learning_rate,
            n_iter,
            iteration: 1,
            history,
        })
    }

    /// One full-batch update; appends the new weights to the history.
    ///
    /// Once the history holds `n_iter` entries this is a no-op returning
    /// `false`, so manual stepping never overruns the configured length.
    pub fn step(&mut self) -> bool {
        if self.history.len() >= self.n_iter {
            return false;
        }
        let gradient = mse_gradient(self.dataset, &self.weights);
        self.weights.axpy(-self.learning_rate, &gradient, 1.0);
        self.history.push(self.current_weights());
        self.iteration += 1;
        true
    }

    /// Step until the history holds `n_iter` entries.
    pub fn run(mut self) -> GdOutcome {
        while self.step() {}

        let weights = self.current_weights();
        if !weights.is_finite() {
            log::warn!(
                "gradient descent ended with non-finite weights after {} iterations (eta={})",
                self.n_iter,
                self.learning_rate
            );
        }

        GdOutcome {
            weights,
            history: self.history,
        }
    }

    pub fn current_weights(&self) -> WeightVector {
        WeightVector::new(self.weights[0], self.weights[1])
    }

    /// Number of history entries recorded so far (1 right after initialize).
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn history(&self) -> &ConvergenceHistory {
        &self.history
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }
}
