//! Reporting utilities: per-solver losses and gradient descent diagnostics.
//!
//! Nothing here renders; see `format` for text and `crate::plot` for charts.

use crate::domain::{ConvergenceHistory, Dataset, Estimate, WeightVector};
use crate::math::mse;

pub mod format;

pub use format::*;

/// One line of the solver comparison.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub solver: String,
    pub weights: WeightVector,
    pub mse: f64,
}

/// How the iterative run relates to the analytic optimum.
#[derive(Debug, Clone)]
pub struct GdDiagnostics {
    pub iterations: usize,
    pub initial_mse: f64,
    pub final_mse: f64,
    /// Euclidean distance between the final weights and the reference solution.
    pub distance_to_reference: f64,
}

/// Evaluate every estimate's MSE on the dataset.
pub fn compare(dataset: &Dataset, estimates: &[Estimate]) -> Vec<ComparisonRow> {
    estimates
        .iter()
        .map(|e| ComparisonRow {
            solver: e.solver.clone(),
            weights: e.weights,
            mse: mse(dataset, &e.weights.to_vector()),
        })
        .collect()
}

/// Diagnostics for a history, measured against `reference` (normally the closed form).
pub fn gd_diagnostics(
    dataset: &Dataset,
    history: &ConvergenceHistory,
    reference: &WeightVector,
) -> Option<GdDiagnostics> {
    let first = history.first()?;
    let last = history.last()?;
    Some(GdDiagnostics {
        iterations: history.len(),
        initial_mse: mse(dataset, &first.to_vector()),
        final_mse: mse(dataset, &last.to_vector()),
        distance_to_reference: last.distance(reference),
    })
}
