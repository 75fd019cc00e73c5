//! Mean-squared error and its gradient for the linear model.

use nalgebra::DVector;

use crate::domain::Dataset;

/// `Xw − y` for the whole dataset.
fn residuals(dataset: &Dataset, w: &DVector<f64>) -> DVector<f64> {
    dataset.features() * w - dataset.targets()
}

/// `(1/N) · ‖Xw − y‖²`.
pub fn mse(dataset: &Dataset, w: &DVector<f64>) -> f64 {
    residuals(dataset, w).norm_squared() / dataset.n_samples() as f64
}

/// Batch gradient of the MSE: `(2/N) · Xᵗ(Xw − y)`.
pub fn mse_gradient(dataset: &Dataset, w: &DVector<f64>) -> DVector<f64> {
    let r = residuals(dataset, w);
    dataset.features().tr_mul(&r) * (2.0 / dataset.n_samples() as f64)
}
