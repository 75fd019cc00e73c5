//! Closed-form least squares via the normal equation.
//!
//! ```text
//! w = pinv(XᵗX) · Xᵗy
//! ```
//!
//! The Moore–Penrose pseudoinverse is used in place of a hard inverse so a
//! singular `XᵗX` (e.g. a constant feature column) yields the minimum-norm
//! solution instead of an error. For a well-posed problem the two coincide.

use nalgebra::DVector;

use crate::domain::Dataset;
use crate::error::{AppError, ErrorKind};

/// Solve the normal equation for every column of the design matrix.
pub fn normal_equation(dataset: &Dataset) -> Result<DVector<f64>, AppError> {
    let x = dataset.features();
    let xtx = x.tr_mul(x);
    let xty = x.tr_mul(dataset.targets());

    let svd = xtx.svd(true, true);
    let tol = pinv_tolerance(svd.singular_values.max(), dataset.n_features());

    let rank = svd.rank(tol);
    if rank < dataset.n_features() {
        log::warn!(
            "XᵗX is singular (rank {rank} < {}); using the pseudoinverse solution",
            dataset.n_features()
        );
    }

    let pinv = svd
        .pseudo_inverse(tol)
        .map_err(|e| AppError::new(ErrorKind::Numerical, format!("Pseudoinverse failed: {e}")))?;

    Ok(pinv * xty)
}

/// Singular values at or below this are treated as zero.
fn pinv_tolerance(max_singular: f64, dim: usize) -> f64 {
    (max_singular * dim as f64 * f64::EPSILON).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let ds = Dataset::from_samples(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
        let w = normal_equation(&ds).unwrap();
        assert!((w[0] - 1.0).abs() < 1e-10, "intercept {}", w[0]);
        assert!((w[1] - 2.0).abs() < 1e-10, "slope {}", w[1]);
    }

    #[test]
    fn singular_normal_matrix_does_not_fail() {
        // Constant feature: the bias and feature columns coincide.
        let ds = Dataset::from_samples(&[1.0, 1.0, 1.0], &[2.0, 4.0, 6.0]).unwrap();
        let w = normal_equation(&ds).unwrap();

        assert!(w.iter().all(|v| v.is_finite()));
        // Min-norm split of the mean target across the two identical columns.
        assert!((w[0] + w[1] - 4.0).abs() < 1e-8);
        assert!((w[0] - w[1]).abs() < 1e-8);
    }
}
