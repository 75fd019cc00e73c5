//! Library least-squares solve.
//!
//! ```text
//! minimize ‖Xβ − y‖²
//! ```
//!
//! This is the "off the shelf" estimator the other two are compared against:
//! nalgebra's SVD solve on the design matrix itself, with no intercept
//! handling of its own (the bias column already carries the intercept).
//!
//! SVD is used rather than QR because the design matrix is tall (N × 2) and
//! nalgebra's `QR::solve` only handles square systems.

use nalgebra::{DMatrix, DVector};

use crate::error::{AppError, ErrorKind};

/// Solve a least squares problem using SVD.
///
/// Tolerances are tried from strict to loose; the first finite solution wins.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, AppError> {
    if x.nrows() != y.len() {
        return Err(AppError::new(
            ErrorKind::Data,
            format!("Least squares shape mismatch: {} rows vs {} targets.", x.nrows(), y.len()),
        ));
    }

    let svd = x.clone().svd(true, true);

    for &tol in &[1e-10, 1e-8, 1e-6] {
        match svd.solve(y, tol) {
            Ok(beta) if beta.iter().all(|v| v.is_finite()) => return Ok(beta),
            Ok(_) => log::debug!("least squares at tol={tol:e} produced non-finite weights"),
            Err(e) => log::debug!("least squares at tol={tol:e} failed: {e}"),
        }
    }

    Err(AppError::new(
        ErrorKind::Numerical,
        "Least squares solve did not produce finite weights.",
    ))
}
