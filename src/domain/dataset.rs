//! The immutable design matrix / target pair every solver reads.

use nalgebra::{DMatrix, DVector};

use crate::error::{AppError, ErrorKind};

/// N samples with the bias column already in place.
///
/// Row `i` of `features` is `[1.0, x_i]` and `targets[i]` is `y_i`.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: DMatrix<f64>,
    targets: DVector<f64>,
}

impl Dataset {
    /// Build from raw feature and target values, prepending the bias column.
    pub fn from_samples(xs: &[f64], ys: &[f64]) -> Result<Self, AppError> {
        if xs.len() != ys.len() {
            return Err(AppError::new(
                ErrorKind::Data,
                format!("Feature/target length mismatch: {} vs {}.", xs.len(), ys.len()),
            ));
        }
        let features = DMatrix::from_fn(xs.len(), 2, |r, c| if c == 0 { 1.0 } else { xs[r] });
        Self::from_design(features, DVector::from_column_slice(ys))
    }

    /// Build from an explicit design matrix.
    ///
    /// The matrix may have any column count; solvers that need exactly the
    /// bias + slope layout check it themselves.
    pub fn from_design(features: DMatrix<f64>, targets: DVector<f64>) -> Result<Self, AppError> {
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(AppError::new(ErrorKind::Data, "Dataset must contain at least one sample."));
        }
        if features.nrows() != targets.len() {
            return Err(AppError::new(
                ErrorKind::Data,
                format!(
                    "Design matrix has {} rows but there are {} targets.",
                    features.nrows(),
                    targets.len()
                ),
            ));
        }
        Ok(Self { features, targets })
    }

    pub fn features(&self) -> &DMatrix<f64> {
        &self.features
    }

    pub fn targets(&self) -> &DVector<f64> {
        &self.targets
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Column count of the design matrix (bias included).
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// The raw feature column (second column), if present.
    pub fn xs(&self) -> Option<Vec<f64>> {
        (self.n_features() >= 2).then(|| self.features.column(1).iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_samples_prepends_bias() {
        let ds = Dataset::from_samples(&[0.5, 1.5], &[3.0, 4.0]).unwrap();
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.features()[(0, 0)], 1.0);
        assert_eq!(ds.features()[(1, 0)], 1.0);
        assert_eq!(ds.features()[(1, 1)], 1.5);
        assert_eq!(ds.xs(), Some(vec![0.5, 1.5]));
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        let err = Dataset::from_samples(&[], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);

        let err = Dataset::from_samples(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
