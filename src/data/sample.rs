//! Synthetic single-feature regression data.
//!
//! Each sample is drawn as:
//!
//! ```text
//! x ~ U[0, x_scale)
//! y = intercept + slope·x + ε,   ε ~ N(0, noise_std²)
//! ```
//!
//! The RNG is always passed in by the caller, so a seed fully determines the
//! dataset and nothing depends on process-global random state.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{Dataset, DatasetConfig};
use crate::error::{AppError, ErrorKind};

/// Summary of a generated dataset (for terminal output and logs).
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub n_samples: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Generate a dataset from a config, seeding a fresh `StdRng` from `config.seed`.
pub fn generate_seeded(config: &DatasetConfig) -> Result<Dataset, AppError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_dataset(config, &mut rng)
}

/// Generate a dataset using the caller's RNG.
pub fn generate_dataset<R: Rng>(config: &DatasetConfig, rng: &mut R) -> Result<Dataset, AppError> {
    if config.n_samples == 0 {
        return Err(AppError::invalid_config("Sample count must be > 0."));
    }
    if !(config.x_scale.is_finite() && config.x_scale > 0.0) {
        return Err(AppError::invalid_config("Feature scale must be a positive finite number."));
    }
    if !(config.noise_std.is_finite() && config.noise_std >= 0.0) {
        return Err(AppError::invalid_config(format!(
            "Noise std must be a non-negative finite number, got {}.",
            config.noise_std
        )));
    }
    if !config.truth.is_finite() {
        return Err(AppError::invalid_config("True weights must be finite."));
    }

    let noise = Normal::new(0.0, config.noise_std)
        .map_err(|e| AppError::invalid_config(format!("Noise distribution error: {e}")))?;

    let mut xs = Vec::with_capacity(config.n_samples);
    let mut ys = Vec::with_capacity(config.n_samples);
    for _ in 0..config.n_samples {
        let x = config.x_scale * rng.r#gen::<f64>();
        let y = config.truth.predict(x) + noise.sample(rng);
        xs.push(x);
        ys.push(y);
    }

    Dataset::from_samples(&xs, &ys)
}

/// Ranges of the raw feature and the target.
pub fn compute_stats(dataset: &Dataset) -> Result<DatasetStats, AppError> {
    let xs = dataset
        .xs()
        .ok_or_else(|| AppError::new(ErrorKind::Data, "Dataset has no feature column."))?;

    let (x_min, x_max) = min_max(xs.iter().copied());
    let (y_min, y_max) = min_max(dataset.targets().iter().copied());

    if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
        return Err(AppError::new(ErrorKind::Data, "Dataset contains non-finite values."));
    }

    Ok(DatasetStats {
        n_samples: dataset.n_samples(),
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
