//! The three estimators behind one interface.
//!
//! The pipeline only sees `dyn Solver`, so adding or dropping an estimator
//! does not touch the reporting code.

use crate::domain::{Dataset, Estimate, GdConfig, WeightVector};
use crate::error::AppError;
use crate::fit::gd::GradientDescent;
use crate::math::{normal_equation, solve_least_squares};

/// Given a dataset, produce a weight estimate.
pub trait Solver {
    /// Human-readable label for terminal output.
    fn name(&self) -> &str;

    fn fit(&self, dataset: &Dataset) -> Result<Estimate, AppError>;
}

/// Closed form `pinv(XᵗX) Xᵗy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalEquation;

impl Solver for NormalEquation {
    fn name(&self) -> &str {
        "Normal equation"
    }

    fn fit(&self, dataset: &Dataset) -> Result<Estimate, AppError> {
        let w = normal_equation(dataset)?;
        Ok(Estimate {
            solver: self.name().to_string(),
            weights: WeightVector::from_vector(&w)?,
            history: None,
        })
    }
}

/// nalgebra's SVD least-squares solve on the design matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl Solver for LeastSquares {
    fn name(&self) -> &str {
        "Least squares"
    }

    fn fit(&self, dataset: &Dataset) -> Result<Estimate, AppError> {
        let w = solve_least_squares(dataset.features(), dataset.targets())?;
        Ok(Estimate {
            solver: self.name().to_string(),
            weights: WeightVector::from_vector(&w)?,
            history: None,
        })
    }
}

/// Fixed-length batch gradient descent; the only solver with a trajectory.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescentSolver {
    pub config: GdConfig,
}

impl GradientDescentSolver {
    pub fn new(config: GdConfig) -> Self {
        Self { config }
    }
}

impl Solver for GradientDescentSolver {
    fn name(&self) -> &str {
        "Gradient descent"
    }

    fn fit(&self, dataset: &Dataset) -> Result<Estimate, AppError> {
        let outcome = GradientDescent::initialize(
            self.config.initial,
            dataset,
            self.config.learning_rate,
            self.config.n_iter,
        )?
        .run();

        Ok(Estimate {
            solver: self.name().to_string(),
            weights: outcome.weights,
            history: Some(outcome.history),
        })
    }
}

/// The standard comparison line-up, in report order.
pub fn default_solvers(gd: GdConfig) -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(NormalEquation),
        Box::new(LeastSquares),
        Box::new(GradientDescentSolver::new(gd)),
    ]
}

/// Run every solver against the same dataset.
pub fn fit_all(solvers: &[Box<dyn Solver>], dataset: &Dataset) -> Result<Vec<Estimate>, AppError> {
    solvers
        .iter()
        .map(|s| -> Result<Estimate, AppError> {
            let est = s.fit(dataset)?;
            log::debug!("{}: {}", est.solver, est.weights);
            Ok(est)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetConfig;
    use crate::math::mse;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn closed_form_beats_random_perturbations() {
        let ds = crate::data::generate_seeded(&DatasetConfig::default()).unwrap();
        let best = NormalEquation.fit(&ds).unwrap().weights;
        let best_mse = mse(&ds, &best.to_vector());

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let scale = 10f64.powi(rng.gen_range(-4..=1));
            let candidate = WeightVector::new(
                best.intercept + scale * rng.gen_range(-1.0..1.0),
                best.slope + scale * rng.gen_range(-1.0..1.0),
            );
            let candidate_mse = mse(&ds, &candidate.to_vector());
            assert!(
                best_mse <= candidate_mse + 1e-12,
                "{candidate} has lower MSE ({candidate_mse}) than {best} ({best_mse})"
            );
        }
    }

    #[test]
    fn closed_form_and_library_agree() {
        let ds = crate::data::generate_seeded(&DatasetConfig::default()).unwrap();
        let a = NormalEquation.fit(&ds).unwrap().weights;
        let b = LeastSquares.fit(&ds).unwrap().weights;
        assert!(a.distance(&b) < 1e-8, "{a} vs {b}");
    }

    #[test]
    fn fit_all_keeps_order_and_only_gd_has_history() {
        let ds = crate::data::generate_seeded(&DatasetConfig {
            n_samples: 200,
            ..DatasetConfig::default()
        })
        .unwrap();
        let gd = GdConfig::default();
        let estimates = fit_all(&default_solvers(gd), &ds).unwrap();

        let names: Vec<&str> = estimates.iter().map(|e| e.solver.as_str()).collect();
        assert_eq!(names, ["Normal equation", "Least squares", "Gradient descent"]);
        assert!(estimates[0].history.is_none());
        assert!(estimates[1].history.is_none());
        assert_eq!(estimates[2].history.as_ref().map(|h| h.len()), Some(gd.n_iter));
    }

    #[test]
    fn gradient_descent_solver_propagates_config_errors() {
        let ds = crate::data::generate_seeded(&DatasetConfig::default()).unwrap();
        let bad = GradientDescentSolver::new(GdConfig {
            n_iter: 0,
            ..GdConfig::default()
        });
        assert!(bad.fit(&ds).is_err());
    }
}
