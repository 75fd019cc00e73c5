//! Shared "fit pipeline" logic.
//!
//! Dataset generation -> every solver -> comparison rows -> GD diagnostics.
//!
//! Front-ends (printing, file exports) only consume `RunOutput`.

use crate::data::{DatasetStats, compute_stats, generate_seeded};
use crate::domain::{ConvergenceHistory, Dataset, Estimate, RunConfig};
use crate::error::{AppError, ErrorKind};
use crate::fit::{Solver, default_solvers, fit_all};
use crate::report::{ComparisonRow, GdDiagnostics, compare, gd_diagnostics};

/// All computed outputs of a single `gdfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub estimates: Vec<Estimate>,
    pub rows: Vec<ComparisonRow>,
    /// Name of the estimate the diagnostics are measured against.
    pub reference: String,
    pub diagnostics: GdDiagnostics,
}

impl RunOutput {
    /// The gradient descent trajectory.
    pub fn history(&self) -> Option<&ConvergenceHistory> {
        self.estimates.iter().find_map(|e| e.history.as_ref())
    }
}

/// Execute the full pipeline with the standard solver line-up.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    run_fit_with_solvers(config, &default_solvers(config.gd))
}

/// Execute the pipeline with an explicit solver list.
///
/// The first solver is the reference for the gradient descent diagnostics, and
/// exactly one solver must produce a history.
pub fn run_fit_with_solvers(config: &RunConfig, solvers: &[Box<dyn Solver>]) -> Result<RunOutput, AppError> {
    // 1) Generate the dataset.
    let dataset = generate_seeded(&config.dataset)?;
    let stats = compute_stats(&dataset)?;
    log::info!(
        "generated {} samples (seed={}, x=[{:.3}, {:.3}])",
        stats.n_samples,
        config.dataset.seed,
        stats.x_min,
        stats.x_max
    );

    // 2) Fit every solver on the same data.
    let estimates = fit_all(solvers, &dataset)?;

    // 3) Compare and diagnose.
    let rows = compare(&dataset, &estimates);
    let reference = estimates
        .first()
        .ok_or_else(|| AppError::invalid_config("No solvers configured."))?;
    let history = estimates
        .iter()
        .find_map(|e| e.history.as_ref())
        .ok_or_else(|| AppError::invalid_config("No iterative solver configured."))?;
    let diagnostics = gd_diagnostics(&dataset, history, &reference.weights)
        .ok_or_else(|| AppError::new(ErrorKind::Numerical, "Gradient descent produced an empty history."))?;
    log::info!(
        "gradient descent finished {} iterations, {:.4e} from {}",
        diagnostics.iterations,
        diagnostics.distance_to_reference,
        reference.solver
    );

    let reference = reference.solver.clone();
    Ok(RunOutput {
        dataset,
        stats,
        estimates,
        rows,
        reference,
        diagnostics,
    })
}
