//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::data::DatasetStats;
use crate::domain::{DatasetConfig, GdConfig, WeightVector};
use crate::report::{ComparisonRow, GdDiagnostics};

const LABEL_WIDTH: usize = 18;

/// Dataset header: generation settings and observed ranges.
pub fn format_dataset_summary(config: &DatasetConfig, stats: &DatasetStats) -> String {
    let mut out = String::new();

    out.push_str("=== gdfit - linear fit comparison ===\n");
    out.push_str(&format!(
        "Sample: n={} | seed={} | x~U[0, {:.2}) | noise_std={:.3}\n",
        config.n_samples, config.seed, config.x_scale, config.noise_std
    ));
    out.push_str(&format!(
        "Data: x=[{:.3}, {:.3}] | y=[{:.2}, {:.2}]\n",
        stats.x_min, stats.x_max, stats.y_min, stats.y_max
    ));

    out
}

/// Side-by-side weights and MSE for each solver, headed by the true weights.
pub fn format_comparison(truth: &WeightVector, rows: &[ComparisonRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<LABEL_WIDTH$} {}\n", "True weights:", truth));
    for row in rows {
        out.push_str(&format!(
            "{:<LABEL_WIDTH$} {:<24} MSE={}\n",
            format!("{}:", row.solver),
            row.weights.to_string(),
            fmt_loss(row.mse)
        ));
    }

    out
}

/// Gradient descent settings and how far the run got.
pub fn format_gd_diagnostics(gd: &GdConfig, diag: &GdDiagnostics, reference_name: &str) -> String {
    let mut out = String::new();

    out.push_str("Gradient descent run:\n");
    out.push_str(&format!(
        "- eta={} | iterations={} | start={}\n",
        gd.learning_rate, diag.iterations, gd.initial
    ));
    out.push_str(&format!(
        "- MSE: {} -> {}\n",
        fmt_loss(diag.initial_mse),
        fmt_loss(diag.final_mse)
    ));
    out.push_str(&format!(
        "- distance to {}: {}\n",
        reference_name.to_lowercase(),
        fmt_loss(diag.distance_to_reference)
    ));

    out
}

fn fmt_loss(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v != 0.0 && (v.abs() >= 1e6 || v.abs() < 1e-4) {
        format!("{v:.4e}")
    } else {
        format!("{v:.4}")
    }
}
