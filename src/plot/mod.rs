//! Convergence charts: terminal (`ascii`) and file (`svg`).
//!
//! Both render the same two panels and share the axis conventions below.

pub mod ascii;
pub mod svg;

pub use ascii::render_convergence_ascii;
pub use svg::write_convergence_svg;

pub const TITLE: &str = "Gradient Descent -- weight convergence";
pub const INTERCEPT_LABEL: &str = "Estimated intercept";
pub const SLOPE_LABEL: &str = "Estimated x0 slope";

/// Margin added above and below the data in each panel.
const PANEL_PAD: f64 = 5.0;

/// Y range for one panel: the finite series values and the true value, padded.
pub fn panel_range(series: &[f64], truth: f64) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((truth, truth), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (lo - PANEL_PAD, hi + PANEL_PAD)
}
