//! Command-line parsing for the gradient descent comparison tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gdfit",
    version,
    about = "Fit a noisy line three ways (normal equation, least squares, gradient descent)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate data, fit all solvers, print the comparison and plot convergence.
    Fit(FitArgs),
    /// Plot the convergence history from a previously exported run JSON.
    Plot(PlotArgs),
}

/// Options for a full fit run.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Number of synthetic samples.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub samples: usize,

    /// Random seed for sample generation.
    #[arg(long, env = "GDFIT_SEED", default_value_t = 123)]
    pub seed: u64,

    /// Intercept of the generating line.
    #[arg(long, default_value_t = 17.0, allow_hyphen_values = true)]
    pub true_intercept: f64,

    /// Slope of the generating line.
    #[arg(long, default_value_t = 2.43, allow_hyphen_values = true)]
    pub true_slope: f64,

    /// Features are drawn uniformly from [0, x_scale).
    #[arg(long, default_value_t = 2.0)]
    pub x_scale: f64,

    /// Standard deviation of the Gaussian target noise.
    #[arg(long, default_value_t = 1.0)]
    pub noise_std: f64,

    /// Starting intercept for gradient descent.
    #[arg(long, default_value_t = -94.0, allow_hyphen_values = true)]
    pub initial_intercept: f64,

    /// Starting slope for gradient descent.
    #[arg(long, default_value_t = 18.2, allow_hyphen_values = true)]
    pub initial_slope: f64,

    /// Learning rate (eta).
    #[arg(long, env = "GDFIT_ETA", default_value_t = 0.15)]
    pub eta: f64,

    /// Number of history entries, including the initial guess.
    #[arg(long, env = "GDFIT_ITERS", default_value_t = 100)]
    pub iters: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height per panel (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,

    /// Also render the convergence chart to an SVG file.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,

    /// Export the gradient descent history to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_history: Option<PathBuf>,

    /// Export the run summary (settings, estimates, history) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `gdfit fit --export-json`.
    #[arg(long, value_name = "JSON")]
    pub run: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height per panel (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,
}
