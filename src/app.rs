//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - generates the synthetic dataset
//! - runs all solvers
//! - prints the comparison and convergence plot
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, PlotArgs};
use crate::domain::{DatasetConfig, GdConfig, RunConfig, WeightVector};
use crate::error::{AppError, ErrorKind};

pub mod pipeline;

/// SVG chart size in pixels.
const SVG_SIZE: (u32, u32) = (900, 700);

/// Entry point for the `gdfit` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may supply GDFIT_* defaults; a missing file is fine.
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring unreadable .env file: {e}"),
    }

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_dataset_summary(&config.dataset, &run.stats)
    );
    println!(
        "{}",
        crate::report::format_comparison(&config.dataset.truth, &run.rows)
    );
    println!(
        "{}",
        crate::report::format_gd_diagnostics(&config.gd, &run.diagnostics, &run.reference)
    );

    let history = run
        .history()
        .ok_or_else(|| AppError::new(ErrorKind::Numerical, "Gradient descent history is missing."))?;

    if config.plot {
        let plot = crate::plot::render_convergence_ascii(
            history,
            &config.dataset.truth,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.svg {
        crate::plot::write_convergence_svg(path, history, &config.dataset.truth, SVG_SIZE.0, SVG_SIZE.1)?;
    }
    if let Some(path) = &config.export_history {
        crate::io::write_history_csv(path, history, &run.dataset)?;
    }
    if let Some(path) = &config.export_json {
        let summary = crate::io::build_run_file(&config.dataset, &config.gd, &run.estimates);
        crate::io::write_run_json(path, &summary)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let run = crate::io::read_run_json(&args.run)?;
    let history = run.history().ok_or_else(|| {
        AppError::new(
            ErrorKind::Data,
            format!("Run file '{}' has no convergence history.", args.run.display()),
        )
    })?;

    let plot = crate::plot::render_convergence_ascii(history, &run.dataset.truth, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        dataset: DatasetConfig {
            n_samples: args.samples,
            seed: args.seed,
            truth: WeightVector::new(args.true_intercept, args.true_slope),
            x_scale: args.x_scale,
            noise_std: args.noise_std,
        },
        gd: GdConfig {
            initial: WeightVector::new(args.initial_intercept, args.initial_slope),
            learning_rate: args.eta,
            n_iter: args.iters,
        },
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        svg: args.svg.clone(),
        export_history: args.export_history.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `gdfit` defaults to `gdfit fit`.
///
/// Rules:
/// - `gdfit`                      -> `gdfit fit`
/// - `gdfit --eta 0.1 ...`        -> `gdfit fit --eta 0.1 ...`
/// - `gdfit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if matches!(arg1.as_str(), "fit" | "plot") {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    argv
}
