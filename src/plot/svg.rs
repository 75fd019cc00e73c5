//! Plotters-rendered convergence chart written to an SVG file.
//!
//! Same layout as the terminal plot: intercept on top, slope below, each
//! with a red reference line at the true value.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::domain::{ConvergenceHistory, WeightVector};
use crate::error::{AppError, ErrorKind};
use crate::plot::{INTERCEPT_LABEL, SLOPE_LABEL, TITLE, panel_range};

const X_LABEL: &str = "Number of iterations";

/// Render the two-panel chart to `path`.
pub fn write_convergence_svg(
    path: &Path,
    history: &ConvergenceHistory,
    truth: &WeightVector,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    if history.is_empty() {
        return Err(AppError::new(ErrorKind::Render, "Cannot plot an empty history."));
    }

    let root = SVGBackend::new(path, (width.max(200), height.max(200))).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root.titled(TITLE, ("sans-serif", 20.0).into_font()).map_err(render_err)?;

    let panels = root.split_evenly((2, 1));
    draw_panel(&panels[0], INTERCEPT_LABEL, &history.intercepts(), truth.intercept, None)
        .map_err(render_err)?;
    draw_panel(&panels[1], SLOPE_LABEL, &history.slopes(), truth.slope, Some(X_LABEL))
        .map_err(render_err)?;

    root.present().map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to write chart '{}': {e}", path.display()),
        )
    })?;

    log::info!("wrote convergence chart to {}", path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    y_label: &str,
    series: &[f64],
    truth: f64,
    x_label: Option<&str>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (y_min, y_max) = panel_range(series, truth);
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(y_label).x_labels(10).y_labels(6);
    if let Some(x_label) = x_label {
        mesh.x_desc(x_label);
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(
        series
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (i as f64, v)),
        &BLUE,
    ))?;
    chart.draw_series(LineSeries::new([(0.0, truth), (x_max, truth)], &RED))?;

    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::new(ErrorKind::Render, format!("Chart rendering failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_svg_with_both_panels() {
        let mut h = ConvergenceHistory::default();
        h.push(WeightVector::new(-94.0, 18.2));
        h.push(WeightVector::new(-10.0, 5.0));
        h.push(WeightVector::new(15.0, 2.5));

        let path = std::env::temp_dir().join(format!("gdfit_svg_test_{}.svg", std::process::id()));
        write_convergence_svg(&path, &h, &WeightVector::new(17.0, 2.43), 640, 480).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(svg.contains("<svg"));
        assert!(svg.contains(INTERCEPT_LABEL));
        assert!(svg.contains(SLOPE_LABEL));
    }

    #[test]
    fn empty_history_is_rejected() {
        let path = std::env::temp_dir().join("gdfit_svg_empty.svg");
        let err = write_convergence_svg(&path, &ConvergenceHistory::default(), &WeightVector::new(0.0, 0.0), 640, 480)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Render);
    }
}
