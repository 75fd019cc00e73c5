//! ASCII plotting of the gradient descent trajectory.
//!
//! Two stacked panels (intercept, then slope) over iteration number. Each
//! panel shows:
//! - the estimate per iteration: `*` line
//! - the true generating value: `-` horizontal line
//!
//! Fixed-size grid and deterministic output, so golden tests stay stable.

use crate::domain::{ConvergenceHistory, WeightVector};
use crate::plot::{INTERCEPT_LABEL, SLOPE_LABEL, TITLE, panel_range};

/// Render both panels for a history against the true weights.
///
/// `height` is per panel.
pub fn render_convergence_ascii(
    history: &ConvergenceHistory,
    truth: &WeightVector,
    width: usize,
    height: usize,
) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&render_panel(INTERCEPT_LABEL, &history.intercepts(), truth.intercept, width, height));
    out.push_str(&render_panel(SLOPE_LABEL, &history.slopes(), truth.slope, width, height));
    out
}

fn render_panel(label: &str, series: &[f64], truth: f64, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = panel_range(series, truth);
    let last_iter = series.len().saturating_sub(1);

    let mut grid = vec![vec![' '; width]; height];

    // Trajectory first so the reference line only fills the gaps.
    let mut prev: Option<(usize, usize)> = None;
    for (i, &y) in series.iter().enumerate() {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let x = map_x(i, last_iter, width);
        let yy = map_y(y, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(&mut grid, x0, y0, x, yy, '*'),
            None => grid[yy][x] = '*',
        }
        prev = Some((x, yy));
    }

    let truth_row = map_y(truth, y_min, y_max, height);
    for cell in grid[truth_row].iter_mut() {
        if *cell == ' ' {
            *cell = '-';
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{label} | iter=[0, {last_iter}] | y=[{y_min:.2}, {y_max:.2}] | true={truth:.4}\n"
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out
}

fn map_x(i: usize, last_iter: usize, width: usize) -> usize {
    if last_iter == 0 {
        return 0;
    }
    let u = i as f64 / last_iter as f64;
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish); only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
