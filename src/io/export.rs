//! Export the gradient descent trajectory to CSV.
//!
//! One row per history entry, easy to load in spreadsheets or plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{ConvergenceHistory, Dataset};
use crate::error::{AppError, ErrorKind};
use crate::math::mse;

/// Write `iteration,intercept,slope,mse` rows to a CSV file.
pub fn write_history_csv(path: &Path, history: &ConvergenceHistory, dataset: &Dataset) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create history CSV '{}': {e}", path.display()),
        )
    })?;
    let mut out = BufWriter::new(file);

    writeln!(out, "iteration,intercept,slope,mse")
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write history CSV header: {e}")))?;

    for (i, w) in history.iter().enumerate() {
        writeln!(
            out,
            "{},{:.10},{:.10},{:.10}",
            i,
            w.intercept,
            w.slope,
            mse(dataset, &w.to_vector())
        )
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write history CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to flush history CSV: {e}")))?;

    log::info!("wrote {} history rows to {}", history.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeightVector;

    #[test]
    fn csv_has_one_row_per_iteration() {
        let ds = Dataset::from_samples(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        let mut h = ConvergenceHistory::default();
        h.push(WeightVector::new(0.0, 0.0));
        h.push(WeightVector::new(1.0, 2.0));

        let path = std::env::temp_dir().join(format!("gdfit_history_{}.csv", std::process::id()));
        write_history_csv(&path, &h, &ds).unwrap();
        let txt = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "iteration,intercept,slope,mse");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,0.0000000000,0.0000000000,5.0000000000");
        assert_eq!(lines[2], "1,1.0000000000,2.0000000000,0.0000000000");
    }
}
