//! Read/write run summary JSON files.
//!
//! The summary is the "portable" record of a run:
//! - dataset settings (including the seed, so the data can be regenerated)
//! - gradient descent settings
//! - every solver's estimate, with the full trajectory for gradient descent
//!
//! The schema is defined by `domain::RunFile`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::Local;

use crate::domain::{DatasetConfig, Estimate, GdConfig, RunFile};
use crate::error::{AppError, ErrorKind};

pub const TOOL_NAME: &str = "gdfit";

/// Assemble a summary stamped with the current local time.
pub fn build_run_file(dataset: &DatasetConfig, gd: &GdConfig, estimates: &[Estimate]) -> RunFile {
    RunFile {
        tool: TOOL_NAME.to_string(),
        generated: Local::now().to_rfc3339(),
        dataset: dataset.clone(),
        gd: *gd,
        estimates: estimates.to_vec(),
    }
}

/// Write a run summary JSON file.
pub fn write_run_json(path: &Path, run: &RunFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create run JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, run)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write run JSON: {e}")))?;

    log::info!("wrote run summary to {}", path.display());
    Ok(())
}

/// Read a run summary JSON file.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to open run JSON '{}': {e}", path.display()),
        )
    })?;
    let run: RunFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(ErrorKind::Data, format!("Invalid run JSON: {e}")))?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvergenceHistory, WeightVector};

    #[test]
    fn summary_survives_a_file_round_trip() {
        let mut history = ConvergenceHistory::default();
        history.push(WeightVector::new(-94.0, 18.2));
        history.push(WeightVector::new(12.5, 4.0));

        let estimates = vec![
            Estimate {
                solver: "Normal equation".to_string(),
                weights: WeightVector::new(17.1, 2.4),
                history: None,
            },
            Estimate {
                solver: "Gradient descent".to_string(),
                weights: WeightVector::new(12.5, 4.0),
                history: Some(history.clone()),
            },
        ];
        let run = build_run_file(&DatasetConfig::default(), &GdConfig::default(), &estimates);

        let path = std::env::temp_dir().join(format!("gdfit_run_{}.json", std::process::id()));
        write_run_json(&path, &run).unwrap();
        let back = read_run_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.tool, TOOL_NAME);
        assert_eq!(back.dataset.seed, 123);
        assert_eq!(back.estimates.len(), 2);
        assert!(back.estimates[0].history.is_none());
        assert_eq!(back.history(), Some(&history));
    }

    #[test]
    fn diverged_run_can_be_reloaded() {
        let mut history = ConvergenceHistory::default();
        history.push(WeightVector::new(-94.0, 18.2));
        history.push(WeightVector::new(f64::INFINITY, f64::NAN));
        history.push(WeightVector::new(f64::NEG_INFINITY, 1.5));

        let estimates = vec![Estimate {
            solver: "Gradient descent".to_string(),
            weights: WeightVector::new(f64::NEG_INFINITY, 1.5),
            history: Some(history),
        }];
        let run = build_run_file(&DatasetConfig::default(), &GdConfig::default(), &estimates);

        let path = std::env::temp_dir().join(format!("gdfit_diverged_{}.json", std::process::id()));
        write_run_json(&path, &run).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back = read_run_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(text.contains("\"NaN\""));
        assert!(!text.contains("null"));

        let h = back.history().unwrap();
        assert_eq!(h.len(), 3);
        assert_eq!(*h.first().unwrap(), WeightVector::new(-94.0, 18.2));
        let blown = h.get(1).unwrap();
        assert_eq!(blown.intercept, f64::INFINITY);
        assert!(blown.slope.is_nan());
        assert_eq!(back.estimates[0].weights, WeightVector::new(f64::NEG_INFINITY, 1.5));
    }

    #[test]
    fn finite_weights_stay_json_numbers() {
        let text = serde_json::to_string(&WeightVector::new(17.0, 2.5)).unwrap();
        assert_eq!(text, r#"{"intercept":17.0,"slope":2.5}"#);

        let bad: Result<WeightVector, _> = serde_json::from_str(r#"{"intercept":"abc","slope":1.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn garbage_json_is_a_data_error() {
        let path = std::env::temp_dir().join(format!("gdfit_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_run_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
