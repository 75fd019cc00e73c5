//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the immutable training data (`Dataset`)
//! - weight estimates and optimizer trajectories (`WeightVector`, `ConvergenceHistory`)
//! - run configuration and the saved run summary (`RunConfig`, `RunFile`)

pub mod dataset;
pub mod types;

pub use dataset::*;
pub use types::*;
