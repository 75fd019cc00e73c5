//! Data sources.
//!
//! Only synthetic data for now: a seeded noisy line (`sample`).

pub mod sample;

pub use sample::{DatasetStats, compute_stats, generate_dataset, generate_seeded};
