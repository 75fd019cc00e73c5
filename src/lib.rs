//! `gd-linfit` library crate.
//!
//! Fits a single-feature linear model three ways (normal equation, library
//! least squares, batch gradient descent) and reports how gradient descent
//! converges toward the analytic optimum.
//!
//! The binary (`gdfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the optimizer and solvers are reusable on their own

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
