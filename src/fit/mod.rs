//! Weight estimation.
//!
//! Responsibilities:
//!
//! - batch gradient descent with convergence history (`gd`)
//! - a common `Solver` interface over closed form, library and iterative fits (`solver`)

pub mod gd;
pub mod solver;

pub use gd::*;
pub use solver::*;
