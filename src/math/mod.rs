//! Mathematical utilities: loss surface, normal equation and least squares.

pub mod loss;
pub mod normal;
pub mod ols;

pub use loss::*;
pub use normal::*;
pub use ols::*;
