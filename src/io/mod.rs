//! Input/output helpers.
//!
//! - trajectory CSV export (`export`)
//! - run summary JSON read/write (`summary`)

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
