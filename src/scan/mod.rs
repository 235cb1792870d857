//! Scan driver: line numbering, per-line checks, failure reporting.
//!
//! - [`Outcome`] / [`LineCheck`] - The pluggable per-line validation seam
//! - [`Scanner`] - Drives a [`ChunkReader`] and assigns global line numbers
//! - [`Report`] / [`LineFailure`] - The failing-line result of a scan
//!
//! [`ChunkReader`]: crate::ChunkReader

mod check;
mod driver;
mod report;

pub use check::{LineCheck, Outcome};
pub use driver::Scanner;
pub use report::{LineFailure, Report};
