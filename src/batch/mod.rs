//! Batch minification of configured site assets
//!
//! The driver walks the configured filename lists per asset class, minifies
//! every file that exists, writes a `.min` sibling next to it, and prints a
//! per-file size report. A missing file is skipped with a notice; it is the
//! only recovered error path.

mod error;
mod runner;
mod types;

pub use error::{BatchError, BatchResult};
pub use runner::{run_batch, RunOptions};
pub use types::{AssetKind, BatchOutcome, ReportEntry};
