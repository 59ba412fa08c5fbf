//! # assetmin
//!
//! A naive textual minifier for a static website's CSS and JavaScript
//! assets. Strips comments and collapses whitespace with ordered regex
//! passes, writes a `.min` sibling per input file, and reports the size
//! reduction.
//!
//! ## Modules
//!
//! - `cli`: Command-line interface definitions
//! - `config`: Configuration management
//! - `minify`: The pure CSS/JS text transformations
//! - `batch`: Batch driver and size reporting

pub mod batch;
pub mod cli;
pub mod config;
pub mod minify;
