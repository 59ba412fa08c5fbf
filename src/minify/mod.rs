//! Regex-driven source minification
//!
//! This module provides best-effort textual minification of CSS and
//! JavaScript: comments are stripped and whitespace collapsed through an
//! ordered sequence of pattern substitutions. Nothing is parsed and output
//! syntax is never validated, which keeps the transforms safe to run on any
//! string but only sensible on known, hand-authored source files.

mod css;
mod js;

pub use css::minify_css;
pub use js::minify_js;
