//! Type definitions for batch asset processing

use std::fmt;

use serde::Serialize;

use crate::minify::{minify_css, minify_js};

/// Asset class handled by the batch driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    pub fn as_str(&self) -> &str {
        match self {
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }

    fn extension(&self) -> &str {
        match self {
            AssetKind::Css => ".css",
            AssetKind::Js => ".js",
        }
    }

    fn min_extension(&self) -> &str {
        match self {
            AssetKind::Css => ".min.css",
            AssetKind::Js => ".min.js",
        }
    }

    /// Derive the minified sibling filename (`style.css` -> `style.min.css`).
    ///
    /// Substring substitution, matching the sibling-naming contract: every
    /// occurrence of the extension inside the name is rewritten.
    pub fn min_filename(&self, name: &str) -> String {
        name.replace(self.extension(), self.min_extension())
    }

    /// Run the minifier matching this asset class.
    pub fn minify(&self, text: &str) -> String {
        match self {
            AssetKind::Css => minify_css(text),
            AssetKind::Js => minify_js(text),
        }
    }
}

/// Size report for one minified file.
///
/// Sizes are character counts of the input and output strings.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub original_size: usize,
    pub minified_size: usize,
    pub reduction_percent: f64,
}

impl ReportEntry {
    /// Build an entry with the derived reduction percentage.
    ///
    /// An empty input reports 0.0 instead of dividing by zero.
    pub fn new(name: impl Into<String>, original_size: usize, minified_size: usize) -> Self {
        let reduction_percent = if original_size == 0 {
            0.0
        } else {
            (original_size as f64 - minified_size as f64) / original_size as f64 * 100.0
        };

        Self {
            name: name.into(),
            original_size,
            minified_size,
            reduction_percent,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} bytes ({:.1}% reduction)",
            self.name, self.original_size, self.minified_size, self.reduction_percent
        )
    }
}

/// Terminal state of one candidate file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Minified(ReportEntry),
    Missing { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_strings() {
        assert_eq!(AssetKind::Css.as_str(), "css");
        assert_eq!(AssetKind::Js.as_str(), "js");
    }

    #[test]
    fn test_min_filename() {
        assert_eq!(AssetKind::Css.min_filename("style.css"), "style.min.css");
        assert_eq!(AssetKind::Js.min_filename("main.js"), "main.min.js");
    }

    #[test]
    fn test_min_filename_substring_substitution() {
        // The rename is a substring replacement, not extension surgery.
        assert_eq!(AssetKind::Js.min_filename("a.js.js"), "a.min.js.min.js");
    }

    #[test]
    fn test_report_entry_reduction() {
        let entry = ReportEntry::new("style.css", 200, 150);
        assert_eq!(entry.original_size, 200);
        assert_eq!(entry.minified_size, 150);
        assert!((entry.reduction_percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_entry_empty_input() {
        let entry = ReportEntry::new("empty.css", 0, 0);
        assert_eq!(entry.reduction_percent, 0.0);
    }

    #[test]
    fn test_report_entry_display() {
        let entry = ReportEntry::new("main.js", 300, 200);
        assert_eq!(
            entry.to_string(),
            "main.js: 300 -> 200 bytes (33.3% reduction)"
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let minified = BatchOutcome::Minified(ReportEntry::new("style.css", 10, 5));
        let json = serde_json::to_string(&minified).unwrap();
        assert!(json.contains(r#""status":"minified""#));
        assert!(json.contains(r#""name":"style.css""#));

        let missing = BatchOutcome::Missing {
            name: "gone.css".to_string(),
        };
        let json = serde_json::to_string(&missing).unwrap();
        assert!(json.contains(r#""status":"missing""#));
    }
}
