//! Batch driver: read, minify, write, report

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::BatchResult;
use super::types::{AssetKind, BatchOutcome, ReportEntry};
use crate::config::BatchConfig;

/// Behavior switches for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and report, but write nothing.
    pub dry_run: bool,
    /// Emit one JSON document instead of the plain report lines.
    pub json: bool,
}

/// Minify every configured asset in list order and print the report.
///
/// Files are processed strictly sequentially; each one moves straight from
/// unprocessed to minified or skipped. A missing input prints a notice and
/// is skipped. Read and write failures are not recovered; they abort the
/// run. The collected outcomes are returned for callers that want them, the
/// stdout report is the primary product.
pub fn run_batch(config: &BatchConfig, options: RunOptions) -> BatchResult<Vec<BatchOutcome>> {
    let mut outcomes = Vec::new();

    if options.dry_run && !options.json {
        println!("Dry run mode - no files will be written");
    }

    for kind in [AssetKind::Css, AssetKind::Js] {
        process_kind(kind, config, options, &mut outcomes)?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        println!();
        println!("Minification complete!");
    }

    Ok(outcomes)
}

fn process_kind(
    kind: AssetKind,
    config: &BatchConfig,
    options: RunOptions,
    outcomes: &mut Vec<BatchOutcome>,
) -> BatchResult<()> {
    let dir = config.dir_for(kind);
    debug!("processing {} assets in {}", kind.as_str(), dir.display());

    for name in config.files_for(kind) {
        let path = dir.join(name);
        if !path.exists() {
            if !options.json {
                println!("{} not found", name);
            }
            outcomes.push(BatchOutcome::Missing { name: name.clone() });
            continue;
        }

        let entry = minify_file(kind, name, &path, options.dry_run)?;
        if !options.json {
            println!("{}", entry);
        }
        outcomes.push(BatchOutcome::Minified(entry));
    }

    Ok(())
}

fn minify_file(kind: AssetKind, name: &str, path: &Path, dry_run: bool) -> BatchResult<ReportEntry> {
    let content = fs::read_to_string(path)?;
    let minified = kind.minify(&content);

    // Sibling path in the same directory, `.ext` -> `.min.ext`.
    let min_path = path.with_file_name(kind.min_filename(name));
    if dry_run {
        debug!("dry run, would write {}", min_path.display());
    } else {
        fs::write(&min_path, &minified)?;
        debug!("wrote {}", min_path.display());
    }

    Ok(ReportEntry::new(
        name,
        content.chars().count(),
        minified.chars().count(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(root: &Path, css_files: &[&str], js_files: &[&str]) -> BatchConfig {
        BatchConfig {
            root: root.to_string_lossy().to_string(),
            css_dir: "css".to_string(),
            js_dir: "js".to_string(),
            css_files: css_files.iter().map(|s| s.to_string()).collect(),
            js_files: js_files.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn write_asset(root: &Path, dir: &str, name: &str, content: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_minifies_existing_files() {
        let tmp = TempDir::new().unwrap();
        write_asset(tmp.path(), "css", "style.css", "a {  color : red ;  }");
        write_asset(tmp.path(), "js", "main.js", "// comment\nvar x = 1;");

        let config = test_config(tmp.path(), &["style.css"], &["main.js"]);
        let outcomes = run_batch(&config, RunOptions::default()).unwrap();

        assert_eq!(outcomes.len(), 2);
        let css_out = fs::read_to_string(tmp.path().join("css/style.min.css")).unwrap();
        assert_eq!(css_out, "a{color:red}");
        let js_out = fs::read_to_string(tmp.path().join("js/main.min.js")).unwrap();
        assert_eq!(js_out, "var x=1;");
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_asset(tmp.path(), "css", "style.css", "a{x:y}");

        let config = test_config(tmp.path(), &["style.css", "absent.css"], &[]);
        let outcomes = run_batch(&config, RunOptions::default()).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(&outcomes[0], BatchOutcome::Minified(_)));
        assert!(
            matches!(&outcomes[1], BatchOutcome::Missing { name } if name == "absent.css")
        );
        // No output file for the missing input.
        assert!(!tmp.path().join("css/absent.min.css").exists());
        // Processing continued past the missing file.
        assert!(tmp.path().join("css/style.min.css").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        write_asset(tmp.path(), "css", "style.css", "a { color: red; }");

        let config = test_config(tmp.path(), &["style.css"], &[]);
        let options = RunOptions {
            dry_run: true,
            json: false,
        };
        let outcomes = run_batch(&config, options).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(&outcomes[0], BatchOutcome::Minified(_)));
        assert!(!tmp.path().join("css/style.min.css").exists());
    }

    #[test]
    fn test_empty_input_reports_zero_reduction() {
        let tmp = TempDir::new().unwrap();
        write_asset(tmp.path(), "css", "empty.css", "");

        let config = test_config(tmp.path(), &["empty.css"], &[]);
        let outcomes = run_batch(&config, RunOptions::default()).unwrap();

        match &outcomes[0] {
            BatchOutcome::Minified(entry) => {
                assert_eq!(entry.original_size, 0);
                assert_eq!(entry.minified_size, 0);
                assert_eq!(entry.reduction_percent, 0.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        // The empty minified sibling is still written.
        assert!(tmp.path().join("css/empty.min.css").exists());
    }

    #[test]
    fn test_overwrites_existing_min_file() {
        let tmp = TempDir::new().unwrap();
        write_asset(tmp.path(), "js", "main.js", "var a = 1;");
        write_asset(tmp.path(), "js", "main.min.js", "stale content");

        let config = test_config(tmp.path(), &[], &["main.js"]);
        run_batch(&config, RunOptions::default()).unwrap();

        let out = fs::read_to_string(tmp.path().join("js/main.min.js")).unwrap();
        assert_eq!(out, "var a=1;");
    }

    #[test]
    fn test_report_sizes_are_character_counts() {
        let tmp = TempDir::new().unwrap();
        let content = "a {  color : red ;  }";
        write_asset(tmp.path(), "css", "style.css", content);

        let config = test_config(tmp.path(), &["style.css"], &[]);
        let outcomes = run_batch(&config, RunOptions::default()).unwrap();

        match &outcomes[0] {
            BatchOutcome::Minified(entry) => {
                assert_eq!(entry.original_size, content.chars().count());
                assert_eq!(entry.minified_size, "a{color:red}".chars().count());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
