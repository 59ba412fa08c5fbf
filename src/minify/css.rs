//! CSS minification passes

use regex::Regex;

/// Strip comments and collapse whitespace in a CSS source string.
///
/// The substitutions run in a fixed order; the punctuation passes rely on
/// the whitespace runs already being collapsed to single spaces. Any input
/// is accepted and transformed best-effort, including malformed CSS.
///
/// An unterminated `/*` comment is left in place: the comment pattern
/// requires a closing `*/`.
pub fn minify_css(text: &str) -> String {
    // Shortest-span comment match: stops at the first `*/`, so adjacent
    // comments are removed separately rather than merged into one block.
    let comment_re = Regex::new(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap();
    let mut css = comment_re.replace_all(text, "").to_string();

    let passes = [
        (r"\s+", " "),
        (r"\s*\{\s*", "{"),
        (r"\s*\}\s*", "}"),
        (r"\s*;\s*", ";"),
        (r"\s*,\s*", ","),
        (r"\s*:\s*", ":"),
        // Elide a trailing semicolon directly before a close brace.
        (r";\s*\}", "}"),
    ];

    for (pattern, replacement) in passes {
        let re = Regex::new(pattern).unwrap();
        css = re.replace_all(&css, replacement).to_string();
    }

    css.trim().to_string()
}
