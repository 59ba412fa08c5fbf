//! JavaScript minification passes

use regex::Regex;

/// Strip comments and collapse whitespace in a JavaScript source string.
///
/// `//` comments are removed up to end of line unless the `//` is directly
/// preceded by a `:`, which keeps `http://` URLs inside hand-authored
/// string literals intact. This is a textual heuristic, not a lexer: the
/// pipeline has no awareness of string, template, or regex literals, or of
/// automatic semicolon insertion, so comment-like sequences inside strings
/// are mangled exactly like code. Suitable only for known, hand-authored
/// source files.
///
/// An unterminated `/*` comment is left in place, as in [`minify_css`].
///
/// [`minify_css`]: super::minify_css
pub fn minify_js(text: &str) -> String {
    // `(^|[^:])` stands in for the `(?<!:)` lookbehind, which the regex
    // crate does not support; `${1}` restores the consumed character. A
    // line-leading `//` is removed through the `^` branch.
    let line_comment_re = Regex::new(r"(?m)(^|[^:])//.*$").unwrap();
    let mut js = line_comment_re.replace_all(text, "${1}").to_string();

    let block_comment_re = Regex::new(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap();
    js = block_comment_re.replace_all(&js, "").to_string();

    let passes = [
        (r"\s+", " "),
        (r"\s*\{\s*", "{"),
        (r"\s*\}\s*", "}"),
        (r"\s*;\s*", ";"),
        (r"\s*,\s*", ","),
        (r"\s*=\s*", "="),
    ];

    for (pattern, replacement) in passes {
        let re = Regex::new(pattern).unwrap();
        js = re.replace_all(&js, replacement).to_string();
    }

    js.trim().to_string()
}
