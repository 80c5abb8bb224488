//! Regex comment stripping.
//!
//! Grammars often write long regexes in free-spacing mode, where `#` starts
//! a comment running to the end of the line. Those comments make poor node
//! labels, so they can be removed from regex nodes before rendering.

use std::sync::LazyLock;

use regex::Regex;

/// Optional whitespace, `#`, then the rest of the line.
static REGEX_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*#.*").expect("comment pattern is a valid regex"));

/// Remove free-spacing comments from regex text.
///
/// This works on the literal text of an already escaped identifier; it does
/// not interpret the regex, so a `#` inside a character class is treated as
/// a comment too.
///
/// # Examples
///
/// ```
/// use tmgraph::uncomment::strip_regex_comments;
///
/// assert_eq!(strip_regex_comments("a # comment"), "a");
/// assert_eq!(strip_regex_comments("no comment"), "no comment");
/// ```
pub fn strip_regex_comments(text: &str) -> String {
    REGEX_COMMENT.replace_all(text, "").into_owned()
}
