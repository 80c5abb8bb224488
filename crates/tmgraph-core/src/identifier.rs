//! Node identifiers for the dependency graph.
//!
//! This module provides identifier escaping for quoted graph identifiers and
//! the [`SurroundIds`] allocator for synthetic begin/end nodes.

use std::fmt;

/// Node name standing for the grammar's top-level scope.
pub const SELF_NODE: &str = "$self";

/// Prefix of synthesized surround node ids.
const SURROUND_PREFIX: &str = "__surround";

/// Escapes an identifier for embedding in a double-quoted graph string.
///
/// Backslashes are doubled first, then double quotes are backslash-escaped.
/// Doing it the other way round would double the backslashes introduced
/// for the quotes.
///
/// # Examples
///
/// ```
/// use tmgraph_core::identifier::escape;
///
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape(r#"a"b"#), r#"a\"b"#);
/// assert_eq!(escape(r"a\b"), r"a\\b");
/// ```
pub fn escape(identifier: &str) -> String {
    identifier.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Allocator of synthetic surround node ids (`__surround0`, `__surround1`, ...).
///
/// One allocator belongs to one graph build, so repeated builds of the same
/// grammar produce the same ids.
///
/// # Examples
///
/// ```
/// use tmgraph_core::identifier::SurroundIds;
///
/// let mut ids = SurroundIds::new();
/// assert_eq!(ids.next_id().to_string(), "__surround0");
/// assert_eq!(ids.next_id().to_string(), "__surround1");
/// ```
#[derive(Debug, Default)]
pub struct SurroundIds {
    next: usize,
}

impl SurroundIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id. Ids are never reused.
    pub fn next_id(&mut self) -> SurroundId {
        let id = SurroundId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids allocated so far.
    pub fn allocated(&self) -> usize {
        self.next
    }
}

/// A synthesized node id standing in for one begin/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurroundId(usize);

impl fmt::Display for SurroundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SURROUND_PREFIX}{}", self.0)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Reverses [`escape`]; only used to check that no information is lost.
    fn unescape(escaped: &str) -> String {
        let mut out = String::with_capacity(escaped.len());
        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn check_escape_is_reversible(input: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(unescape(&escape(input)), input);
        Ok(())
    }

    fn check_no_bare_quotes(input: &str) -> Result<(), TestCaseError> {
        let escaped = escape(input);
        let mut backslashes = 0usize;
        for c in escaped.chars() {
            match c {
                '\\' => backslashes += 1,
                '"' => {
                    prop_assert!(backslashes % 2 == 1, "bare quote in `{escaped}`");
                    backslashes = 0;
                }
                _ => backslashes = 0,
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn escape_is_reversible(input in ".*") {
            check_escape_is_reversible(&input)?;
        }

        #[test]
        fn escape_leaves_no_bare_quotes(input in r#"[a-z\\"]{0,20}"#) {
            check_no_bare_quotes(&input)?;
        }

        #[test]
        fn escape_is_identity_on_safe_text(input in "[a-zA-Z0-9_.#$ -]{0,30}") {
            prop_assert_eq!(escape(&input), input);
        }
    }
}
