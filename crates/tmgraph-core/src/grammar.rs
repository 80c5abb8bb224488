//! TextMate grammar model.
//!
//! A grammar is a tree of [`Rule`]s: an ordered list of top-level rules plus
//! an optional repository of named rules. Only the fields that take part in
//! rule-to-rule references are modelled; everything else in the source
//! document (`name`, `captures`, `contentName`, ...) is ignored on decode.
//!
//! # Example
//!
//! ```
//! use tmgraph_core::grammar::{Grammar, Rule};
//!
//! let grammar = Grammar::new(vec![Rule::include("#expression")])
//!     .with_rule("expression", Rule::matching("\\d+"));
//!
//! assert_eq!(grammar.patterns().len(), 1);
//! assert!(grammar.repository().is_some());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

/// A decoded TextMate grammar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grammar {
    /// Root scope of the grammar, e.g. `source.js`.
    #[serde(default)]
    scope_name: Option<String>,

    /// Human readable grammar name.
    #[serde(default)]
    name: Option<String>,

    /// Top-level rules, in document order.
    patterns: Vec<Rule>,

    /// Named rules, in document order.
    #[serde(default)]
    repository: Option<IndexMap<String, Rule>>,
}

impl Grammar {
    /// Creates a grammar with the given top-level rules and no repository.
    pub fn new(patterns: Vec<Rule>) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }

    /// Adds a named rule to the repository, creating it if needed.
    ///
    /// Insertion order is kept; re-adding an existing name replaces the rule
    /// in place.
    pub fn with_rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.repository
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), rule);
        self
    }

    pub fn scope_name(&self) -> Option<&str> {
        self.scope_name.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the top-level rules.
    pub fn patterns(&self) -> &[Rule] {
        &self.patterns
    }

    /// Returns the repository, if the grammar has one.
    pub fn repository(&self) -> Option<&IndexMap<String, Rule>> {
        self.repository.as_ref()
    }
}

/// One node of the grammar's rule tree.
///
/// The facets are not exclusive: a rule can carry an include, nested
/// patterns and regexes at the same time, and each present facet
/// contributes references on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Reference to another rule: `#name` (local) or a scope name (external).
    #[serde(default)]
    include: Option<String>,

    /// Nested rules.
    #[serde(default)]
    patterns: Option<Vec<Rule>>,

    /// Single-line regex.
    #[serde(default, rename = "match")]
    match_: Option<String>,

    /// Opening regex of a begin/end pair.
    #[serde(default)]
    begin: Option<String>,

    /// Closing regex of a begin/end pair.
    #[serde(default)]
    end: Option<String>,
}

impl Rule {
    /// Creates a rule that only includes `target`.
    pub fn include(target: impl Into<String>) -> Self {
        Self {
            include: Some(target.into()),
            ..Self::default()
        }
    }

    /// Creates a container rule holding `patterns`.
    pub fn container(patterns: Vec<Rule>) -> Self {
        Self {
            patterns: Some(patterns),
            ..Self::default()
        }
    }

    /// Creates a rule that matches a single regex.
    pub fn matching(regex: impl Into<String>) -> Self {
        Self {
            match_: Some(regex.into()),
            ..Self::default()
        }
    }

    /// Creates a begin/end rule.
    pub fn surround(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: Some(begin.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// Adds nested patterns to this rule.
    pub fn with_patterns(mut self, patterns: Vec<Rule>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Adds a `match` regex to this rule.
    pub fn with_match(mut self, regex: impl Into<String>) -> Self {
        self.match_ = Some(regex.into());
        self
    }

    pub fn include_target(&self) -> Option<&str> {
        self.include.as_deref()
    }

    pub fn patterns(&self) -> Option<&[Rule]> {
        self.patterns.as_deref()
    }

    pub fn match_regex(&self) -> Option<&str> {
        self.match_.as_deref()
    }

    /// Returns the begin/end regexes when both are present.
    pub fn surround_regexes(&self) -> Option<(&str, &str)> {
        match (&self.begin, &self.end) {
            (Some(begin), Some(end)) => Some((begin, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_grammar() {
        let grammar: Grammar = serde_json::from_str(r#"{"patterns": []}"#).unwrap();

        assert!(grammar.patterns().is_empty());
        assert!(grammar.repository().is_none());
        assert_eq!(grammar.scope_name(), None);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let source = r#"{
            "scopeName": "source.demo",
            "name": "Demo",
            "fileTypes": ["demo"],
            "patterns": [
                {"name": "keyword.demo", "match": "\\bdemo\\b", "captures": {"0": {"name": "x"}}}
            ]
        }"#;
        let grammar: Grammar = serde_json::from_str(source).unwrap();

        assert_eq!(grammar.scope_name(), Some("source.demo"));
        assert_eq!(grammar.name(), Some("Demo"));
        assert_eq!(grammar.patterns()[0].match_regex(), Some("\\bdemo\\b"));
    }

    #[test]
    fn test_repository_keeps_document_order() {
        let source = r##"{
            "patterns": [],
            "repository": {
                "zeta": {"include": "#alpha"},
                "alpha": {"match": "a"},
                "mid": {"patterns": []}
            }
        }"##;
        let grammar: Grammar = serde_json::from_str(source).unwrap();

        let names: Vec<&str> = grammar
            .repository()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_patterns_is_rejected() {
        let result: Result<Grammar, _> = serde_json::from_str(r#"{"repository": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_include_is_rejected() {
        let result: Result<Grammar, _> = serde_json::from_str(r#"{"patterns": [{"include": 3}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_surround_requires_both_regexes() {
        let begin_only: Rule = serde_json::from_str(r#"{"begin": "<", "while": "^"}"#).unwrap();
        assert_eq!(begin_only.surround_regexes(), None);

        let rule = Rule::surround("<", ">");
        assert_eq!(rule.surround_regexes(), Some(("<", ">")));
    }

    #[test]
    fn test_builders() {
        let rule = Rule::include("#a")
            .with_patterns(vec![Rule::matching("b")])
            .with_match("c");

        assert_eq!(rule.include_target(), Some("#a"));
        assert_eq!(rule.patterns().map(<[Rule]>::len), Some(1));
        assert_eq!(rule.match_regex(), Some("c"));

        let grammar = Grammar::new(Vec::new())
            .with_rule("a", Rule::default())
            .with_rule("b", Rule::default())
            .with_rule("a", Rule::matching("x"));
        let repository = grammar.repository().unwrap();
        assert_eq!(repository.len(), 2);
        assert_eq!(repository.get_index(0).map(|(k, _)| k.as_str()), Some("a"));
        assert_eq!(repository["a"].match_regex(), Some("x"));
    }
}
