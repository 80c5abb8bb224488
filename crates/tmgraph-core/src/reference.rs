//! Outgoing references of a rule.
//!
//! A [`Reference`] is one dependency discovered inside a rule: an included
//! rule name, a raw regex, or a synthetic begin/end node. The [`Relation`]
//! says how it was found and doubles as the edge label.

use std::fmt;

/// How a reference was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Include,
    Match,
    Surround,
    Begin,
    End,
}

impl Relation {
    /// Returns the label used on graph edges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Match => "match",
            Self::Surround => "surround",
            Self::Begin => "begin",
            Self::End => "end",
        }
    }

    /// Whether references of this kind come from regex fields rather than names.
    pub fn is_regex_derived(self) -> bool {
        matches!(self, Self::Match | Self::Surround)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing reference of a rule.
///
/// Surround references carry exactly two children, the begin and end
/// regexes; every other kind has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    referenced: String,
    relation: Relation,
    children: Vec<Reference>,
}

impl Reference {
    /// Creates an include reference from the raw `include` value.
    ///
    /// A leading `#` marks a local repository reference and is stripped;
    /// anything else is an external reference and kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmgraph_core::reference::Reference;
    ///
    /// assert_eq!(Reference::include("#string").referenced(), "string");
    /// assert_eq!(Reference::include("source.js").referenced(), "source.js");
    /// ```
    pub fn include(target: &str) -> Self {
        let referenced = target.strip_prefix('#').unwrap_or(target);
        Self::leaf(referenced, Relation::Include)
    }

    /// Creates a match reference whose target is the regex text itself.
    pub fn matching(regex: &str) -> Self {
        Self::leaf(regex, Relation::Match)
    }

    /// Creates a surround reference to `node` with begin/end children.
    pub fn surround(node: impl Into<String>, begin: &str, end: &str) -> Self {
        Self {
            referenced: node.into(),
            relation: Relation::Surround,
            children: vec![
                Self::leaf(begin, Relation::Begin),
                Self::leaf(end, Relation::End),
            ],
        }
    }

    fn leaf(referenced: &str, relation: Relation) -> Self {
        Self {
            referenced: referenced.to_string(),
            relation,
            children: Vec::new(),
        }
    }

    /// The raw, unescaped target.
    pub fn referenced(&self) -> &str {
        &self.referenced
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn is_regex_derived(&self) -> bool {
        self.relation.is_regex_derived()
    }

    pub fn children(&self) -> &[Reference] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_strips_only_leading_hash() {
        assert_eq!(Reference::include("#foo").referenced(), "foo");
        assert_eq!(Reference::include("##foo").referenced(), "#foo");
        assert_eq!(Reference::include("foo#bar").referenced(), "foo#bar");
        assert_eq!(
            Reference::include("source.js#expression").referenced(),
            "source.js#expression"
        );
        assert_eq!(Reference::include("$self").referenced(), "$self");
        assert_eq!(Reference::include("#").referenced(), "");
    }

    #[test]
    fn test_regex_derived_flags() {
        assert!(!Reference::include("#a").is_regex_derived());
        assert!(Reference::matching("a+").is_regex_derived());
        assert!(Reference::surround("__surround0", "<", ">").is_regex_derived());
        assert!(!Relation::Begin.is_regex_derived());
        assert!(!Relation::End.is_regex_derived());
    }

    #[test]
    fn test_children_only_on_surround() {
        assert!(Reference::include("#a").children().is_empty());
        assert!(Reference::matching("a").children().is_empty());

        let surround = Reference::surround("__surround3", "<", ">");
        let children = surround.children();
        assert_eq!(surround.referenced(), "__surround3");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].referenced(), "<");
        assert_eq!(children[0].relation(), Relation::Begin);
        assert_eq!(children[1].referenced(), ">");
        assert_eq!(children[1].relation(), Relation::End);
    }

    #[test]
    fn test_relation_labels() {
        assert_eq!(Relation::Include.to_string(), "include");
        assert_eq!(Relation::Match.to_string(), "match");
        assert_eq!(Relation::Surround.to_string(), "surround");
        assert_eq!(Relation::Begin.to_string(), "begin");
        assert_eq!(Relation::End.to_string(), "end");
    }
}
