//! Dependency graph of a grammar.
//!
//! A [`Graph`] is an ordered list of statements: edges between rules and
//! declarations of synthetic nodes. Identifiers stored here are already
//! escaped, so renderers can embed them as-is.

use tmgraph_core::reference::Relation;

/// A directed edge between two escaped node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    label: Option<Relation>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: Option<Relation>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// The relation shown on the edge, if edges are labeled.
    pub fn label(&self) -> Option<Relation> {
        self.label
    }
}

/// A synthetic node, rendered without visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Node(Node),
    Edge(Edge),
}

/// The statements of one graph build, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    statements: Vec<Statement>,
}

impl Graph {
    pub(crate) fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Edge(edge) => Some(edge),
            Statement::Node(_) => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Node(node) => Some(node),
            Statement::Edge(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
