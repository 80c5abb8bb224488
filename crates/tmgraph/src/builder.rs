//! Graph construction from a decoded grammar.
//!
//! [`GraphBuilder`] visits the top-level rules (as `$self`) and then the
//! repository rules (under their own names), turns every reference the
//! extractor reports into an edge, and applies the exclusion, labeling and
//! regex comment policies from [`GraphOptions`].

use log::{debug, trace};

use tmgraph_core::{
    grammar::{Grammar, Rule},
    identifier::{SELF_NODE, SurroundIds, escape},
    reference::Reference,
};

use crate::{
    config::GraphOptions,
    extract::extract_references,
    graph::{Edge, Graph, Node, Statement},
    uncomment::strip_regex_comments,
};

/// Builds one [`Graph`].
///
/// The builder owns the surround id counter, so it is consumed by
/// [`build`](Self::build) and every build numbers its surround nodes from
/// zero.
pub struct GraphBuilder<'o> {
    options: &'o GraphOptions,
    ids: SurroundIds,
    statements: Vec<Statement>,
}

impl<'o> GraphBuilder<'o> {
    pub fn new(options: &'o GraphOptions) -> Self {
        Self {
            options,
            ids: SurroundIds::new(),
            statements: Vec::new(),
        }
    }

    /// Build the dependency graph of `grammar`.
    pub fn build(mut self, grammar: &Grammar) -> Graph {
        for rule in grammar.patterns() {
            self.add_rule(SELF_NODE, rule);
        }

        if let Some(repository) = grammar.repository() {
            for (name, rule) in repository {
                if self.options.is_excluded(name) {
                    debug!(rule = name.as_str(); "Skipping excluded repository rule");
                    continue;
                }
                self.add_rule(name, rule);
            }
        }

        debug!(
            statements = self.statements.len(),
            surround_nodes = self.ids.allocated();
            "Graph built",
        );

        Graph::new(self.statements)
    }

    fn add_rule(&mut self, source: &str, rule: &Rule) {
        let include_regex = self.options.include_regex();
        let from = escape(source);

        for reference in extract_references(rule, include_regex, &mut self.ids) {
            if reference.is_regex_derived() && !include_regex {
                continue;
            }
            if self.options.is_excluded(reference.referenced()) {
                trace!(target_name = reference.referenced(); "Skipping excluded reference");
                continue;
            }

            let to = self.node_id(&reference, reference.is_regex_derived());
            self.push_edge(&from, &to, &reference);

            if reference.children().is_empty() {
                continue;
            }

            self.statements.push(Statement::Node(Node::new(to.as_str())));
            for child in reference.children() {
                let child_to = self.node_id(child, true);
                self.push_edge(&to, &child_to, child);
            }
        }
    }

    /// Escaped target id of `reference`, uncommented when it holds regex text.
    fn node_id(&self, reference: &Reference, is_regex_text: bool) -> String {
        let escaped = escape(reference.referenced());
        if is_regex_text && self.options.uncomment_regex() {
            strip_regex_comments(&escaped)
        } else {
            escaped
        }
    }

    fn push_edge(&mut self, from: &str, to: &str, reference: &Reference) {
        let label = self.options.label_arrows().then(|| reference.relation());
        trace!(from = from, to = to; "Adding edge");
        self.statements
            .push(Statement::Edge(Edge::new(from, to, label)));
    }
}
