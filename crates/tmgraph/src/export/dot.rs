//! DOT output.

use std::fmt;

use crate::{
    export::Renderer,
    graph::{Edge, Graph, Node, Statement},
};

/// Name of the emitted digraph.
const GRAPH_NAME: &str = "TextMate";

/// Writes a [`Graph`] as a Graphviz `digraph`.
///
/// Every statement goes on its own line, indented two spaces and ended by
/// `;`. Synthetic nodes get an empty label so they render as bare points.
///
/// # Examples
///
/// ```
/// use tmgraph::{
///     GrammarGrapher,
///     config::GraphOptions,
///     export::{Renderer, dot::DotRenderer},
///     grammar::{Grammar, Rule},
/// };
///
/// let grammar = Grammar::new(vec![Rule::include("#value")]);
/// let graph = GrammarGrapher::new(GraphOptions::default()).build(&grammar);
///
/// assert_eq!(
///     DotRenderer.render_to_string(&graph),
///     "digraph TextMate {\n  \"$self\" -> \"value\";\n}\n",
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl DotRenderer {
    fn write_node(node: &Node, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "\"{}\"[label=\"\"]", node.id())
    }

    fn write_edge(edge: &Edge, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "\"{}\" -> \"{}\"", edge.from(), edge.to())?;
        if let Some(relation) = edge.label() {
            write!(out, "[label=\"{relation}\"]")?;
        }
        Ok(())
    }
}

impl Renderer for DotRenderer {
    fn render(&self, graph: &Graph, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "digraph {GRAPH_NAME} {{")?;
        for statement in graph.statements() {
            out.write_str("  ")?;
            match statement {
                Statement::Node(node) => Self::write_node(node, out)?,
                Statement::Edge(edge) => Self::write_edge(edge, out)?,
            }
            out.write_str(";\n")?;
        }
        writeln!(out, "}}")
    }
}
