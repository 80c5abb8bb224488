//! tmgraph - Dependency graphs of TextMate grammars.
//!
//! Decoding, graph construction, and DOT rendering for TextMate grammars.
//! A grammar's top-level patterns and repository rules become nodes, and
//! `include` references (optionally also `match` and `begin`/`end` regexes)
//! become edges.

pub mod config;
pub mod export;
pub mod extract;
pub mod graph;
pub mod uncomment;

mod builder;
mod error;

pub use tmgraph_core::{grammar, identifier, reference};
pub use tmgraph_parser::{DecodeError, Format};

pub use builder::GraphBuilder;
pub use error::TmGraphError;

use log::{debug, info, trace};

use config::GraphOptions;
use export::{Renderer, dot::DotRenderer};
use grammar::Grammar;
use graph::Graph;

/// Entry point for decoding grammars and rendering their dependency graphs.
///
/// # Examples
///
/// ```
/// use tmgraph::{GrammarGrapher, config::GraphOptions};
///
/// let source = br##"{"patterns": [{"include": "#a"}], "repository": {"a": {"match": "\\d+"}}}"##;
///
/// let grapher = GrammarGrapher::new(
///     GraphOptions::default().with_regex(true).with_labels(true),
/// );
/// let grammar = grapher.decode(source).expect("Failed to decode");
/// let dot = grapher.render_dot(&grammar);
///
/// assert!(dot.contains(r#""$self" -> "a"[label="include"];"#));
/// assert!(dot.contains(r#""a" -> "\\d+"[label="match"];"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrammarGrapher {
    options: GraphOptions,
}

impl GrammarGrapher {
    /// Create a grapher that builds with `options`.
    pub fn new(options: GraphOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Decode grammar bytes in any supported format.
    ///
    /// # Errors
    ///
    /// Returns [`TmGraphError::Decode`] if the bytes are in no supported
    /// format or the document is not a grammar.
    pub fn decode(&self, bytes: &[u8]) -> Result<Grammar, TmGraphError> {
        info!(bytes_len = bytes.len(); "Decoding grammar");
        let grammar = tmgraph_parser::decode(bytes)?;

        debug!(
            scope_name = grammar.scope_name().unwrap_or_default(),
            patterns_len = grammar.patterns().len(),
            repository_len = grammar.repository().map_or(0, |repository| repository.len());
            "Grammar decoded",
        );
        trace!(grammar:?; "Decoded grammar");

        Ok(grammar)
    }

    /// Build the dependency graph of `grammar`.
    pub fn build(&self, grammar: &Grammar) -> Graph {
        GraphBuilder::new(&self.options).build(grammar)
    }

    /// Build the dependency graph of `grammar` and render it as DOT.
    pub fn render_dot(&self, grammar: &Grammar) -> String {
        let graph = self.build(grammar);
        info!(statements_len = graph.statements().len(); "Rendering DOT graph");
        DotRenderer.render_to_string(&graph)
    }
}
