//! Graph rendering.
//!
//! This module provides the [`Renderer`] trait that turns a built [`Graph`]
//! into text. It is the last stage of the pipeline:
//!
//! ```text
//! Grammar bytes
//!     ↓ decode
//! Grammar
//!     ↓ build
//! Graph
//!     ↓ render (this module)
//! Output text
//! ```
//!
//! # Available Backends
//!
//! - [`dot`]: Graphviz DOT via [`dot::DotRenderer`]

/// Graphviz DOT backend.
pub mod dot;

use std::fmt;

use crate::graph::Graph;

/// Abstraction for graph output formats.
///
/// Node ids in a [`Graph`] are already escaped for double-quoted strings,
/// so implementors write them unchanged.
pub trait Renderer {
    /// Writes `graph` to `out`.
    ///
    /// # Errors
    ///
    /// Only fails when `out` fails.
    fn render(&self, graph: &Graph, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Renders `graph` into a new string.
    fn render_to_string(&self, graph: &Graph) -> String {
        let mut out = String::new();
        self.render(graph, &mut out)
            .expect("Writing to String buffer is infallible");
        out
    }
}
