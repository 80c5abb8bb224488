//! Error types for grammar decoding.

use thiserror::Error;

use crate::Format;

/// Errors raised while turning raw grammar bytes into a [`Grammar`](tmgraph_core::grammar::Grammar).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// None of the supported formats accepted the input.
    ///
    /// Individual format failures are not kept; they are only logged.
    #[error("Could not recognize file format")]
    UnrecognizedFormat,

    /// The input is a valid document but not a grammar.
    #[error("Malformed grammar in {format} document: {message}")]
    MalformedGrammar { format: Format, message: String },
}
