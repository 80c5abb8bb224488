//! Error types for tmgraph operations.
//!
//! This module provides the main error type [`TmGraphError`] which wraps
//! the error conditions that can occur while loading and graphing a grammar.
//! Every variant is fatal: no partial graph is ever produced.

use std::io;

use thiserror::Error;

use tmgraph_parser::DecodeError;

use crate::config::ConfigError;

/// The main error type for tmgraph operations.
#[derive(Debug, Error)]
pub enum TmGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The grammar text could not be retrieved from a path or URL.
    #[error("Could not load source from path or url {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// The grammar text is in no known format, or is not a grammar.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TmGraphError {
    /// Create a new `SourceUnavailable` error.
    pub fn source_unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}
