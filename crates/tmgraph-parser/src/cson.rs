//! CSON (CoffeeScript Object Notation) reader.
//!
//! Atom-era TextMate grammars are commonly written in CSON. This reader
//! covers the data subset of the notation that grammars use:
//!
//! - `#` line comments and `###` block comments
//! - single, double and triple quoted strings with backslash escapes
//! - numbers, `true`/`false`/`yes`/`no`/`on`/`off` and `null`
//! - quoted or bare keys
//! - braced objects, bracketed arrays, and objects implied by indentation,
//!   including implied objects as array items
//!
//! Interpolation, expressions and other CoffeeScript code are rejected.
//!
//! # Example
//!
//! ```
//! use tmgraph_parser::cson;
//!
//! let source = "
//! 'patterns': [
//!   { 'include': '#value' }
//! ]
//! 'repository':
//!   'value':
//!     'match': '\\\\d+'
//! ";
//!
//! let document = cson::parse(source).unwrap();
//! assert_eq!(document["repository"]["value"]["match"], "\\d+");
//! ```

mod lexer;
mod parser;
mod tokens;

use serde_json::Value;
use thiserror::Error;

/// A CSON syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}")]
pub struct CsonError {
    message: String,
    offset: usize,
}

impl CsonError {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the source where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Parse CSON source into a generic document.
///
/// # Errors
///
/// Returns [`CsonError`] on the first lexical or structural error.
pub fn parse(source: &str) -> Result<Value, CsonError> {
    let tokens = lexer::tokenize(source)?;
    parser::parse_document(&tokens, source.len())
}
