//! # tmgraph Parser
//!
//! Format detection and decoding of TextMate grammar documents. Grammars are
//! published in several encodings; [`decode`] tries each supported
//! [`Format`] in a fixed order and shapes the first accepted document into a
//! [`Grammar`].
//!
//! ## Usage
//!
//! ```
//! # use tmgraph_parser::{decode, DecodeError};
//!
//! fn main() -> Result<(), DecodeError> {
//!     let source = r##"
//! scopeName: source.demo
//! patterns:
//!   - include: "#keywords"
//! repository:
//!   keywords:
//!     match: \b(if|else)\b
//! "##;
//!
//!     let grammar = decode(source.as_bytes())?;
//!     assert_eq!(grammar.scope_name(), Some("source.demo"));
//!     Ok(())
//! }
//! ```

pub mod cson;

mod error;
mod format;

pub use error::DecodeError;
pub use format::Format;

use log::{debug, info};
use serde_json::Value;

use tmgraph_core::grammar::Grammar;

/// Decode raw grammar bytes into a [`Grammar`].
///
/// Formats are attempted in the order of [`Format::ALL`]: YAML, CSON, JSON,
/// then property list. A format accepts the input only when it parses and
/// the top level is a mapping. The first accepted document is shaped into a
/// grammar; a shape failure is reported as-is and later formats are not
/// tried.
///
/// # Errors
///
/// - [`DecodeError::UnrecognizedFormat`] if no format accepts the input
/// - [`DecodeError::MalformedGrammar`] if the accepted document is not a grammar
pub fn decode(bytes: &[u8]) -> Result<Grammar, DecodeError> {
    let text = std::str::from_utf8(bytes).ok();
    if text.is_none() {
        debug!("Source is not UTF-8, only binary formats apply");
    }

    for format in Format::ALL {
        let document = match format.parse_document(bytes, text) {
            Ok(document) => document,
            Err(reason) => {
                debug!(format:% = format, reason = reason.as_str(); "Format rejected source");
                continue;
            }
        };

        if !document.is_object() {
            debug!(format:% = format; "Document top level is not a mapping");
            continue;
        }

        info!(format:% = format; "Recognized grammar format");
        return shape_grammar(format, document);
    }

    Err(DecodeError::UnrecognizedFormat)
}

/// Turn a generic document into a typed grammar.
fn shape_grammar(format: Format, document: Value) -> Result<Grammar, DecodeError> {
    serde_json::from_value(document).map_err(|err| DecodeError::MalformedGrammar {
        format,
        message: err.to_string(),
    })
}
