//! Error adapter for converting TmGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tmgraph::{DecodeError, TmGraphError};

/// Adapter giving a [`TmGraphError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a TmGraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TmGraphError::Io(_) => "tmgraph::io",
            TmGraphError::SourceUnavailable { .. } => "tmgraph::source",
            TmGraphError::Decode(DecodeError::UnrecognizedFormat) => "tmgraph::format",
            TmGraphError::Decode(DecodeError::MalformedGrammar { .. }) => "tmgraph::grammar",
            TmGraphError::Config(_) => "tmgraph::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TmGraphError::Decode(DecodeError::UnrecognizedFormat) => {
                "grammars must be YAML, CSON, JSON, or property list documents"
            }
            TmGraphError::Decode(DecodeError::MalformedGrammar { .. }) => {
                "a grammar needs a top-level `patterns` list"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render `err` as a graphical miette report.
pub fn render_report(err: &TmGraphError) -> String {
    let reporter = miette::GraphicalReportHandler::new();

    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    writer
}
