//! Supported grammar encodings.
//!
//! Every format decodes into the same generic document, a
//! [`serde_json::Value`] with mapping order preserved, so that shaping into
//! a grammar is shared.

use std::{fmt, io::Cursor};

use serde_json::{Map, Number, Value};

use crate::cson;

/// A grammar serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Cson,
    Json,
    Plist,
}

impl Format {
    /// All formats, in the order [`decode`](crate::decode) tries them.
    pub const ALL: [Format; 4] = [Format::Yaml, Format::Cson, Format::Json, Format::Plist];

    /// Parse `bytes` as this format into a generic document.
    ///
    /// Text formats only apply when the input is UTF-8; `text` carries the
    /// already validated string for them. The error is a human-readable
    /// reason, used for logging only.
    pub(crate) fn parse_document(self, bytes: &[u8], text: Option<&str>) -> Result<Value, String> {
        match self {
            Format::Yaml => {
                let text = text.ok_or("input is not UTF-8")?;
                serde_yaml::from_str(text).map_err(|err| err.to_string())
            }
            Format::Cson => {
                let text = text.ok_or("input is not UTF-8")?;
                cson::parse(text).map_err(|err| err.to_string())
            }
            Format::Json => {
                let text = text.ok_or("input is not UTF-8")?;
                serde_json::from_str(text).map_err(|err| err.to_string())
            }
            Format::Plist => plist::Value::from_reader(Cursor::new(bytes))
                .map(plist_to_document)
                .map_err(|err| err.to_string()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Yaml => "YAML",
            Format::Cson => "CSON",
            Format::Json => "JSON",
            Format::Plist => "property list",
        };
        f.write_str(name)
    }
}

/// Convert a property list value into the generic document.
///
/// Dates, data blobs and UIDs never carry grammar structure and become null.
fn plist_to_document(value: plist::Value) -> Value {
    match value {
        plist::Value::Dictionary(dict) => Value::Object(
            dict.into_iter()
                .map(|(key, value)| (key, plist_to_document(value)))
                .collect::<Map<String, Value>>(),
        ),
        plist::Value::Array(items) => {
            Value::Array(items.into_iter().map(plist_to_document).collect())
        }
        plist::Value::String(text) => Value::String(text),
        plist::Value::Boolean(flag) => Value::Bool(flag),
        plist::Value::Integer(integer) => integer
            .as_signed()
            .map(Value::from)
            .or_else(|| integer.as_unsigned().map(Value::from))
            .unwrap_or(Value::Null),
        plist::Value::Real(real) => Number::from_f64(real)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
