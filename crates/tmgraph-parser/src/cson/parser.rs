//! Structural parser turning CSON tokens into a generic document.
//!
//! Objects come in two shapes. Braced objects are delimited by `{}` and
//! separate entries with commas or newlines. Implied objects start at a
//! `key:` and continue with every following line whose key sits in the same
//! column. A value placed on the lines after `key:` must be indented deeper
//! than the key.

use serde_json::{Map, Number, Value};

use super::{
    CsonError,
    tokens::{PositionedToken, Token},
};

/// Parse a whole token stream into one document.
pub(crate) fn parse_document(
    tokens: &[PositionedToken<'_>],
    source_len: usize,
) -> Result<Value, CsonError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        source_len,
    };

    parser.skip_newlines();
    let document = match parser.key_column() {
        Some(column) => parser.implied_object(column)?,
        None => parser.value()?,
    };

    parser.skip_newlines();
    if let Some(positioned) = parser.peek() {
        return Err(CsonError::new(
            format!("unexpected {} after document", positioned.token),
            positioned.offset,
        ));
    }

    Ok(document)
}

struct Parser<'t, 'a> {
    tokens: &'t [PositionedToken<'a>],
    pos: usize,
    source_len: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn peek(&self) -> Option<&'t PositionedToken<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&'t Token<'a>> {
        self.peek().map(|positioned| &positioned.token)
    }

    /// Skip newlines and report whether any were skipped.
    fn skip_newlines(&mut self) -> bool {
        let start = self.pos;
        while self.peek_token() == Some(&Token::Newline) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek_token(), Some(Token::Newline | Token::Comma)) {
            self.pos += 1;
        }
    }

    /// If the cursor is at `key:`, return the key's column.
    fn key_column(&self) -> Option<usize> {
        let key = self.peek()?;
        let is_key_token = matches!(
            key.token,
            Token::String(_) | Token::Word(_) | Token::Number(_)
        );
        let followed_by_colon = self
            .tokens
            .get(self.pos + 1)
            .is_some_and(|next| next.token == Token::Colon);
        (is_key_token && followed_by_colon).then_some(key.column)
    }

    fn error_here(&self, message: &str) -> CsonError {
        match self.peek() {
            Some(positioned) => CsonError::new(
                format!("{message}, found {}", positioned.token),
                positioned.offset,
            ),
            None => CsonError::new(format!("{message}, found end of input"), self.source_len),
        }
    }

    fn expect(&mut self, expected: Token<'static>) -> Result<(), CsonError> {
        if self.peek_token() == Some(&expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error_here(&format!("expected {expected}")))
        }
    }

    fn key(&mut self) -> Result<String, CsonError> {
        let key = match self.peek_token() {
            Some(Token::String(text)) => text.clone(),
            Some(Token::Word(text) | Token::Number(text)) => (*text).to_string(),
            _ => return Err(self.error_here("expected key")),
        };
        self.pos += 1;
        self.expect(Token::Colon)?;
        Ok(key)
    }

    /// Parse the value of an entry whose key sits at `owner_column`.
    fn entry_value(&mut self, owner_column: usize) -> Result<Value, CsonError> {
        if self.skip_newlines() {
            match self.peek() {
                Some(positioned) if positioned.column > owner_column => {}
                _ => return Err(self.error_here("expected indented value")),
            }
        }

        match self.key_column() {
            Some(column) => self.implied_object(column),
            None => self.value(),
        }
    }

    /// Parse an object implied by `key:` entries aligned on `column`.
    fn implied_object(&mut self, column: usize) -> Result<Value, CsonError> {
        let mut map = Map::new();

        loop {
            let key = self.key()?;
            let value = self.entry_value(column)?;
            map.insert(key, value);

            let checkpoint = self.pos;
            let crossed_line = self.skip_newlines();
            if !(crossed_line && self.key_column() == Some(column)) {
                self.pos = checkpoint;
                break;
            }
        }

        Ok(Value::Object(map))
    }

    fn braced_object(&mut self) -> Result<Value, CsonError> {
        self.expect(Token::LeftBrace)?;
        let mut map = Map::new();

        loop {
            self.skip_separators();
            if self.peek_token() == Some(&Token::RightBrace) {
                self.pos += 1;
                break;
            }

            let column = self.peek().map_or(0, |positioned| positioned.column);
            let key = self.key()?;
            let value = self.entry_value(column)?;
            map.insert(key, value);
        }

        Ok(Value::Object(map))
    }

    fn array(&mut self) -> Result<Value, CsonError> {
        self.expect(Token::LeftBracket)?;
        let mut items = Vec::new();

        loop {
            self.skip_separators();
            if self.peek_token() == Some(&Token::RightBracket) {
                self.pos += 1;
                break;
            }

            let item = match self.key_column() {
                Some(column) => self.implied_object(column)?,
                None => self.value()?,
            };
            items.push(item);
        }

        Ok(Value::Array(items))
    }

    fn value(&mut self) -> Result<Value, CsonError> {
        match self.peek_token() {
            Some(Token::LeftBrace) => self.braced_object(),
            Some(Token::LeftBracket) => self.array(),
            Some(Token::String(text)) => {
                let value = Value::String(text.clone());
                self.pos += 1;
                Ok(value)
            }
            Some(Token::Number(text)) => {
                let value = number_value(text).ok_or_else(|| self.error_here("invalid number"))?;
                self.pos += 1;
                Ok(value)
            }
            Some(Token::Word(word)) => {
                let value = keyword_value(word).ok_or_else(|| self.error_here("expected value"))?;
                self.pos += 1;
                Ok(value)
            }
            _ => Err(self.error_here("expected value")),
        }
    }
}

fn number_value(text: &str) -> Option<Value> {
    if let Ok(integer) = text.parse::<i64>() {
        return Some(Value::from(integer));
    }
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok().map(Value::from);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn keyword_value(word: &str) -> Option<Value> {
    match word {
        "true" | "yes" | "on" => Some(Value::Bool(true)),
        "false" | "no" | "off" => Some(Value::Bool(false)),
        "null" | "undefined" => Some(Value::Null),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cson::lexer::tokenize;

    fn parse(source: &str) -> Result<Value, CsonError> {
        let tokens = tokenize(source)?;
        parse_document(&tokens, source.len())
    }

    #[test]
    fn test_nested_implied_objects() {
        let source = "
a:
  b:
    c: 1
  d: 2
e: 3
";
        assert_eq!(
            parse(source).unwrap(),
            json!({"a": {"b": {"c": 1}, "d": 2}, "e": 3})
        );
    }

    #[test]
    fn test_inline_nested_key() {
        assert_eq!(parse("a: b: 1").unwrap(), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_implied_object_inside_braces() {
        let source = "{
  captures:
    '1': name: 'x'
  end: 'y'
}";
        assert_eq!(
            parse(source).unwrap(),
            json!({"captures": {"1": {"name": "x"}}, "end": "y"})
        );
    }

    #[test]
    fn test_array_with_newline_separators() {
        assert_eq!(parse("[\n  1\n  2,\n  3\n]").unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_number_keys() {
        assert_eq!(parse("1: 'one'").unwrap(), json!({"1": "one"}));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(number_value("42"), Some(json!(42)));
        assert_eq!(number_value("-7"), Some(json!(-7)));
        assert_eq!(number_value("0x1F"), Some(json!(31)));
        assert_eq!(number_value("2.5"), Some(json!(2.5)));
        assert_eq!(number_value("12abc"), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(keyword_value("on"), Some(Value::Bool(true)));
        assert_eq!(keyword_value("off"), Some(Value::Bool(false)));
        assert_eq!(keyword_value("undefined"), Some(Value::Null));
        assert_eq!(keyword_value("maybe"), None);
    }

    #[test]
    fn test_unclosed_array() {
        let err = parse("a: [1, 2").unwrap_err();
        assert_eq!(err.offset(), 8);
        assert!(err.message().contains("end of input"));
    }

    #[test]
    fn test_dedent_below_owner_is_an_error() {
        let err = parse("  a:\nb: 1").unwrap_err();
        assert!(err.message().contains("expected indented value"));
    }
}
