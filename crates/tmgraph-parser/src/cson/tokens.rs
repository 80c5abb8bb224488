//! Token definitions for the CSON reader.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    Newline,
    /// String literal with escapes resolved
    String(String),
    /// Numeric literal, kept as written
    Number(&'a str),
    /// Bare word: a key, or one of the boolean/null keywords
    Word(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftBrace => f.write_str("`{`"),
            Token::RightBrace => f.write_str("`}`"),
            Token::LeftBracket => f.write_str("`[`"),
            Token::RightBracket => f.write_str("`]`"),
            Token::Colon => f.write_str("`:`"),
            Token::Comma => f.write_str("`,`"),
            Token::Newline => f.write_str("newline"),
            Token::String(_) => f.write_str("string"),
            Token::Number(text) => write!(f, "number `{text}`"),
            Token::Word(text) => write!(f, "`{text}`"),
        }
    }
}

/// A token with its byte offset and column.
///
/// The column is the byte distance from the start of the token's line and
/// drives indentation-implied objects.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PositionedToken<'a> {
    pub token: Token<'a>,
    pub offset: usize,
    pub column: usize,
}
