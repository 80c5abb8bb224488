//! Lexical analyzer for CSON source text.
//!
//! Whitespace and comments are dropped here; newlines are kept because
//! they separate entries and open indented blocks.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, cut_err, not, opt, repeat, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_till, take_until, take_while},
};

use super::{
    CsonError,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

/// Parse a `###` block comment. A line of four or more `#` is a line comment.
fn block_comment(input: &mut Input<'_>) -> IResult<()> {
    ("###", not('#'), take_until(0.., "###"), "###")
        .void()
        .parse_next(input)
}

/// Parse a `#` line comment up to, not including, the newline.
fn line_comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_till(0.., '\n')).void().parse_next(input)
}

/// Parse whitespace other than newlines
fn whitespace(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., [' ', '\t', '\r']).void().parse_next(input)
}

/// Take the raw body of a string up to the closing `delimiter`.
///
/// Backslash pairs are skipped as a unit so an escaped delimiter does not
/// end the string.
fn raw_string_body<'a>(input: &mut Input<'a>, delimiter: &str) -> IResult<&'a str> {
    repeat(0.., alt((('\\', any).void(), (not(delimiter), any).void())))
        .map(|()| ())
        .take()
        .parse_next(input)
}

/// Parse a quoted string: `'...'`, `"..."`, `'''...'''` or `"""..."""`.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let delimiter = alt(("'''", "\"\"\"", "'", "\"")).parse_next(input)?;

    let raw = cut_err(terminated(
        |input: &mut Input<'a>| raw_string_body(input, delimiter),
        delimiter,
    ))
    .parse_next(input)?;

    let text = if delimiter.len() == 3 {
        dedent_heredoc(raw)
    } else {
        fold_lines(raw)
    };
    Ok(Token::String(unescape(&text)))
}

/// Parse a numeric literal. Validation happens when the value is built.
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        opt('-'),
        digit1,
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '.'),
    )
        .take()
        .map(Token::Number)
        .parse_next(input)
}

/// Parse a bare word
fn word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    )
        .take()
        .map(Token::Word)
        .parse_next(input)
}

/// Parse single character tokens
fn punctuation<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '{'.value(Token::LeftBrace),
        '}'.value(Token::RightBrace),
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
        ':'.value(Token::Colon),
        ','.value(Token::Comma),
        '\n'.value(Token::Newline),
    ))
    .parse_next(input)
}

/// Parse one token, or `None` for trivia (whitespace and comments).
fn token<'a>(input: &mut Input<'a>) -> IResult<Option<Token<'a>>> {
    alt((
        block_comment.value(None), // Must come before line comment
        line_comment.value(None),
        whitespace.value(None),
        string_literal.map(Some),
        number.map(Some), // Must come before word
        word.map(Some),
        punctuation.map(Some),
    ))
    .parse_next(input)
}

/// Split `source` into positioned tokens, stopping at the first error.
pub(crate) fn tokenize(source: &str) -> Result<Vec<PositionedToken<'_>>, CsonError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    while input.eof_offset() > 0 {
        let offset = input.current_token_start();
        match token(&mut input) {
            Ok(Some(token)) => tokens.push(PositionedToken {
                token,
                offset,
                column: column_of(source, offset),
            }),
            Ok(None) => {}
            Err(_) => {
                let message = if source[offset..].starts_with(['\'', '"']) {
                    "unterminated string"
                } else {
                    "unexpected character"
                };
                return Err(CsonError::new(message, offset));
            }
        }
    }

    Ok(tokens)
}

fn column_of(source: &str, offset: usize) -> usize {
    let line_start = source[..offset].rfind('\n').map_or(0, |idx| idx + 1);
    offset - line_start
}

/// Join the lines of a multi-line quoted string with single spaces.
fn fold_lines(raw: &str) -> String {
    if !raw.contains('\n') {
        return raw.to_string();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| match idx {
            0 => line.trim_end(),
            idx if idx == last => line.trim_start(),
            _ => line.trim(),
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip the common indentation of a triple-quoted string, along with a
/// blank first and last line.
fn dedent_heredoc(raw: &str) -> String {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    if lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve backslash escapes.
///
/// Unknown escapes yield the escaped character itself and a backslash
/// before a newline joins the lines.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0C}'),
            Some('v') => out.push('\u{0B}'),
            Some('0') => out.push('\0'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16) {
                    Ok(code) if hex.len() == 4 => {
                        out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                        chars.nth(3);
                    }
                    _ => out.push('u'),
                }
            }
            Some('\n') => {}
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
