use thiserror::Error;

use crate::document::{Document, Quote, Record, Value};

/// Errors that can occur while parsing text into a [`Document`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A scalar value opened a quote that never closes on its line.
    #[error("line {line}: unterminated quoted value")]
    UnterminatedQuote { line: usize },
    /// An array literal opened `(` without a closing `)` on its line.
    #[error("line {line}: unterminated array literal")]
    UnterminatedArray { line: usize },
}

/// Parse configuration text into a [`Document`].
///
/// Each line becomes exactly one record. Lines of the form `NAME=value` or
/// `NAME=(a b c)` parse as assignments; every other line, including anything
/// with trailing content after a closing quote or parenthesis, is kept as an
/// opaque record and round-trips byte-identically.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let trailing_newline = text.ends_with('\n');
    let body = if trailing_newline {
        &text[..text.len() - 1]
    } else {
        text
    };

    let mut records = Vec::new();
    for (idx, line) in body.split('\n').enumerate() {
        records.push(parse_line(line, idx + 1)?);
    }

    Ok(Document {
        records,
        trailing_newline,
    })
}

fn parse_line(line: &str, number: usize) -> Result<Record, ParseError> {
    let Some((name, rest)) = split_assignment(line) else {
        return Ok(opaque(line));
    };

    if let Some(after) = rest.strip_prefix('(') {
        return match after.strip_suffix(')') {
            Some(inner) => Ok(Record::Assignment {
                name: name.to_string(),
                value: Value::Array {
                    inner: inner.to_string(),
                },
            }),
            None if after.contains(')') => Ok(opaque(line)),
            None => Err(ParseError::UnterminatedArray { line: number }),
        };
    }

    for (quote, ch) in [(Quote::Double, '"'), (Quote::Single, '\'')] {
        let Some(after) = rest.strip_prefix(ch) else {
            continue;
        };
        return match after.strip_suffix(ch) {
            Some(value) if !value.contains(ch) => Ok(Record::Assignment {
                name: name.to_string(),
                value: Value::Scalar {
                    value: value.to_string(),
                    quote,
                },
            }),
            Some(_) => Ok(opaque(line)),
            None if after.contains(ch) => Ok(opaque(line)),
            None => Err(ParseError::UnterminatedQuote { line: number }),
        };
    }

    // Bare scalar: a single unquoted word (or nothing at all).
    if rest.is_empty()
        || !rest.contains(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '(' | ')'))
    {
        return Ok(Record::Assignment {
            name: name.to_string(),
            value: Value::Scalar {
                value: rest.to_string(),
                quote: Quote::None,
            },
        });
    }

    Ok(opaque(line))
}

fn opaque(line: &str) -> Record {
    Record::Opaque {
        raw: line.to_string(),
    }
}

/// Split `NAME=rest` when `NAME` is a valid shell identifier starting at
/// column zero.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let eq = line.find('=')?;
    let name = &line[..eq];
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, &line[eq + 1..]))
}
