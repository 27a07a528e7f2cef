//! Tag-value token cursor.
//!
//! A line is a flat run of `tag=value` fields, each terminated by a single SOH
//! byte (`0x01`). There are no brackets: nesting is carried only by repeat
//! counts read earlier in the line, so the cursor never interprets structure on
//! its own. The free functions are pure views over the remaining buffer and
//! report offsets relative to it; [`TokenCursor`] tracks the absolute position
//! so errors point into the original line.

use crate::error::DecodeError;

/// Field terminator.
pub const SOH: char = '\u{1}';

const SEPARATOR: char = '=';

/// Result of peeking at the next field without consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label<'a> {
    Tag(&'a str),
    /// The buffer is exhausted.
    Done,
}

/// Returns the tag of the next field without consuming it.
///
/// A field with no `=` yields the whole field as its tag; the malformation is
/// reported when its value is taken.
pub fn peek_label(buf: &str) -> Result<Label<'_>, DecodeError> {
    if buf.is_empty() {
        return Ok(Label::Done);
    }

    let field = next_field(buf)?;
    let tag = match field.find(SEPARATOR) {
        Some(pos) => &field[..pos],
        None => field,
    };
    Ok(Label::Tag(tag))
}

/// Returns the value of the next field: the text between the first `=` and
/// the terminator.
pub fn take_value(buf: &str) -> Result<&str, DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::UnexpectedEnd { field: "value" });
    }

    let field = next_field(buf)?;
    match field.find(SEPARATOR) {
        Some(pos) => Ok(&field[pos + 1..]),
        None => Err(DecodeError::MalformedField {
            offset: 0,
            field: field.to_owned(),
        }),
    }
}

/// Drops everything up to and including the next terminator.
///
/// An unterminated tail is dropped entirely, so the result is always a suffix
/// of `buf` and an empty buffer stays empty.
pub fn advance(buf: &str) -> &str {
    match buf.find(SOH) {
        Some(pos) => &buf[pos + SOH.len_utf8()..],
        None => "",
    }
}

fn next_field(buf: &str) -> Result<&str, DecodeError> {
    buf.find(SOH)
        .map(|pos| &buf[..pos])
        .ok_or(DecodeError::TerminatorMissing { offset: 0 })
}

/// Offset-tracking wrapper over the pure cursor functions.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'a> {
    remaining: &'a str,
    consumed: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            remaining: line,
            consumed: 0,
        }
    }

    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Byte offset of the next unread field within the original line.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn peek_label(&self) -> Result<Label<'a>, DecodeError> {
        peek_label(self.remaining).map_err(|error| self.rebase(error))
    }

    /// Takes the value of the next field, naming `field` if the line is exhausted.
    pub fn take_value(&self, field: &'static str) -> Result<&'a str, DecodeError> {
        if self.is_empty() {
            return Err(DecodeError::UnexpectedEnd { field });
        }
        take_value(self.remaining).map_err(|error| self.rebase(error))
    }

    pub fn advance(&mut self) {
        let rest = advance(self.remaining);
        self.consumed += self.remaining.len() - rest.len();
        self.remaining = rest;
    }

    /// Skips one field after checking that it is well formed.
    pub fn skip(&mut self, field: &'static str) -> Result<(), DecodeError> {
        self.take_value(field)?;
        self.advance();
        Ok(())
    }

    pub fn next_str(&mut self, field: &'static str) -> Result<&'a str, DecodeError> {
        let value = self.take_value(field)?;
        self.advance();
        Ok(value)
    }

    pub fn next_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let value = self.next_str(field)?;
        parse_numeric(field, value)
    }

    pub fn next_count(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        let value = self.next_str(field)?;
        parse_numeric(field, value)
    }

    fn rebase(&self, error: DecodeError) -> DecodeError {
        match error {
            DecodeError::TerminatorMissing { offset } => DecodeError::TerminatorMissing {
                offset: self.consumed + offset,
            },
            DecodeError::MalformedField { offset, field } => DecodeError::MalformedField {
                offset: self.consumed + offset,
                field,
            },
            other => other,
        }
    }
}

fn parse_numeric<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, DecodeError> {
    value
        .parse::<T>()
        .map_err(|_| DecodeError::NumericFieldInvalid {
            field,
            value: value.to_owned(),
        })
}
