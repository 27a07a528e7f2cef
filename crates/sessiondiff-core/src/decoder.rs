//! Schema-driven decoding of one session list line.
//!
//! Field order is fixed by the wire format:
//!
//! ```text
//! 35 | 1300 1227 1151 580 { 75 386 { 336 341 [625] }* }*
//! ```
//!
//! The two repeating groups are sized by the preceding `580` and `386` counts.
//! `625` is the only optional field and is detected by peeking at the next tag.

use crate::cursor::{Label, TokenCursor};
use crate::domain::{CalendarDate, Security, Session};
use crate::error::DecodeError;
use crate::tags;

/// Decodes one line into a [`Security`].
///
/// Any failure aborts the whole line. Trailing fields after the last declared
/// session are ignored.
pub fn decode_line(line: &str) -> Result<Security, DecodeError> {
    let mut cursor = TokenCursor::new(line);

    cursor.skip("message_type")?;
    let market_segment_id = cursor.next_u32("market_segment_id")?;
    let product_complex = cursor.next_str("product_complex")?;
    let security_group = cursor.next_str("security_group")?;
    let declared_date_count = cursor.next_count("no_dates")?;

    let mut dates = Vec::with_capacity(declared_date_count.min(64));
    for found in 0..declared_date_count {
        let date = decode_date(&mut cursor)
            .map_err(|error| cut_short(error, "dates", declared_date_count, found))?;
        dates.push(date);
    }

    Security::new(
        market_segment_id,
        product_complex,
        security_group,
        declared_date_count,
        dates,
    )
}

fn decode_date(cursor: &mut TokenCursor<'_>) -> Result<CalendarDate, DecodeError> {
    let date_string = cursor.next_str("trade_date")?;
    let declared_session_count = cursor.next_count("no_trading_sessions")?;

    let mut sessions = Vec::with_capacity(declared_session_count.min(64));
    for found in 0..declared_session_count {
        let session = decode_session(cursor)
            .map_err(|error| cut_short(error, "sessions", declared_session_count, found))?;
        sessions.push(session);
    }

    CalendarDate::new(date_string, declared_session_count, sessions)
}

fn decode_session(cursor: &mut TokenCursor<'_>) -> Result<Session, DecodeError> {
    let session_id = cursor.next_u32("trading_session_id")?;
    let timestamp = cursor.next_str("trading_session_time")?;

    let mut session = Session::new(session_id, timestamp);
    if cursor.peek_label()? == Label::Tag(tags::TRADING_SESSION_INTERRUPT) {
        session = session.with_interrupt(cursor.next_u32("trading_session_interrupt")?);
    }

    Ok(session)
}

/// A line that ends inside a repeating group holds fewer entries than declared.
fn cut_short(error: DecodeError, group: &'static str, declared: usize, found: usize) -> DecodeError {
    match error {
        DecodeError::UnexpectedEnd { .. } => DecodeError::GroupCountMismatch {
            group,
            declared,
            found,
        },
        other => other,
    }
}
