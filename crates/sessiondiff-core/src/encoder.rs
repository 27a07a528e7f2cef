//! Re-serialization of decoded records into session list lines.

use std::fmt::Write;

use crate::cursor::SOH;
use crate::domain::{CalendarDate, Security, Session};
use crate::tags;

/// Encodes a security as one SOH-terminated line, without a trailing newline.
///
/// Counts are taken from the sequence lengths, so decoding the result yields
/// the same record.
pub fn encode_security(security: &Security) -> String {
    let mut line = String::new();
    push_field(&mut line, tags::MSG_TYPE, tags::SESSION_LIST_MSG_TYPE);
    push_field(&mut line, tags::MARKET_SEGMENT_ID, security.market_segment_id);
    push_field(&mut line, tags::PRODUCT_COMPLEX, &security.product_complex);
    push_field(&mut line, tags::SECURITY_GROUP, &security.security_group);
    push_field(&mut line, tags::NO_DATES, security.dates.len());
    for date in &security.dates {
        encode_date(&mut line, date);
    }
    line
}

fn encode_date(line: &mut String, date: &CalendarDate) {
    push_field(line, tags::TRADE_DATE, &date.date_string);
    push_field(line, tags::NO_TRADING_SESSIONS, date.sessions.len());
    for session in &date.sessions {
        encode_session(line, session);
    }
}

fn encode_session(line: &mut String, session: &Session) {
    push_field(line, tags::TRADING_SESSION_ID, session.session_id);
    push_field(line, tags::TRADING_SESSION_TIME, &session.timestamp);
    if let Some(interrupt) = session.interrupt_code {
        push_field(line, tags::TRADING_SESSION_INTERRUPT, interrupt);
    }
}

fn push_field(line: &mut String, tag: &str, value: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = write!(line, "{tag}={value}{SOH}");
}
