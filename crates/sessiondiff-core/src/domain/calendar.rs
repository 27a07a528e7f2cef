use serde::{Deserialize, Serialize};

use super::Session;
use crate::error::DecodeError;

/// One trade date of a security group's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// `YYYYMMDD`.
    pub date_string: String,
    pub declared_session_count: usize,
    pub sessions: Vec<Session>,
}

impl CalendarDate {
    /// Builds a date whose session list must match the declared count.
    pub fn new(
        date_string: impl Into<String>,
        declared_session_count: usize,
        sessions: Vec<Session>,
    ) -> Result<Self, DecodeError> {
        if sessions.len() != declared_session_count {
            return Err(DecodeError::GroupCountMismatch {
                group: "sessions",
                declared: declared_session_count,
                found: sessions.len(),
            });
        }

        Ok(Self {
            date_string: date_string.into(),
            declared_session_count,
            sessions,
        })
    }

    pub fn from_sessions(date_string: impl Into<String>, sessions: Vec<Session>) -> Self {
        Self {
            date_string: date_string.into(),
            declared_session_count: sessions.len(),
            sessions,
        }
    }

    /// Distinct timestamp day prefixes, in first-seen order.
    pub fn distinct_day_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = Vec::new();
        for session in &self.sessions {
            let prefix = session.date_prefix();
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
        prefixes
    }
}
