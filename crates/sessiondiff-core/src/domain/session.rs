use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Length of the `YYYYMMDD` prefix carried by every session timestamp.
pub const DATE_PREFIX_LEN: usize = 8;

/// Trading session phase, decoded from the raw session id code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    PreOpen,
    ReadyToTrade,
    Halt,
    NotAvailable,
    Close,
    PostClose,
    Other(u32),
}

impl SessionKind {
    pub const fn from_code(code: u32) -> Self {
        match code {
            21 => Self::PreOpen,
            17 => Self::ReadyToTrade,
            2 => Self::Halt,
            18 => Self::NotAvailable,
            4 => Self::Close,
            26 => Self::PostClose,
            other => Self::Other(other),
        }
    }

    pub const fn code(self) -> u32 {
        match self {
            Self::PreOpen => 21,
            Self::ReadyToTrade => 17,
            Self::Halt => 2,
            Self::NotAvailable => 18,
            Self::Close => 4,
            Self::PostClose => 26,
            Self::Other(code) => code,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreOpen => "pre_open",
            Self::ReadyToTrade => "ready_to_trade",
            Self::Halt => "halt",
            Self::NotAvailable => "not_available",
            Self::Close => "close",
            Self::PostClose => "post_close",
            Self::Other(_) => "other",
        }
    }
}

impl Display for SessionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Other(code) => write!(f, "other({code})"),
            known => f.write_str(known.as_str()),
        }
    }
}

/// One trading session: a phase and the UTC time it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: u32,
    /// Opaque UTC timestamp; the first eight characters are `YYYYMMDD`.
    pub timestamp: String,
    /// Sub-state of a Pre-Open session. `None` when the field was absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupt_code: Option<u32>,
}

impl Session {
    pub fn new(session_id: u32, timestamp: impl Into<String>) -> Self {
        Self {
            session_id,
            timestamp: timestamp.into(),
            interrupt_code: None,
        }
    }

    pub fn with_interrupt(mut self, interrupt_code: u32) -> Self {
        self.interrupt_code = Some(interrupt_code);
        self
    }

    pub const fn kind(&self) -> SessionKind {
        SessionKind::from_code(self.session_id)
    }

    /// Calendar-day prefix of the timestamp, or the whole timestamp if shorter.
    pub fn date_prefix(&self) -> &str {
        self.timestamp
            .get(..DATE_PREFIX_LEN)
            .unwrap_or(self.timestamp.as_str())
    }
}
