use thiserror::Error;

/// Reasons a single tag-value line fails to decode.
///
/// Any variant aborts the whole line; the destination index is never touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no SOH terminator after byte offset {offset}")]
    TerminatorMissing { offset: usize },

    #[error("field '{field}' at byte offset {offset} has no '=' separator")]
    MalformedField { offset: usize, field: String },

    #[error("field '{field}' expected an unsigned integer, got '{value}'")]
    NumericFieldInvalid { field: &'static str, value: String },

    #[error("{group} group declared {declared} entries but only {found} are present")]
    GroupCountMismatch {
        group: &'static str,
        declared: usize,
        found: usize,
    },

    #[error("line ended before field '{field}'")]
    UnexpectedEnd { field: &'static str },

    #[error("line is not valid UTF-8 after byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}

impl DecodeError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TerminatorMissing { .. } => "terminator_missing",
            Self::MalformedField { .. } => "malformed_field",
            Self::NumericFieldInvalid { .. } => "numeric_field_invalid",
            Self::GroupCountMismatch { .. } => "group_count_mismatch",
            Self::UnexpectedEnd { .. } => "unexpected_end",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
        }
    }
}

/// Failures surfaced by the schedule comparator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("security group '{key}' is missing from the holiday index")]
    UnknownKey { key: String },

    #[error("security group '{key}': holiday has no date at index {index} (holds {len})")]
    DateIndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },
}

impl CompareError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "unknown_key",
            Self::DateIndexOutOfRange { .. } => "date_index_out_of_range",
        }
    }
}

/// Failures while building an index from a line source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

/// Validation and contract errors for report metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("invalid alignment '{value}', expected one of positional, by-date")]
    InvalidAlignment { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
