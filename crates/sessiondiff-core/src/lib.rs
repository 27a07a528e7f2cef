//! Core contracts for sessiondiff.
//!
//! This crate contains:
//! - A cursor and decoder for SOH-delimited trading session list lines
//! - Security / calendar date / session domain models
//! - A last-write-wins security index and the line loader that fills it
//! - The holiday schedule comparator and its classifications
//! - Response envelope and structured errors

pub mod compare;
pub mod cursor;
pub mod decoder;
pub mod domain;
pub mod encoder;
pub mod envelope;
pub mod error;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod tags;

pub use compare::{
    compare, compare_indices, compare_with, is_three_day_date, Alignment, Classification,
    CompareOptions, ComparisonEntry, ComparisonSummary,
};
pub use cursor::{Label, TokenCursor, SOH};
pub use decoder::decode_line;
pub use domain::{CalendarDate, Security, Session, SessionKind, UtcDateTime};
pub use encoder::encode_security;
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CompareError, CoreError, DecodeError, LoadError, ValidationError};
pub use index::{SecurityIndex, SecurityStore};
pub use loader::{
    load_index, load_index_from_path, load_lines, LineFailure, LoadOptions, LoadOutcome,
    LoadReport, MalformedLinePolicy,
};
pub use pipeline::{run_comparison, ComparisonRun, RunOptions};
