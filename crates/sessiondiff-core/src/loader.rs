//! Builds a [`SecurityIndex`] from a line source.
//!
//! Lines decode independently, so decoding may fan out across threads; the
//! merge into the index always runs sequentially in line order, which keeps
//! last-write-wins identical to a single-threaded load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::decoder::decode_line;
use crate::domain::Security;
use crate::error::{DecodeError, LoadError};
use crate::index::{SecurityIndex, SecurityStore};

/// What to do with a line that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Record the failure in the report and keep going.
    #[default]
    Skip,
    /// Stop at the first failure.
    Halt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub on_malformed: MalformedLinePolicy,
    pub parallel: bool,
}

/// A line that was skipped under [`MalformedLinePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based.
    pub line: usize,
    pub error: DecodeError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    pub decoded: usize,
    pub overwritten: usize,
    pub failures: Vec<LineFailure>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub index: SecurityIndex,
    pub report: LoadReport,
}

pub fn load_index_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<LoadOutcome, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    info!(path = %path.display(), "loading session list");
    load_index(BufReader::new(file), options)
}

/// Reads raw lines from `reader`. A line that is not UTF-8 fails on its own
/// and is handled by the malformed-line policy like any decode failure.
pub fn load_index<R: BufRead>(reader: R, options: &LoadOptions) -> Result<LoadOutcome, LoadError> {
    let lines = reader
        .split(b'\n')
        .map(|raw| raw.map(into_text))
        .collect::<Result<Vec<_>, _>>()?;

    let decoded = decode_all(&lines, options.parallel, |idx, line| match line {
        Ok(text) => decode_numbered(idx, text),
        Err(error) => Some((idx + 1, Err(error.clone()))),
    });
    merge(lines.len(), decoded, options)
}

/// Decodes and indexes already-read lines. Blank lines are ignored.
pub fn load_lines<S>(lines: &[S], options: &LoadOptions) -> Result<LoadOutcome, LoadError>
where
    S: AsRef<str> + Sync,
{
    let decoded = decode_all(lines, options.parallel, |idx, line| {
        decode_numbered(idx, line.as_ref())
    });
    merge(lines.len(), decoded, options)
}

type NumberedDecode = (usize, Result<Security, DecodeError>);

fn decode_all<T, F>(lines: &[T], parallel: bool, decode: F) -> Vec<NumberedDecode>
where
    T: Sync,
    F: Fn(usize, &T) -> Option<NumberedDecode> + Sync + Send,
{
    if parallel {
        lines
            .par_iter()
            .enumerate()
            .filter_map(|(idx, line)| decode(idx, line))
            .collect()
    } else {
        lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| decode(idx, line))
            .collect()
    }
}

fn merge(
    lines_read: usize,
    decoded: Vec<NumberedDecode>,
    options: &LoadOptions,
) -> Result<LoadOutcome, LoadError> {
    let mut outcome = LoadOutcome::default();
    outcome.report.lines_read = lines_read;

    for (line, result) in decoded {
        match result {
            Ok(security) => {
                outcome.report.decoded += 1;
                if outcome.index.insert(security).is_some() {
                    outcome.report.overwritten += 1;
                }
            }
            Err(error) => match options.on_malformed {
                MalformedLinePolicy::Halt => return Err(LoadError::Decode { line, source: error }),
                MalformedLinePolicy::Skip => {
                    warn!(line, code = error.code(), %error, "skipping malformed line");
                    outcome.report.failures.push(LineFailure { line, error });
                }
            },
        }
    }

    info!(
        lines = outcome.report.lines_read,
        decoded = outcome.report.decoded,
        overwritten = outcome.report.overwritten,
        skipped = outcome.report.failures.len(),
        groups = outcome.index.len(),
        "session list loaded"
    );

    Ok(outcome)
}

fn into_text(raw: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(raw).map_err(|error| DecodeError::InvalidUtf8 {
        offset: error.utf8_error().valid_up_to(),
    })
}

fn decode_numbered(idx: usize, line: &str) -> Option<NumberedDecode> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return None;
    }
    Some((idx + 1, decode_line(line)))
}
