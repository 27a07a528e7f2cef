//! Two-phase comparison run: load both indices, then compare.

use std::path::Path;

use tracing::info;

use crate::compare::{compare_indices, CompareOptions, ComparisonEntry, ComparisonSummary};
use crate::error::CoreError;
use crate::index::SecurityStore;
use crate::loader::{load_index_from_path, LoadOptions, LoadOutcome};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub load: LoadOptions,
    pub compare: CompareOptions,
}

#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub baseline: LoadOutcome,
    pub holiday: LoadOutcome,
    pub entries: Vec<ComparisonEntry>,
    pub summary: ComparisonSummary,
}

impl ComparisonRun {
    /// Compares two already-loaded indices. Both must be fully populated.
    pub fn from_outcomes(baseline: LoadOutcome, holiday: LoadOutcome, options: &CompareOptions) -> Self {
        let entries = compare_indices(&baseline.index, &holiday.index, options);
        let summary = ComparisonSummary::from_entries(&entries);
        Self {
            baseline,
            holiday,
            entries,
            summary,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    pub fn skipped_lines(&self) -> usize {
        self.baseline.report.failures.len() + self.holiday.report.failures.len()
    }
}

pub fn run_comparison(
    baseline_path: impl AsRef<Path>,
    holiday_path: impl AsRef<Path>,
    options: &RunOptions,
) -> Result<ComparisonRun, CoreError> {
    let baseline = load_index_from_path(baseline_path, &options.load)?;
    let holiday = load_index_from_path(holiday_path, &options.load)?;
    info!(
        baseline_groups = baseline.index.len(),
        holiday_groups = holiday.index.len(),
        "both session lists loaded"
    );

    Ok(ComparisonRun::from_outcomes(baseline, holiday, &options.compare))
}
