use serde::Serialize;

use sessiondiff_core::{
    run_comparison, Classification, CompareOptions, ComparisonEntry, ComparisonSummary,
    EnvelopeError, LoadReport, RunOptions, SecurityStore,
};

use crate::cli::CompareArgs;
use crate::config::{resolve_input, BASELINE_ENV, HOLIDAY_ENV};
use crate::error::CliError;

use super::{to_alignment, to_load_options, CommandResult, LoadSummary};

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    security_group: &'a str,
    product_complex: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

impl<'a> From<&'a ComparisonEntry> for EntryView<'a> {
    fn from(entry: &'a ComparisonEntry) -> Self {
        let (classification, error) = match &entry.outcome {
            Ok(classification) => (Some(*classification), None),
            Err(error) => (None, Some(error.code())),
        };
        Self {
            security_group: &entry.security_group,
            product_complex: &entry.product_complex,
            classification,
            label: classification.map(Classification::label),
            error,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompareResponseData<'a> {
    baseline: LoadSummary,
    holiday: LoadSummary,
    summary: ComparisonSummary,
    entries: Vec<EntryView<'a>>,
}

pub fn run(args: &CompareArgs) -> Result<CommandResult, CliError> {
    let baseline_path = resolve_input(args.baseline.as_ref(), "--baseline", BASELINE_ENV)?;
    let holiday_path = resolve_input(args.holiday.as_ref(), "--holiday", HOLIDAY_ENV)?;
    let alignment = to_alignment(args.align);

    let options = RunOptions {
        load: to_load_options(&args.load),
        compare: CompareOptions { alignment },
    };
    let run = run_comparison(&baseline_path, &holiday_path, &options)?;

    let mut warnings = skipped_line_warnings("baseline", &run.baseline.report);
    warnings.extend(skipped_line_warnings("holiday", &run.holiday.report));

    let errors = run
        .entries
        .iter()
        .filter_map(ComparisonEntry::envelope_error)
        .collect::<Vec<EnvelopeError>>();

    let data = CompareResponseData {
        baseline: LoadSummary::new(&baseline_path, &run.baseline.report, run.baseline.index.len()),
        holiday: LoadSummary::new(&holiday_path, &run.holiday.report, run.holiday.index.len()),
        summary: run.summary,
        entries: run.entries.iter().map(EntryView::from).collect(),
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?)
        .with_warnings(warnings)
        .with_errors(errors)
        .with_alignment(alignment))
}

fn skipped_line_warnings(input: &str, report: &LoadReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|failure| {
            format!(
                "{input} line {}: skipped ({}): {}",
                failure.line,
                failure.error.code(),
                failure.error
            )
        })
        .collect()
}
