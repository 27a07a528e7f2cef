mod compare;
mod inspect;

use serde::Serialize;
use serde_json::Value;
use sessiondiff_core::{
    Alignment, Envelope, EnvelopeError, EnvelopeMeta, LoadOptions, LoadReport,
    MalformedLinePolicy,
};
use tracing::debug;
use uuid::Uuid;

use crate::cli::{AlignArg, Cli, Command, LoadArgs, MalformedArg};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub alignment: Option<Alignment>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            alignment: None,
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Load statistics for one input file.
#[derive(Debug, Serialize)]
pub struct LoadSummary {
    pub path: String,
    pub lines_read: usize,
    pub decoded: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub groups: usize,
}

impl LoadSummary {
    pub fn new(path: &std::path::Path, report: &LoadReport, groups: usize) -> Self {
        Self {
            path: path.display().to_string(),
            lines_read: report.lines_read,
            decoded: report.decoded,
            overwritten: report.overwritten,
            skipped: report.failures.len(),
            groups,
        }
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Compare(args) => compare::run(args)?,
        Command::Inspect(args) => inspect::run(args)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        alignment,
    } = command_result;
    debug!(
        warnings = warnings.len(),
        errors = errors.len(),
        "command finished"
    );

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION)?;
    if let Some(alignment) = alignment {
        meta = meta.with_alignment(alignment);
    }
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn to_load_options(args: &LoadArgs) -> LoadOptions {
    LoadOptions {
        on_malformed: match args.on_malformed {
            MalformedArg::Skip => MalformedLinePolicy::Skip,
            MalformedArg::Halt => MalformedLinePolicy::Halt,
        },
        parallel: args.parallel,
    }
}

fn to_alignment(align: AlignArg) -> Alignment {
    match align {
        AlignArg::Positional => Alignment::Positional,
        AlignArg::ByDate => Alignment::ByDate,
    }
}
