use serde::Serialize;

use sessiondiff_core::{load_index_from_path, EnvelopeError, Security, SecurityStore};

use crate::cli::InspectArgs;
use crate::error::CliError;

use super::{to_load_options, CommandResult, LoadSummary};

#[derive(Debug, Serialize)]
struct InspectResponseData<'a> {
    file: LoadSummary,
    securities: Vec<&'a Security>,
}

pub fn run(args: &InspectArgs) -> Result<CommandResult, CliError> {
    let outcome = load_index_from_path(&args.path, &to_load_options(&args.load))?;

    let securities = match &args.group {
        Some(key) => {
            let security = outcome
                .index
                .get(key)
                .ok_or_else(|| CliError::UnknownGroup { key: key.clone() })?;
            vec![security]
        }
        None => outcome.index.iter().map(|(_, security)| security).collect(),
    };

    let errors = outcome
        .report
        .failures
        .iter()
        .map(EnvelopeError::from)
        .collect::<Vec<_>>();

    let data = InspectResponseData {
        file: LoadSummary::new(&args.path, &outcome.report, outcome.index.len()),
        securities,
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_errors(errors))
}
