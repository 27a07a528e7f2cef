use std::io::{self, Write};

use serde_json::{json, Value};
use sessiondiff_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => render_ndjson(&mut out, envelope)?,
        OutputFormat::Table => render_table(&mut out, envelope)?,
    }

    Ok(())
}

/// Meta line first, then one line per comparison entry or record, then errors.
fn render_ndjson<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "{}", serde_json::to_string(&json!({ "meta": envelope.meta }))?)?;

    match rows(&envelope.data) {
        Some(rows) => {
            for row in rows {
                writeln!(out, "{}", serde_json::to_string(row)?)?;
            }
        }
        None => writeln!(out, "{}", serde_json::to_string(&envelope.data)?)?,
    }

    for error in &envelope.errors {
        writeln!(out, "{}", serde_json::to_string(&json!({ "error": error }))?)?;
    }

    Ok(())
}

fn render_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    if let Some(alignment) = envelope.meta.alignment {
        writeln!(out, "alignment   : {alignment}")?;
    }

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    match envelope.data.get("entries").and_then(Value::as_array) {
        Some(entries) => {
            for entry in entries {
                let product = text(entry, "product_complex");
                let group = text(entry, "security_group");
                let verdict = entry
                    .get("label")
                    .or_else(|| entry.get("error"))
                    .and_then(Value::as_str)
                    .unwrap_or("-");
                writeln!(out, "{product} [{group}]")?;
                writeln!(out, "   {verdict}")?;
            }
        }
        None => {
            writeln!(out, "data:")?;
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            for line in pretty_data.lines() {
                writeln!(out, "  {line}")?;
            }
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            writeln!(out, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}

fn rows(data: &Value) -> Option<&Vec<Value>> {
    data.get("entries")
        .or_else(|| data.get("securities"))
        .and_then(Value::as_array)
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}
