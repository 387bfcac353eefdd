//! Rendering of command results.
//!
//! Renderers take their sinks as arguments; `main` passes locked stdout and
//! stderr, tests pass byte buffers.

use std::io::{self, Write};

use serde::Serialize;

use botc_model::{Severity, ValidationResult};

use crate::commands::{GenerateReport, SanitizeReport};

/// Validation report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writes `result` in `format`. Text errors go to `err`, everything else to `out`.
///
/// # Errors
///
/// Propagates write failures on either sink.
pub fn render_validation<O, E>(
    result: &ValidationResult,
    format: ReportFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    match format {
        ReportFormat::Text => render_text(result, out, err),
        ReportFormat::Json => render_json(result, out),
    }
}

pub fn render_text<O, E>(result: &ValidationResult, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    write_tagged(out, Severity::Info, &result.infos)?;
    write_tagged(out, Severity::Warning, &result.warnings)?;
    out.flush()?;
    write_tagged(err, Severity::Error, &result.errors)?;
    err.flush()?;
    writeln!(
        out,
        "[summary] {} error(s), {} warning(s), {} info(s)",
        result.error_count(),
        result.warning_count(),
        result.info_count()
    )
}

fn write_tagged<W: Write>(sink: &mut W, severity: Severity, messages: &[String]) -> io::Result<()> {
    for message in messages {
        writeln!(sink, "[{}] {message}", severity.label())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: &'a [String],
    warnings: &'a [String],
    infos: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    infos: usize,
}

pub fn render_json<O: Write>(result: &ValidationResult, out: &mut O) -> io::Result<()> {
    let report = JsonReport {
        errors: &result.errors,
        warnings: &result.warnings,
        infos: &result.infos,
        summary: JsonSummary {
            errors: result.error_count(),
            warnings: result.warning_count(),
            infos: result.info_count(),
        },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

pub fn render_sanitize<O: Write>(report: &SanitizeReport, out: &mut O) -> io::Result<()> {
    for outcome in &report.outcomes {
        if outcome.skipped_missing {
            writeln!(out, "[warn] skipped missing file: {}", outcome.path.display())?;
            continue;
        }
        let status = if outcome.changed && !report.dry_run {
            "changed"
        } else {
            "checked"
        };
        writeln!(
            out,
            "[ok] {status}: {} (control chars removed={})",
            outcome.path.display(),
            outcome.removed_count
        )?;
    }

    if report.dry_run {
        writeln!(
            out,
            "[summary] scanned {} file(s), found control chars in {} file(s)",
            report.outcomes.len(),
            report.found_count()
        )
    } else {
        writeln!(
            out,
            "[summary] processed {} file(s), updated {} file(s)",
            report.outcomes.len(),
            report.changed_count()
        )
    }
}

pub fn render_generate<O: Write>(report: &GenerateReport, out: &mut O) -> io::Result<()> {
    writeln!(out, "[ok] Generated {} scripts", report.count)?;
    writeln!(out, "[ok] Wrote: {}", report.out.display())
}
