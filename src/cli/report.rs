//! Report formatting and printing utilities.
//!
//! This module renders `check` and `repair` results in cargo-style text or as
//! JSON. Separate from core logic to allow locguard to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::repair::{FileRepair, RepairStatus},
};
use crate::issues::{FileErrorIssue, Issue, Report, ReportLocation, Severity};
use crate::reconcile::Outcome;
use crate::rules::ConsistencyReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Everything `check` found, in print order.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub reference_locale: String,
    pub reference_file: String,
    /// One report per candidate, sorted by locale.
    pub reports: Vec<ConsistencyReport>,
    /// Files that could not be read.
    pub errors: Vec<FileErrorIssue>,
}

/// Everything `repair` did, in print order.
#[derive(Debug, Serialize)]
pub struct RepairOutput {
    /// False for a dry run.
    pub applied: bool,
    /// Sorted by file path.
    pub files: Vec<FileRepair>,
}

pub fn print_check(output: &CheckOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            check_report_to(output, &mut io::stdout().lock());
            Ok(())
        }
        OutputFormat::Json => print_json(output),
    }
}

pub fn print_repair(output: &RepairOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            repair_report_to(output, &mut io::stdout().lock());
            Ok(())
        }
        OutputFormat::Json => print_json(output),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// Print `check` results to a custom writer.
///
/// Each candidate gets a header with its three finding counts followed by
/// its findings; read failures come last, then the summary line.
pub fn check_report_to<W: Write>(output: &CheckOutput, writer: &mut W) {
    let mut all_issues: Vec<Issue> = Vec::new();

    for report in &output.reports {
        print_locale_header(report, writer);

        let issues = report.issues();
        let max_line_width = calculate_max_line_width(&issues);
        for issue in &issues {
            print_issue(issue, writer, max_line_width);
        }
        all_issues.extend(issues);
    }

    let errors: Vec<Issue> = output
        .errors
        .iter()
        .cloned()
        .map(Issue::FileError)
        .collect();
    for issue in &errors {
        print_issue(issue, writer, 1);
    }
    all_issues.extend(errors);

    if all_issues.is_empty() {
        print_success_to(output.reports.len(), &output.reference_locale, writer);
    } else {
        print_summary(&all_issues, writer);
    }
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(locale_files: usize, reference_locale: &str, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} against '{}' - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" },
            reference_locale
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_locale_header<W: Write>(report: &ConsistencyReport, writer: &mut W) {
    let counts = format!(
        "{} missing, {} untranslated, {} title-case",
        report.missing_keys.len(),
        report.suspected_untranslated.len(),
        report.casing_anomalies.len()
    );
    let counts = if report.is_clean() {
        counts.green()
    } else {
        counts.yellow()
    };

    let _ = writeln!(
        writer,
        "{} {} {}: {}",
        report.locale.bold(),
        "vs".dimmed(),
        report.reference_locale.bold(),
        counts
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), report.file_path);
    let _ = writeln!(writer);
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

/// Print `repair` results to a custom writer.
pub fn repair_report_to<W: Write>(output: &RepairOutput, writer: &mut W) {
    for file in &output.files {
        print_file_repair(file, output.applied, writer);
    }

    let changed = output.files.iter().filter(|f| f.is_changed()).count();
    let failed = output.files.iter().filter(|f| f.is_failed()).count();

    if !output.files.is_empty() {
        let _ = writeln!(writer);
    }

    if changed > 0 {
        if output.applied {
            let _ = writeln!(
                writer,
                "{} {} file(s).",
                "Repaired".green().bold(),
                changed
            );
        } else {
            let _ = writeln!(
                writer,
                "{} {} file(s).",
                "Would repair".yellow().bold(),
                changed
            );
            let _ = writeln!(
                writer,
                "Run with {} to write these changes.",
                "--apply".cyan()
            );
        }
    } else if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - nothing to repair",
                output.files.len(),
                if output.files.len() == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    }

    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be repaired and were left unchanged",
            FAILURE_MARK.red(),
            failed
        );
    }
}

fn print_file_repair<W: Write>(file: &FileRepair, applied: bool, writer: &mut W) {
    match &file.status {
        RepairStatus::Reconciled { outcomes, .. } => {
            let _ = writeln!(writer, "{}", file.file_path.bold());
            for outcome in outcomes {
                let _ = writeln!(
                    writer,
                    "  {}  {}",
                    outcome.block.cyan(),
                    describe_outcome(&outcome.outcome, applied)
                );
            }
        }
        RepairStatus::Aborted { reason } => {
            let _ = writeln!(writer, "{}", file.file_path.bold());
            let _ = writeln!(writer, "  {} {}", "error:".bold().red(), reason);
        }
        RepairStatus::Failed { error } => {
            let _ = writeln!(writer, "{}", file.file_path.bold());
            let _ = writeln!(writer, "  {} {}", "error:".bold().red(), error);
        }
    }
}

fn describe_outcome(outcome: &Outcome, applied: bool) -> String {
    match outcome {
        Outcome::NotFound => "not found".dimmed().to_string(),
        Outcome::AlreadyPlaced { block } => {
            format!("already in place (lines {})", block.display_range())
        }
        Outcome::Moved { from, to } => format!(
            "{} lines {} to line {}",
            if applied { "moved" } else { "would move" }.yellow(),
            from.display_range(),
            to + 1
        ),
        Outcome::Deduplicated { kept, removed, to } => format!(
            "{} kept lines {}, removed lines {}, placed at line {}",
            if applied {
                "deduplicated:"
            } else {
                "would deduplicate:"
            }
            .yellow(),
            kept.display_range(),
            removed.display_range(),
            to + 1
        ),
    }
}

// ============================================================
// Tests
// ============================================================
