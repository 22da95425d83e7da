use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{self, CheckOutput},
};
use crate::{
    core::{AuditContext, context::locale_for, parsers::entry::parse_locale_file},
    issues::FileErrorIssue,
    rules::{ConsistencyReport, analyze_with},
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = AuditContext::new(&cmd.common)?;

    let (reference_path, candidate_paths) = select_files(&ctx, &cmd)?;
    let allow_list = ctx.allow_list(&cmd.allow);
    let thresholds = ctx.config.thresholds();

    let reference_locale = locale_for(&reference_path);
    let reference = match parse_locale_file(&reference_path, &reference_locale) {
        Ok(table) => table,
        Err(e) => {
            let issue = FileErrorIssue::new(reference_path.to_string_lossy(), &e);
            let output = CheckOutput {
                reference_locale,
                reference_file: issue.file_path.clone(),
                reports: Vec::new(),
                errors: vec![issue],
            };
            report::print_check(&output, cmd.format)?;
            return Ok(ExitStatus::Failure);
        }
    };

    if ctx.verbose {
        eprintln!(
            "Note: reference '{}' ({} entries) from {}",
            reference.locale(),
            reference.len(),
            reference.file_path()
        );
    }

    let loaded = ctx.load_tables(&candidate_paths);

    let reports: Vec<ConsistencyReport> = loaded
        .tables
        .par_iter()
        .map(|candidate| analyze_with(&reference, candidate, &allow_list, &thresholds))
        .collect();

    let output = CheckOutput {
        reference_locale: reference.locale().to_string(),
        reference_file: reference.file_path().to_string(),
        reports,
        errors: loaded.errors,
    };
    report::print_check(&output, cmd.format)?;

    Ok(ExitStatus::from_failures(!output.errors.is_empty()))
}

/// Resolve the reference file and candidate files, discovering whatever the
/// command line leaves out.
fn select_files(ctx: &AuditContext, cmd: &CheckCommand) -> Result<(PathBuf, Vec<PathBuf>)> {
    if let Some(reference) = &cmd.reference
        && !cmd.candidates.is_empty()
    {
        return Ok((reference.clone(), cmd.candidates.clone()));
    }

    let discovered = ctx.discover()?.files;
    let reference = match &cmd.reference {
        Some(reference) => reference.clone(),
        None => ctx.find_reference(&discovered)?,
    };

    let candidates = if cmd.candidates.is_empty() {
        let reference_locale = locale_for(&reference);
        discovered
            .into_iter()
            .filter(|path| locale_for(path) != reference_locale)
            .collect()
    } else {
        cmd.candidates.clone()
    };

    Ok((reference, candidates))
}
