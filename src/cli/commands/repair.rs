use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use super::super::{
    args::RepairCommand,
    exit_status::ExitStatus,
    report::{self, RepairOutput},
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::AuditContext,
    issues::FileErrorIssue,
    reconcile::{BlockMarkers, Outcome, SourceText, reconcile_all},
};

/// What happened to one block definition in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOutcome {
    /// Start marker of the block definition.
    pub block: String,
    pub outcome: Outcome,
}

/// Repair result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RepairStatus {
    /// Every block definition was reconciled.
    Reconciled {
        outcomes: Vec<BlockOutcome>,
        /// True when the file content changes.
        changed: bool,
    },
    /// A structural problem; the file is left untouched.
    Aborted { reason: String },
    /// The file could not be read or written.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRepair {
    pub file_path: String,
    #[serde(flatten)]
    pub status: RepairStatus,
}

impl FileRepair {
    pub fn is_changed(&self) -> bool {
        matches!(self.status, RepairStatus::Reconciled { changed: true, .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(
            self.status,
            RepairStatus::Aborted { .. } | RepairStatus::Failed { .. }
        )
    }
}

pub fn repair(cmd: RepairCommand) -> Result<ExitStatus> {
    let ctx = AuditContext::new(&cmd.common)?;
    let blocks = block_definitions(&ctx, &cmd)?;

    let files = if cmd.files.is_empty() {
        ctx.discover()?.files
    } else {
        cmd.files.clone()
    };

    let mut repairs: Vec<FileRepair> = files
        .par_iter()
        .map(|path| repair_file(path, &blocks, cmd.apply))
        .collect();
    repairs.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    if ctx.verbose {
        for repair in &repairs {
            if let RepairStatus::Failed { error } = &repair.status {
                eprintln!("Warning: {} - {}", repair.file_path, error);
            }
        }
    }

    let output = RepairOutput {
        applied: cmd.apply,
        files: repairs,
    };
    report::print_repair(&output, cmd.format)?;

    Ok(ExitStatus::from_failures(
        output.files.iter().any(FileRepair::is_failed),
    ))
}

/// Block definitions from `--start/--end/--anchor`, else from the config file.
fn block_definitions(ctx: &AuditContext, cmd: &RepairCommand) -> Result<Vec<BlockMarkers>> {
    let blocks = match (&cmd.start, &cmd.end, &cmd.anchor) {
        (Some(start), Some(end), Some(anchor)) => {
            let markers = BlockMarkers::new(start, end, anchor);
            markers.validate()?;
            vec![markers]
        }
        _ => ctx.config.blocks.clone(),
    };

    if blocks.is_empty() {
        bail!(
            "No block definitions to repair.\n\
             Hint: Pass --start, --end and --anchor, or add 'blocks' to {}.",
            CONFIG_FILE_NAME
        );
    }

    Ok(blocks)
}

fn repair_file(path: &Path, blocks: &[BlockMarkers], apply: bool) -> FileRepair {
    let file_path = path.to_string_lossy().to_string();

    let content = match fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))
    {
        Ok(content) => content,
        Err(e) => return failed(file_path, &e),
    };

    let source = SourceText::parse(&content);
    let reconciled = match reconcile_all(source.lines.as_slice(), blocks) {
        Ok(reconciled) => reconciled,
        Err(e) => {
            return FileRepair {
                file_path,
                status: RepairStatus::Aborted {
                    reason: e.to_string(),
                },
            };
        }
    };

    let changed = reconciled.is_changed();
    if apply && changed {
        let written = fs::write(path, source.render(&reconciled.lines))
            .with_context(|| format!("Failed to write locale file: {:?}", path));
        if let Err(e) = written {
            return failed(file_path, &e);
        }
    }

    let outcomes = reconciled
        .outcomes
        .into_iter()
        .map(|(markers, outcome)| BlockOutcome {
            block: markers.start,
            outcome,
        })
        .collect();

    FileRepair {
        file_path,
        status: RepairStatus::Reconciled { outcomes, changed },
    }
}

fn failed(file_path: String, error: &anyhow::Error) -> FileRepair {
    let issue = FileErrorIssue::new(file_path, error);
    FileRepair {
        file_path: issue.file_path,
        status: RepairStatus::Failed { error: issue.error },
    }
}
