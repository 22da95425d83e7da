//! Duplicate block reconciliation.
//!
//! A *block* is a contiguous run of lines starting at a line containing the
//! start marker and ending at the nearest following line containing the end
//! marker. Merge accidents and botched edits leave locale files with two
//! copies of a block, or with the block far from its section. [`reconcile`]
//! restores the invariant: exactly one copy, placed immediately after the
//! anchor line.
//!
//! ## Algorithm
//!
//! ```text
//! locate   every line containing the start marker
//! bound    each start to its end marker (or truncate a stray copy)
//! classify 0 → not found, 1 → move, 2 → deduplicate, >2 → ambiguous
//! rewrite  slice the input around the blocks, insert survivor after anchor
//! ```
//!
//! Reconciliation is a pure transform over lines; callers persist the result.
//! When two copies differ, the survivor is kept verbatim and the other copy
//! is dropped: there is no per-entry merge.

mod source;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::parsers::entry::parse_entry_line;

pub use source::SourceText;

/// Markers identifying a block and its canonical position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockMarkers {
    /// Substring of the block's first line (e.g. `'comfort.modal.title':`).
    pub start: String,
    /// Substring of the block's last line (e.g. `'comfort.modal.summary':`).
    pub end: String,
    /// Substring of the line the block must follow (e.g. `// Comfort Score Modal`).
    pub anchor: String,
}

impl BlockMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            anchor: anchor.into(),
        }
    }

    /// Empty markers would match every line.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        for (name, marker) in [
            ("start", &self.start),
            ("end", &self.end),
            ("anchor", &self.anchor),
        ] {
            if marker.is_empty() {
                return Err(ReconcileError::EmptyMarker { name });
            }
        }
        Ok(())
    }
}

/// An inclusive line range `[start, end]` (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub start: usize,
    pub end: usize,
    /// False for a stray copy cut short before its end marker.
    pub terminated: bool,
}

impl Block {
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }

    /// 1-indexed line range for display, e.g. `12-18`.
    pub fn display_range(&self) -> String {
        format!("{}-{}", self.start + 1, self.end + 1)
    }
}

/// What reconciliation did to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Outcome {
    /// The start marker does not occur; nothing to do.
    NotFound,
    /// The only copy already follows the anchor.
    AlreadyPlaced { block: Block },
    /// The only copy was cut and reinserted after the anchor.
    Moved { from: Block, to: usize },
    /// One copy was kept (placed after the anchor), the other removed.
    Deduplicated {
        kept: Block,
        removed: Block,
        to: usize,
    },
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Moved { .. } | Outcome::Deduplicated { .. })
    }
}

/// Structural problems that stop reconciliation of a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("unterminated block: '{start}' at line {line} has no following '{end}'")]
    Unterminated {
        start: String,
        end: String,
        line: usize,
    },
    #[error("no anchor: '{anchor}' not found")]
    NoAnchor { anchor: String },
    #[error("anchor '{anchor}' at line {line} lies inside a block")]
    AnchorInsideBlock { anchor: String, line: usize },
    #[error("ambiguous duplication: '{start}' occurs {count} times")]
    AmbiguousDuplication { start: String, count: usize },
    #[error("{name} marker must not be empty")]
    EmptyMarker { name: &'static str },
}

/// Rewritten lines together with the action taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub lines: Vec<String>,
    pub outcome: Outcome,
}

/// Reconcile one block definition in `lines`.
///
/// On error the caller should leave the file untouched.
pub fn reconcile<S: AsRef<str>>(
    lines: &[S],
    markers: &BlockMarkers,
) -> Result<Reconciled, ReconcileError> {
    markers.validate()?;

    let starts = locate_starts(lines, &markers.start);
    if starts.is_empty() {
        return Ok(Reconciled {
            lines: to_owned_lines(lines),
            outcome: Outcome::NotFound,
        });
    }
    if starts.len() > 2 {
        return Err(ReconcileError::AmbiguousDuplication {
            start: markers.start.clone(),
            count: starts.len(),
        });
    }

    let blocks = bound_all(lines, &starts, markers)?;

    let anchor = lines
        .iter()
        .position(|line| line.as_ref().contains(&markers.anchor))
        .ok_or_else(|| ReconcileError::NoAnchor {
            anchor: markers.anchor.clone(),
        })?;
    if blocks.iter().any(|b| b.contains(anchor)) {
        return Err(ReconcileError::AnchorInsideBlock {
            anchor: markers.anchor.clone(),
            line: anchor + 1,
        });
    }

    match blocks.as_slice() {
        [block] if block.start == anchor + 1 => Ok(Reconciled {
            lines: to_owned_lines(lines),
            outcome: Outcome::AlreadyPlaced { block: *block },
        }),
        [block] => {
            let (lines, to) = rewrite(lines, &blocks, *block, anchor);
            Ok(Reconciled {
                lines,
                outcome: Outcome::Moved { from: *block, to },
            })
        }
        [first, second] => {
            let (kept, removed) = pick_survivor(*first, *second);
            let (lines, to) = rewrite(lines, &blocks, kept, anchor);
            Ok(Reconciled {
                lines,
                outcome: Outcome::Deduplicated { kept, removed, to },
            })
        }
        // locate_starts yields at most two starts past the checks above
        _ => Err(ReconcileError::AmbiguousDuplication {
            start: markers.start.clone(),
            count: blocks.len(),
        }),
    }
}

/// Result of applying several block definitions to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReconciliation {
    pub lines: Vec<String>,
    /// One outcome per block definition, in the order they were applied.
    pub outcomes: Vec<(BlockMarkers, Outcome)>,
}

impl FileReconciliation {
    pub fn is_changed(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_change())
    }
}

/// Apply each block definition in turn; the first error aborts the file.
pub fn reconcile_all<S: AsRef<str>>(
    lines: &[S],
    blocks: &[BlockMarkers],
) -> Result<FileReconciliation, ReconcileError> {
    let mut current = to_owned_lines(lines);
    let mut outcomes = Vec::with_capacity(blocks.len());

    for markers in blocks {
        let reconciled = reconcile(current.as_slice(), markers)?;
        current = reconciled.lines;
        outcomes.push((markers.clone(), reconciled.outcome));
    }

    Ok(FileReconciliation {
        lines: current,
        outcomes,
    })
}

fn to_owned_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|l| l.as_ref().to_string()).collect()
}

fn locate_starts<S: AsRef<str>>(lines: &[S], marker: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_ref().contains(marker))
        .map(|(idx, _)| idx)
        .collect()
}

/// Find the end marker of each block.
///
/// The search stops at the next start; a copy with no end marker before it is
/// a stray copy (`None`). The last copy must be terminated.
fn bound_blocks<S: AsRef<str>>(
    lines: &[S],
    starts: &[usize],
    markers: &BlockMarkers,
) -> Result<Vec<Option<Block>>, ReconcileError> {
    let mut blocks = Vec::with_capacity(starts.len());

    for (n, &start) in starts.iter().enumerate() {
        let next_start = starts.get(n + 1).copied();
        let limit = next_start.unwrap_or(lines.len());

        let end = (start..limit).find(|&idx| lines[idx].as_ref().contains(&markers.end));
        let block = match (end, next_start) {
            (Some(end), _) => Some(Block {
                start,
                end,
                terminated: true,
            }),
            (None, None) => {
                return Err(ReconcileError::Unterminated {
                    start: markers.start.clone(),
                    end: markers.end.clone(),
                    line: start + 1,
                });
            }
            (None, Some(_)) => None,
        };
        blocks.push(block);
    }

    Ok(blocks)
}

/// Bound every copy.
///
/// A stray copy extends over the following entry lines whose key also occurs
/// in a terminated copy, and stops at the first line that does not.
fn bound_all<S: AsRef<str>>(
    lines: &[S],
    starts: &[usize],
    markers: &BlockMarkers,
) -> Result<Vec<Block>, ReconcileError> {
    let bounded = bound_blocks(lines, starts, markers)?;

    let known: HashSet<&str> = bounded
        .iter()
        .flatten()
        .flat_map(|b| &lines[b.start..=b.end])
        .filter_map(|line| parse_entry_line(line.as_ref()).map(|(key, _)| key))
        .collect();

    Ok(bounded
        .into_iter()
        .enumerate()
        .map(|(n, block)| {
            block.unwrap_or_else(|| {
                let start = starts[n];
                let limit = starts.get(n + 1).copied().unwrap_or(lines.len());
                let mut end = start;
                while end + 1 < limit && is_shared_entry(lines[end + 1].as_ref(), &known) {
                    end += 1;
                }
                Block {
                    start,
                    end,
                    terminated: false,
                }
            })
        })
        .collect())
}

fn is_shared_entry(line: &str, known: &HashSet<&str>) -> bool {
    parse_entry_line(line).is_some_and(|(key, _)| known.contains(key))
}

/// Choose which of two copies survives: a terminated copy over a stray one,
/// then the longer copy, then the later one.
fn pick_survivor(first: Block, second: Block) -> (Block, Block) {
    let rank = |b: &Block| (b.terminated, b.line_count(), b.start);
    if rank(&first) > rank(&second) {
        (first, second)
    } else {
        (second, first)
    }
}

/// Drop every block range from `lines` and insert `kept`'s original lines
/// right after the anchor line.
///
/// Returns the new lines and the index where the kept block now starts.
fn rewrite<S: AsRef<str>>(
    lines: &[S],
    blocks: &[Block],
    kept: Block,
    anchor: usize,
) -> (Vec<String>, usize) {
    let kept_lines = &lines[kept.start..=kept.end];

    let mut cuts = blocks.to_vec();
    cuts.sort_by_key(|b| b.start);

    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut inserted_at = 0;
    let mut cursor = 0;

    let mut append = |out: &mut Vec<String>, from: usize, to: usize| {
        if (from..to).contains(&anchor) {
            out.extend(to_owned_lines(&lines[from..=anchor]));
            inserted_at = out.len();
            out.extend(to_owned_lines(kept_lines));
            out.extend(to_owned_lines(&lines[anchor + 1..to]));
        } else {
            out.extend(to_owned_lines(&lines[from..to]));
        }
    };

    for block in &cuts {
        append(&mut out, cursor, block.start);
        cursor = block.end + 1;
    }
    append(&mut out, cursor, lines.len());

    (out, inserted_at)
}
