// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Outcomes and Exit Codes
//!
//! The tool is meant to run as a pre-commit hook, where the exit code is the
//! signal: `1` tells the hook runner that files were rewritten and need to be
//! re-staged. Inside the crate outcomes stay typed; they only become numbers
//! in the binary.
//!
//! | situation                       | exit code |
//! |---------------------------------|-----------|
//! | nothing modified (or all skipped) | `0`     |
//! | at least one schema modified    | `1`       |
//! | fatal setup error               | `2`       |
//! | interrupted (Ctrl-C)            | `130`     |

use std::path::PathBuf;

use crate::error::DriverError;

/// Exit code when no document was modified
pub const EXIT_UNCHANGED: u8 = 0;

/// Exit code when at least one document was modified
pub const EXIT_MODIFIED: u8 = 1;

/// Exit code for fatal errors outside per-input processing
pub const EXIT_FATAL: u8 = 2;

/// Exit code after an interrupt
pub const EXIT_INTERRUPTED: u8 = 130;

/// Why an input produced no work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The model SQL does not exist
    MissingSql,
    /// No schema document sits next to the SQL
    MissingSchema,
    /// The SQL selects no nameable columns
    NoColumns,
}

/// Result of processing one input path
#[derive(Debug)]
pub enum FileOutcome {
    /// Nothing to do; no output
    Skipped(SkipReason),

    /// Schema already in SQL order
    Unchanged,

    /// Schema rewritten
    Reordered {
        /// The document that was written
        yaml: PathBuf,
        /// Number of columns the SQL selects
        columns: usize,
    },

    /// Processing failed; the batch continues
    Failed(DriverError),
}

impl FileOutcome {
    /// Whether a document was written
    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Reordered { .. })
    }
}

/// Aggregate result of a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No document changed
    Unchanged,
    /// At least one document changed
    Modified,
}

impl RunOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Unchanged => EXIT_UNCHANGED,
            RunOutcome::Modified => EXIT_MODIFIED,
        }
    }
}

/// Every input of a run with its outcome, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<(PathBuf, FileOutcome)>,
}

impl RunReport {
    /// Record the outcome for `input`
    pub fn push(&mut self, input: PathBuf, outcome: FileOutcome) {
        self.results.push((input, outcome));
    }

    /// `Modified` if any input rewrote its schema
    pub fn outcome(&self) -> RunOutcome {
        if self.results.iter().any(|(_, outcome)| outcome.is_modified()) {
            RunOutcome::Modified
        } else {
            RunOutcome::Unchanged
        }
    }

    /// Number of documents written
    pub fn modified_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| outcome.is_modified())
            .count()
    }

    /// Number of inputs that failed
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FileOutcome::Failed(_)))
            .count()
    }
}
