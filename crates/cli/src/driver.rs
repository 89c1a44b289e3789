// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Batch Driver
//!
//! Processes command-line inputs one after another:
//!
//! ```text
//! input ──→ resolve pair ──→ read SQL ──→ clean + extract ──→ reorder_file
//!              │ missing         │               │ no columns
//!              └──→ skip         └──→ error      └──→ skip
//! ```
//!
//! Skips are silent (logged at `debug` only). A failure for one input is
//! reported on the error stream and the batch continues.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use yaml_reorder_schema::{Reconciliation, reorder_file};
use yaml_reorder_sql::columns_from_model_sql;

use crate::config::ReorderConfig;
use crate::error::{DriverError, DriverResult};
use crate::outcome::{FileOutcome, RunReport, SkipReason};
use crate::pairing;

/// Runs reconciliation over a batch of inputs
#[derive(Debug, Clone)]
pub struct Driver {
    config: ReorderConfig,
}

impl Driver {
    /// Create a driver with the given configuration
    pub fn new(config: ReorderConfig) -> Self {
        Self { config }
    }

    /// Process every input, printing to stdout and stderr
    pub fn run(&self, inputs: &[PathBuf]) -> RunReport {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(inputs, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Process every input, writing confirmations to `out` and errors to `err`
    pub fn run_with(
        &self,
        inputs: &[PathBuf],
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> RunReport {
        let mut report = RunReport::default();

        for input in inputs {
            let outcome = self.process(input);

            // Console output is best effort; a closed pipe must not abort the batch
            match &outcome {
                FileOutcome::Reordered { yaml, columns, .. } => {
                    let _ = writeln!(out, "✓ Reordered {} columns in {}", columns, yaml.display());
                }
                FileOutcome::Failed(error) => {
                    let _ = writeln!(err, "Error processing {}: {}", input.display(), error);
                }
                FileOutcome::Skipped(_) | FileOutcome::Unchanged => {}
            }

            report.push(input.clone(), outcome);
        }

        debug!(
            "Processed {} inputs: {} modified, {} failed",
            inputs.len(),
            report.modified_count(),
            report.failed_count()
        );
        report
    }

    /// Process a single input path
    pub fn process(&self, input: &Path) -> FileOutcome {
        match self.try_process(input) {
            Ok(outcome) => outcome,
            Err(error) => {
                // Reported once on stderr by `run_with`
                debug!("Failed to process {}: {}", input.display(), error);
                FileOutcome::Failed(error)
            }
        }
    }

    fn try_process(&self, input: &Path) -> DriverResult<FileOutcome> {
        let pair = pairing::resolve(input);

        if !pair.sql.exists() {
            debug!("Skipping {}: no model SQL at {}", input.display(), pair.sql.display());
            return Ok(FileOutcome::Skipped(SkipReason::MissingSql));
        }

        let Some(yaml) = pair.yaml else {
            debug!("Skipping {}: no schema document", input.display());
            return Ok(FileOutcome::Skipped(SkipReason::MissingSchema));
        };

        let sql = fs::read_to_string(&pair.sql).map_err(|source| DriverError::ReadSql {
            path: pair.sql.clone(),
            source,
        })?;

        let columns = columns_from_model_sql(&sql, self.config.dialect)?;
        if columns.is_empty() {
            debug!("Skipping {}: no columns selected", input.display());
            return Ok(FileOutcome::Skipped(SkipReason::NoColumns));
        }
        debug!("{} selects {:?}", pair.sql.display(), columns);

        match reorder_file(&yaml, &columns)? {
            Reconciliation::Unchanged => Ok(FileOutcome::Unchanged),
            Reconciliation::Reordered { .. } => {
                info!("Reordered {}", yaml.display());
                Ok(FileOutcome::Reordered {
                    yaml,
                    columns: columns.len(),
                })
            }
        }
    }
}
