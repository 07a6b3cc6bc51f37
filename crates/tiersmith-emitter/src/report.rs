use std::path::PathBuf;

use crate::error::EmitError;
use crate::writer::WriteOutcome;

/// One write that failed; the batch keeps going past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a generation run: what was written, what was skipped and
/// why, and which writes failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub skipped_existing: Vec<PathBuf>,
    /// Tables skipped because no column is flagged primary key.
    pub missing_primary_key: Vec<String>,
    /// Templates that resolved to empty content, each listed once.
    pub missing_templates: Vec<String>,
    pub failed: Vec<FailedWrite>,
}

impl GenerateReport {
    pub fn record_outcome(&mut self, path: PathBuf, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => self.written.push(path),
            WriteOutcome::SkippedExisting => self.skipped_existing.push(path),
        }
    }

    pub fn record_failure(&mut self, path: PathBuf, err: EmitError) {
        self.failed.push(FailedWrite {
            path,
            reason: err.to_string(),
        });
    }

    pub fn record_missing_primary_key(&mut self, table: &str) {
        self.missing_primary_key.push(table.to_string());
    }

    pub fn record_missing_template(&mut self, name: &str) {
        if !self.missing_templates.iter().any(|n| n == name) {
            self.missing_templates.push(name.to_string());
        }
    }

    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_existing.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
