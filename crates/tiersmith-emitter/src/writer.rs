//! Artifact persistence with the skip-if-exists idempotence contract.

use std::fs;
use std::path::Path;

use crate::error::EmitError;

/// What happened to one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    SkippedExisting,
}

/// Write `content` to `path`, creating parent directories on demand.
///
/// An existing file is left untouched unless `overwrite` is set; with it,
/// the file is truncated and rewritten. Repeated calls with
/// `overwrite == false` are a no-op. `fs::write` opens, writes, and
/// closes in one scope, so handles are released on every exit path.
pub fn write_artifact(
    path: &Path,
    content: &str,
    overwrite: bool,
) -> Result<WriteOutcome, EmitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| EmitError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if path.exists() && !overwrite {
        return Ok(WriteOutcome::SkippedExisting);
    }

    fs::write(path, content).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WriteOutcome::Written)
}
