//! Single-file processing: read, transform, compare, write.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::{StepError, pipeline_for};
use crate::core::FileType;
use crate::digest::ContentHash;

/// Knobs for a processing pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Compute outcomes without writing anything.
    pub dry_run: bool,
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No pipeline for the extension. The file was not read.
    Skipped,
    /// The pipeline produced identical content. Nothing was written.
    Unchanged,
    /// The content changed and was written back (or would be, in dry-run).
    Saved,
}

/// Per-file failures. None of them stop the batch.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("cannot read file: {0}")]
    Read(io::Error),

    #[error("cannot transform file: {0}")]
    Transform(StepError),

    #[error("cannot write file: {0}")]
    Write(io::Error),
}

/// Process one file with the pipeline registered for `extension`.
///
/// Writes at most once, and only when the transformed content differs
/// from what was read. The write replaces the whole file.
pub fn process_file(
    path: &Path,
    extension: &str,
    options: ProcessOptions,
) -> Result<Outcome, ProcessError> {
    let Some(pipeline) = pipeline_for(extension) else {
        return Ok(Outcome::Skipped);
    };
    let context = FileType::classify(extension);

    let original = fs::read_to_string(path).map_err(ProcessError::Read)?;
    let transformed = pipeline
        .run(&original, context)
        .map_err(ProcessError::Transform)?;

    if ContentHash::of(&original) == ContentHash::of(&transformed) {
        return Ok(Outcome::Unchanged);
    }

    if !options.dry_run {
        fs::write(path, transformed).map_err(ProcessError::Write)?;
    }
    Ok(Outcome::Saved)
}
