//! Model snapshot persistence.
//!
//! The snapshot is a single JSON document with three top-level members
//! (`metadata`, `priors`, `likelihoods`). Log-probabilities round-trip
//! through serde_json as f64 without loss, so a reloaded model scores
//! identically to the one that was saved.
//!
//! Writes go through a named temp file in the destination directory and
//! are persisted by rename, so a failed run never leaves a truncated
//! snapshot at the target path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

use super::NaiveBayesModel;

/// Persist a model snapshot to `path` atomically.
pub fn save_model(model: &NaiveBayesModel, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(parent)?;
    let mut writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(&mut writer, model)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Load a model snapshot from `path`.
pub fn load_model(path: &Path) -> Result<NaiveBayesModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model = serde_json::from_reader(reader)?;
    Ok(model)
}
