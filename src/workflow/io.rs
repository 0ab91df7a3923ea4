//! JSON export and import of workflows.

use super::Workflow;
use crate::error::{ExportError, ImportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes a workflow into the pretty-printed JSON file format.
pub fn export_json(workflow: &Workflow) -> Result<String, ExportError> {
    serde_json::to_string_pretty(workflow).map_err(|source| ExportError::Serialization {
        workflow_id: workflow.id.clone(),
        source,
    })
}

/// Parses a workflow from JSON text.
pub fn import_json(json: &str) -> Result<Workflow, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// The download name for a workflow: lowercased, every whitespace run
/// replaced by a single `-`, with a `.json` extension.
pub fn export_file_name(workflow_name: &str) -> String {
    let mut stem = String::with_capacity(workflow_name.len());
    let mut in_whitespace = false;
    for c in workflow_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('-');
            }
            in_whitespace = true;
        } else {
            stem.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    format!("{}.json", stem)
}

/// Writes the workflow to `path`.
pub fn export_to_path(workflow: &Workflow, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = export_json(workflow)?;
    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(workflow_id = %workflow.id, path = %path.display(), "workflow exported");
    Ok(())
}

/// Writes the workflow into `dir` under its download name and returns the file path.
pub fn export_to_dir(workflow: &Workflow, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(export_file_name(&workflow.name));
    export_to_path(workflow, &path)?;
    Ok(path)
}

/// Reads and parses a workflow file.
pub fn import_from_path(path: impl AsRef<Path>) -> Result<Workflow, ImportError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    import_json(&json)
}
