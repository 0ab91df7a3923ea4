use thiserror::Error;

/// Errors that can occur while reading a workflow file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid workflow file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Could not read workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while writing a workflow file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize workflow '{workflow_id}': {source}")]
    Serialization {
        workflow_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Required-field failures on the creation forms.
///
/// The forms keep their submit action disabled while any of these hold,
/// so the error lists every missing field at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Workflow name must not be empty")]
    EmptyWorkflowName,
}

/// Errors raised by workspace-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("Workflow '{0}' not found")]
    WorkflowNotFound(String),

    #[error("Workflow '{0}' is the last workflow and cannot be deleted")]
    LastWorkflow(String),

    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised by the persisted flag store.
#[derive(Error, Debug)]
pub enum FlagStoreError {
    #[error("Could not access flag file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Flag file '{path}' is corrupted: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
