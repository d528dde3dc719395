//! Error types for the workspace switcher.

use std::path::PathBuf;
use thiserror::Error;

/// Backend errors - surfaced to UI.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// No workspace with the given id.
    #[error("Workspace not found: {0}")]
    NotFound(String),

    /// The operation is not allowed for this workspace.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Channel communication error.
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid keystroke in the keymap table.
    #[error("Invalid keystroke: {0}")]
    InvalidKeystroke(String),
}

/// Errors raised while loading seed workspaces.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Seed file could not be read.
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Seed file is not a valid workspace array.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Two records share an id.
    #[error("Duplicate workspace id: {0}")]
    DuplicateId(String),

    /// More than one record is marked active.
    #[error("{0} workspaces are marked active, expected at most one")]
    MultipleActive(usize),
}
