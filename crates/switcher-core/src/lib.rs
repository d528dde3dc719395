//! Core types for the workspace switcher.
//!
//! This crate contains the GPUI-independent data shared by the switcher crates:
//! - Workspace and Member records plus their display helpers
//! - The built-in catalog of demo workspaces
//! - Seed sources that feed the initial workspace list
//! - Configuration types
//! - Error types

mod catalog;
mod config;
mod error;
mod source;
mod workspace;

pub use catalog::{builtin_recent_searches, builtin_workspaces};
pub use config::{
    config_dir, config_path, AppConfig, AppearanceConfig, BehaviorConfig, DataConfig, ThemeMode,
};
pub use error::{BackendError, ConfigError, SourceError};
pub use source::{load_or_builtin, validate, BuiltinSource, JsonFileSource, WorkspaceSource};
pub use workspace::{avatar_url, FacePile, Member, Workspace, WorkspaceId, WorkspaceKind};

#[cfg(test)]
pub use source::MockWorkspaceSource;
