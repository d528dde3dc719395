//! Seed sources for the initial workspace list.
//!
//! The switcher keeps everything in memory. A source only supplies the
//! starting list; nothing is ever written back.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::catalog::builtin_workspaces;
use crate::error::SourceError;
use crate::workspace::Workspace;

/// Supplies the workspaces the switcher starts with.
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceSource: Send + Sync {
    /// Short name for log messages.
    fn name(&self) -> &str;

    /// Load the workspace records.
    fn load(&self) -> Result<Vec<Workspace>, SourceError>;
}

/// The compiled-in demo catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl WorkspaceSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<Vec<Workspace>, SourceError> {
        Ok(builtin_workspaces())
    }
}

/// A JSON array of workspaces on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkspaceSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<Workspace>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let workspaces: Vec<Workspace> =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        validate(&workspaces)?;
        Ok(workspaces)
    }
}

/// Check the list invariants: unique ids and at most one active workspace.
pub fn validate(workspaces: &[Workspace]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for ws in workspaces {
        if !seen.insert(&ws.id) {
            return Err(SourceError::DuplicateId(ws.id.to_string()));
        }
    }

    let active = workspaces.iter().filter(|w| w.is_active).count();
    if active > 1 {
        return Err(SourceError::MultipleActive(active));
    }

    Ok(())
}

/// Load from `source`, falling back to the built-in catalog.
///
/// An empty list counts as a failure: the demo is useless without data.
pub fn load_or_builtin(source: &dyn WorkspaceSource) -> Vec<Workspace> {
    match source.load() {
        Ok(workspaces) if !workspaces.is_empty() => {
            tracing::info!(
                "Loaded {} workspaces from {} source",
                workspaces.len(),
                source.name()
            );
            workspaces
        }
        Ok(_) => {
            tracing::warn!(
                "{} source returned no workspaces - using built-in catalog",
                source.name()
            );
            builtin_workspaces()
        }
        Err(e) => {
            tracing::warn!("{} source failed: {} - using built-in catalog", source.name(), e);
            builtin_workspaces()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::WorkspaceId;
    use std::io::Write;

    #[test]
    fn test_builtin_source() {
        let workspaces = BuiltinSource.load().unwrap();
        assert_eq!(workspaces.len(), 12);
    }

    #[test]
    fn test_fallback_on_error() {
        let mut source = MockWorkspaceSource::new();
        source.expect_name().return_const("mock".to_string());
        source
            .expect_load()
            .times(1)
            .returning(|| Err(SourceError::MultipleActive(2)));

        let workspaces = load_or_builtin(&source);
        assert_eq!(workspaces, builtin_workspaces());
    }

    #[test]
    fn test_fallback_on_empty() {
        let mut source = MockWorkspaceSource::new();
        source.expect_name().return_const("mock".to_string());
        source.expect_load().times(1).returning(|| Ok(Vec::new()));

        assert_eq!(load_or_builtin(&source).len(), 12);
    }

    #[test]
    fn test_source_result_is_used() {
        let mut source = MockWorkspaceSource::new();
        source.expect_name().return_const("mock".to_string());
        source
            .expect_load()
            .times(1)
            .returning(|| Ok(vec![Workspace::new_personal("Only")]));

        let workspaces = load_or_builtin(&source);
        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "Only");
    }

    #[test]
    fn test_validate_duplicate_id() {
        let mut a = Workspace::new_personal("A");
        let mut b = Workspace::new_personal("B");
        a.id = WorkspaceId::from("same");
        b.id = WorkspaceId::from("same");

        let err = validate(&[a, b]).unwrap_err();
        assert!(matches!(err, SourceError::DuplicateId(id) if id == "same"));
    }

    #[test]
    fn test_validate_multiple_active() {
        let mut a = Workspace::new_personal("A");
        let mut b = Workspace::new_personal("B");
        a.is_active = true;
        b.is_active = true;

        assert!(matches!(
            validate(&[a, b]),
            Err(SourceError::MultipleActive(2))
        ));
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let workspaces = vec![Workspace::new_personal("From Disk")];
        write!(file, "{}", serde_json::to_string(&workspaces).unwrap()).unwrap();

        let loaded = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(loaded, workspaces);
    }

    #[test]
    fn test_json_file_source_errors() {
        let missing = JsonFileSource::new("/nonexistent/workspaces.json");
        assert!(matches!(missing.load(), Err(SourceError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let broken = JsonFileSource::new(file.path());
        assert!(matches!(broken.load(), Err(SourceError::Parse { .. })));
    }
}
