//! Display list derivation.
//!
//! Turns the raw workspace list, the search query and the recent searches
//! into the rows the dropdown shows plus search suggestions.

use std::cmp::Ordering;

use switcher_core::Workspace;

/// The rows to display for the current query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedList {
    /// Workspaces in display order.
    pub ordered: Vec<Workspace>,
    /// Whether `ordered` is non-empty.
    pub has_results: bool,
    /// Search suggestions (empty when the query is empty).
    pub suggestions: Vec<String>,
}

impl DerivedList {
    /// The rows actually rendered.
    pub fn visible(&self, max_rows: usize) -> &[Workspace] {
        &self.ordered[..self.ordered.len().min(max_rows)]
    }
}

/// Compare names the way a user expects: case-insensitive first, then exact.
fn compare_names(a: &Workspace, b: &Workspace) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Derive the display list.
///
/// - Empty query: active workspace, then favorites by name, then the rest by name.
/// - Non-empty query: case-insensitive substring match on name or creator,
///   kept in raw list order.
pub fn derive_list(
    workspaces: &[Workspace],
    query: &str,
    recent_searches: &[String],
    max_suggestions: usize,
) -> DerivedList {
    let ordered = if query.is_empty() {
        default_order(workspaces)
    } else {
        let needle = query.to_lowercase();
        workspaces
            .iter()
            .filter(|w| w.matches_lowercase(&needle))
            .cloned()
            .collect()
    };

    let suggestions = if query.is_empty() {
        Vec::new()
    } else {
        suggestions(workspaces, query, recent_searches, max_suggestions)
    };

    DerivedList {
        has_results: !ordered.is_empty(),
        ordered,
        suggestions,
    }
}

fn default_order(workspaces: &[Workspace]) -> Vec<Workspace> {
    let current = workspaces.iter().find(|w| w.is_active);

    let mut starred: Vec<&Workspace> = workspaces
        .iter()
        .filter(|w| !w.is_active && w.is_favorite)
        .collect();
    let mut unstarred: Vec<&Workspace> = workspaces
        .iter()
        .filter(|w| !w.is_active && !w.is_favorite)
        .collect();

    starred.sort_by(|a, b| compare_names(a, b));
    unstarred.sort_by(|a, b| compare_names(a, b));

    current
        .into_iter()
        .chain(starred)
        .chain(unstarred)
        .cloned()
        .collect()
}

fn suggestions(
    workspaces: &[Workspace],
    query: &str,
    recent_searches: &[String],
    limit: usize,
) -> Vec<String> {
    let needle = query.to_lowercase();

    let from_recent = recent_searches
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .cloned();

    let from_names = workspaces
        .iter()
        .filter(|w| w.name.to_lowercase().contains(&needle))
        .map(|w| w.name.clone())
        .filter(|name| !recent_searches.contains(name));

    from_recent.chain(from_names).take(limit).collect()
}
