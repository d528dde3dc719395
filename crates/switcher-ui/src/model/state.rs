//! Interaction state for the switcher dropdown.
//!
//! These types are GPUI-independent. The panel view feeds key and pointer
//! events in and carries out whatever [`SubmitOutcome`] comes back.

use switcher_core::{Workspace, WorkspaceId};

// =============================================================================
// Switcher Phase State Machine
// =============================================================================

/// Top-level state machine. Invalid states are impossible.
#[derive(Debug, Default)]
pub enum SwitcherPhase {
    /// Dropdown is closed, only the trigger button is visible.
    #[default]
    Closed,
    /// Dropdown is open with full interaction state.
    Open(OpenState),
}

impl SwitcherPhase {
    /// Open the dropdown with `query` already in the search input.
    ///
    /// No-op when already open.
    pub fn open(&mut self, query: impl Into<String>) {
        if !self.is_open() {
            *self = SwitcherPhase::Open(OpenState::with_query(query));
        }
    }

    /// Close the dropdown, dropping hover and keyboard selection.
    pub fn close(&mut self) {
        *self = SwitcherPhase::Closed;
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self, query: impl Into<String>) {
        if self.is_open() {
            self.close();
        } else {
            self.open(query);
        }
    }

    /// Get the open state if the dropdown is open.
    pub fn open_state(&self) -> Option<&OpenState> {
        match self {
            SwitcherPhase::Open(state) => Some(state),
            SwitcherPhase::Closed => None,
        }
    }

    /// Get mutable open state if the dropdown is open.
    pub fn open_state_mut(&mut self) -> Option<&mut OpenState> {
        match self {
            SwitcherPhase::Open(state) => Some(state),
            SwitcherPhase::Closed => None,
        }
    }

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        matches!(self, SwitcherPhase::Open(_))
    }
}

// =============================================================================
// Open State
// =============================================================================

/// State while the dropdown is visible and interactive.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OpenState {
    /// Current search query.
    pub query: String,

    /// Keyboard-selected row within the visible rows. `None` means nothing.
    pub selected_index: Option<usize>,

    /// Row under the pointer.
    pub hovered_index: Option<usize>,

    /// Pending select or create.
    pub busy: Option<Busy>,
}

impl OpenState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Replace the query. A changed query resets the keyboard selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.query != query {
            self.query = query;
            self.selected_index = None;
        }
    }

    /// Move selection down, stopping at the last of `len` rows.
    pub fn cursor_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => Some(len - 1),
        };
    }

    /// Pull the selection back inside a list that shrank to `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    /// Move selection up, stopping at the first row.
    pub fn cursor_up(&mut self) {
        if let Some(i) = self.selected_index {
            self.selected_index = Some(i.saturating_sub(1));
        }
    }

    /// Decide what Enter does.
    ///
    /// `visible` is the list of rendered rows; `has_results` comes from the
    /// derived list.
    pub fn submit(&self, visible: &[Workspace], has_results: bool) -> SubmitOutcome {
        if self.busy.is_some() {
            return SubmitOutcome::Nothing;
        }

        if let Some(ws) = self.selected_index.and_then(|i| visible.get(i)) {
            return SubmitOutcome::Select(ws.id.clone());
        }

        if !self.query.is_empty() && !has_results {
            return SubmitOutcome::Create(self.query.clone());
        }

        SubmitOutcome::Nothing
    }

    pub fn hover(&mut self, index: usize) {
        self.hovered_index = Some(index);
    }

    pub fn unhover(&mut self) {
        self.hovered_index = None;
    }

    pub fn begin_select(&mut self, id: WorkspaceId) {
        self.busy = Some(Busy::Selecting(id));
    }

    pub fn begin_create(&mut self, name: impl Into<String>) {
        self.busy = Some(Busy::Creating(name.into()));
    }

    /// Clear the busy flag and the query after a select or create lands.
    pub fn finish(&mut self) {
        self.busy = None;
        self.query.clear();
        self.selected_index = None;
    }

    /// Whether skeleton rows replace the list.
    pub fn is_loading(&self) -> bool {
        matches!(self.busy, Some(Busy::Selecting(_)))
    }

    pub fn is_creating(&self) -> bool {
        matches!(self.busy, Some(Busy::Creating(_)))
    }
}

/// An in-flight operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Busy {
    /// Switching to a workspace.
    Selecting(WorkspaceId),
    /// Creating a workspace with this name.
    Creating(String),
}

/// What the panel should do after Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Select(WorkspaceId),
    Create(String),
    Nothing,
}

// =============================================================================
// Recent Searches
// =============================================================================

/// Most-recent-first list of queries that led to a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
    capacity: usize,
}

impl RecentSearches {
    pub fn new(entries: Vec<String>, capacity: usize) -> Self {
        let mut entries = entries;
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Record a query. Empty and already-recorded queries are ignored.
    ///
    /// Returns whether the list changed.
    pub fn record(&mut self, query: &str) -> bool {
        if query.is_empty() || self.entries.iter().any(|e| e == query) || self.capacity == 0 {
            return false;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use switcher_core::builtin_workspaces;

    #[test]
    fn test_switcher_phase_default() {
        let phase = SwitcherPhase::default();
        assert!(!phase.is_open());
        assert!(phase.open_state().is_none());
    }

    #[test]
    fn test_toggle() {
        let mut phase = SwitcherPhase::default();
        phase.toggle("api");
        assert!(phase.is_open());
        assert_eq!(phase.open_state().unwrap().query, "api");

        phase.toggle("");
        assert!(!phase.is_open());
    }

    #[test]
    fn test_open_when_open_keeps_state() {
        let mut phase = SwitcherPhase::default();
        phase.open("");
        phase.open_state_mut().unwrap().cursor_down(3);

        phase.open("ignored");
        let state = phase.open_state().unwrap();
        assert_eq!(state.selected_index, Some(0));
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_close_drops_selection_and_hover() {
        let mut phase = SwitcherPhase::default();
        phase.open("");
        {
            let state = phase.open_state_mut().unwrap();
            state.cursor_down(3);
            state.hover(2);
        }

        phase.close();
        phase.open("");
        let state = phase.open_state().unwrap();
        assert_eq!(state.selected_index, None);
        assert_eq!(state.hovered_index, None);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = OpenState::default();
        assert_eq!(state.selected_index, None);

        // Up from nothing stays at nothing
        state.cursor_up();
        assert_eq!(state.selected_index, None);

        state.cursor_down(3);
        assert_eq!(state.selected_index, Some(0));

        state.cursor_down(3);
        state.cursor_down(3);
        assert_eq!(state.selected_index, Some(2));

        // Can't go past end
        state.cursor_down(3);
        assert_eq!(state.selected_index, Some(2));

        state.cursor_up();
        state.cursor_up();
        state.cursor_up();
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_cursor_down_on_empty_list() {
        let mut state = OpenState::default();
        state.cursor_down(0);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_selection_follows_shrinking_list() {
        let mut state = OpenState::default();
        for _ in 0..5 {
            state.cursor_down(5);
        }
        assert_eq!(state.selected_index, Some(4));

        // Last row removed
        state.clamp_selection(4);
        assert_eq!(state.selected_index, Some(3));

        state.clamp_selection(0);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_cursor_down_recovers_stale_selection() {
        let mut state = OpenState {
            selected_index: Some(7),
            ..OpenState::default()
        };
        state.cursor_down(3);
        assert_eq!(state.selected_index, Some(2));
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut state = OpenState::default();
        state.cursor_down(5);
        state.cursor_down(5);

        state.set_query("");
        assert_eq!(state.selected_index, Some(1));

        state.set_query("a");
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_submit_selects_row() {
        let rows = builtin_workspaces();
        let mut state = OpenState::default();
        state.cursor_down(rows.len());
        state.cursor_down(rows.len());

        assert_eq!(
            state.submit(&rows, true),
            SubmitOutcome::Select(rows[1].id.clone())
        );
    }

    #[test]
    fn test_submit_creates_when_no_results() {
        let state = OpenState::with_query("Scratchpad");
        assert_eq!(
            state.submit(&[], false),
            SubmitOutcome::Create("Scratchpad".to_string())
        );
    }

    #[test]
    fn test_submit_does_nothing() {
        // Results but no selection
        let rows = builtin_workspaces();
        let state = OpenState::with_query("api");
        assert_eq!(state.submit(&rows, true), SubmitOutcome::Nothing);

        // Empty query, empty list
        let state = OpenState::default();
        assert_eq!(state.submit(&[], false), SubmitOutcome::Nothing);
    }

    #[test]
    fn test_submit_while_busy() {
        let rows = builtin_workspaces();
        let mut state = OpenState::default();
        state.cursor_down(rows.len());
        state.begin_select(rows[0].id.clone());
        assert!(state.is_loading());
        assert_eq!(state.submit(&rows, true), SubmitOutcome::Nothing);

        let mut state = OpenState::with_query("New");
        state.begin_create("New");
        assert!(state.is_creating());
        assert_eq!(state.submit(&[], false), SubmitOutcome::Nothing);
    }

    #[test]
    fn test_finish_clears_query() {
        let mut state = OpenState::with_query("api");
        state.cursor_down(2);
        state.begin_select(WorkspaceId::from("w1"));

        state.finish();
        assert_eq!(state.busy, None);
        assert_eq!(state.query, "");
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_hover() {
        let mut state = OpenState::default();
        state.hover(4);
        assert_eq!(state.hovered_index, Some(4));
        state.unhover();
        assert_eq!(state.hovered_index, None);
    }

    #[test]
    fn test_recent_searches_record() {
        let mut recent = RecentSearches::new(
            vec!["API".into(), "documentation".into(), "mobile".into()],
            5,
        );

        assert!(recent.record("graph"));
        assert_eq!(recent.as_slice()[0], "graph");

        // Already present
        assert!(!recent.record("API"));
        // Empty
        assert!(!recent.record(""));

        assert!(recent.record("pay"));
        assert!(recent.record("dev"));
        assert_eq!(
            recent.as_slice(),
            &["dev", "pay", "graph", "API", "documentation"]
        );
    }

    #[test]
    fn test_recent_searches_capacity() {
        let recent = RecentSearches::new(vec!["a".into(), "b".into(), "c".into()], 2);
        assert_eq!(recent.as_slice(), &["a", "b"]);

        let mut none = RecentSearches::new(Vec::new(), 0);
        assert!(!none.record("x"));
    }
}
