//! Drag-and-drop reordering of the raw workspace list.

use switcher_core::{Workspace, WorkspaceId};

/// Move the workspace `dragged` to the position currently held by `over`.
///
/// Returns `false` and leaves `list` untouched when the ids are equal or
/// either one is missing.
pub fn move_by_id(list: &mut Vec<Workspace>, dragged: &WorkspaceId, over: &WorkspaceId) -> bool {
    if dragged == over {
        return false;
    }

    let Some(from) = list.iter().position(|w| &w.id == dragged) else {
        return false;
    };
    let Some(to) = list.iter().position(|w| &w.id == over) else {
        return false;
    };

    let ws = list.remove(from);
    list.insert(to, ws);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use switcher_core::builtin_workspaces;

    fn ids(list: &[Workspace]) -> Vec<&str> {
        list.iter().map(|w| w.id.as_ref()).collect()
    }

    fn list_of(ids: &[&str]) -> Vec<Workspace> {
        ids.iter()
            .map(|id| {
                let mut ws = Workspace::new_personal(*id);
                ws.id = WorkspaceId::from(*id);
                ws
            })
            .collect()
    }

    #[test]
    fn test_move_adjacent_swaps() {
        let mut list = list_of(&["a", "b", "c"]);
        assert!(move_by_id(&mut list, &"a".into(), &"b".into()));
        assert_eq!(ids(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_down() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert!(move_by_id(&mut list, &"a".into(), &"c".into()));
        assert_eq!(ids(&list), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert!(move_by_id(&mut list, &"d".into(), &"b".into()));
        assert_eq!(ids(&list), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut list = list_of(&["a", "b"]);
        assert!(!move_by_id(&mut list, &"a".into(), &"a".into()));
        assert_eq!(ids(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_ids_are_noop() {
        let mut list = list_of(&["a", "b"]);
        assert!(!move_by_id(&mut list, &"x".into(), &"b".into()));
        assert!(!move_by_id(&mut list, &"a".into(), &"x".into()));
        assert_eq!(ids(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_move_in_catalog_keeps_records() {
        let mut list = builtin_workspaces();
        let first = list[0].id.clone();
        let last = list[list.len() - 1].id.clone();

        assert!(move_by_id(&mut list, &first, &last));
        assert_eq!(list.len(), 12);
        assert_eq!(list[11].id, first);
    }
}
