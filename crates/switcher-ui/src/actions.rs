//! GPUI actions for the workspace switcher.
//!
//! Actions are dispatched by GPUI's key binding system. Names used in the
//! `[keymap]` config section map to these through [`action_from_name`].

use gpui::actions;

// =============================================================================
// Dropdown Actions
// =============================================================================

actions!(
    switcher,
    [CursorUp, CursorDown, Submit, Dismiss, ToggleSwitcher, CreateFromQuery,]
);

// =============================================================================
// Text Editing Actions
// =============================================================================

actions!(
    switcher,
    [
        Backspace,
        Delete,
        MoveLeft,
        MoveRight,
        SelectLeft,
        SelectRight,
        TextSelectAll,
        Home,
        End,
        Copy,
        Paste,
        Cut,
    ]
);

// =============================================================================
// Action Lookup
// =============================================================================

/// Look up an action by its config name.
pub fn action_from_name(name: &str) -> Option<Box<dyn gpui::Action>> {
    match name {
        // Dropdown
        "cursor_up" => Some(Box::new(CursorUp)),
        "cursor_down" => Some(Box::new(CursorDown)),
        "submit" => Some(Box::new(Submit)),
        "dismiss" => Some(Box::new(Dismiss)),
        "toggle_switcher" => Some(Box::new(ToggleSwitcher)),
        "create_from_query" => Some(Box::new(CreateFromQuery)),

        // Text editing
        "backspace" => Some(Box::new(Backspace)),
        "delete" => Some(Box::new(Delete)),
        "move_left" => Some(Box::new(MoveLeft)),
        "move_right" => Some(Box::new(MoveRight)),
        "select_left" => Some(Box::new(SelectLeft)),
        "select_right" => Some(Box::new(SelectRight)),
        "text_select_all" => Some(Box::new(TextSelectAll)),
        "home" => Some(Box::new(Home)),
        "end" => Some(Box::new(End)),
        "copy" => Some(Box::new(Copy)),
        "paste" => Some(Box::new(Paste)),
        "cut" => Some(Box::new(Cut)),

        _ => None,
    }
}

/// Get all available action names.
pub fn available_actions() -> &'static [&'static str] {
    &[
        // Dropdown
        "cursor_up",
        "cursor_down",
        "submit",
        "dismiss",
        "toggle_switcher",
        "create_from_query",
        // Text editing
        "backspace",
        "delete",
        "move_left",
        "move_right",
        "select_left",
        "select_right",
        "text_select_all",
        "home",
        "end",
        "copy",
        "paste",
        "cut",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_name() {
        assert!(action_from_name("cursor_up").is_some());
        assert!(action_from_name("toggle_switcher").is_some());
        assert!(action_from_name("open_action_menu").is_none());
    }

    #[test]
    fn test_every_listed_action_resolves() {
        for name in available_actions() {
            assert!(action_from_name(name).is_some(), "{name} does not resolve");
        }
    }
}
