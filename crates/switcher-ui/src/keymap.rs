//! GPUI keybinding registration.
//!
//! Default bindings are registered first, then the `[keymap]` overrides from
//! config.toml. GPUI uses last-wins semantics at the same context depth, so
//! user bindings take precedence.

use std::collections::BTreeMap;
use std::rc::Rc;

use gpui::{App, DummyKeyboardMapper, KeyBinding, KeyBindingContextPredicate, Keystroke};
use switcher_core::ConfigError;

use crate::actions::action_from_name;

/// Key context of the dropdown panel.
pub const PANEL_CONTEXT: &str = "SwitcherPanel";
/// Key context of the search input.
pub const INPUT_CONTEXT: &str = "SearchInput";
/// Key context of the demo page root.
pub const PAGE_CONTEXT: &str = "DemoPage";

const DEFAULT_BINDINGS: &[(&str, &str, &str)] = &[
    // Dropdown
    ("up", "cursor_up", PANEL_CONTEXT),
    ("down", "cursor_down", PANEL_CONTEXT),
    ("escape", "dismiss", PANEL_CONTEXT),
    ("cmd-enter", "create_from_query", PANEL_CONTEXT),
    ("cmd-k", "toggle_switcher", PAGE_CONTEXT),
    // Text editing
    ("enter", "submit", INPUT_CONTEXT),
    ("backspace", "backspace", INPUT_CONTEXT),
    ("delete", "delete", INPUT_CONTEXT),
    ("left", "move_left", INPUT_CONTEXT),
    ("right", "move_right", INPUT_CONTEXT),
    ("shift-left", "select_left", INPUT_CONTEXT),
    ("shift-right", "select_right", INPUT_CONTEXT),
    ("cmd-a", "text_select_all", INPUT_CONTEXT),
    ("home", "home", INPUT_CONTEXT),
    ("end", "end", INPUT_CONTEXT),
    ("cmd-c", "copy", INPUT_CONTEXT),
    ("cmd-v", "paste", INPUT_CONTEXT),
    ("cmd-x", "cut", INPUT_CONTEXT),
];

/// A keystroke bound to a named action in a key context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub action: String,
    pub context: &'static str,
}

// =============================================================================
// Keystroke Parsing
// =============================================================================

/// Convert user-friendly keystroke to GPUI format.
///
/// Users write: "ctrl+n" or "cmd+shift+z"
/// GPUI expects: "ctrl-n" or "cmd-shift-z"
fn normalize_keystroke(s: &str) -> String {
    s.replace('+', "-")
}

/// The context an action belongs in.
fn context_for(action: &str) -> &'static str {
    match action {
        "submit" | "backspace" | "delete" | "move_left" | "move_right" | "select_left"
        | "select_right" | "text_select_all" | "home" | "end" | "copy" | "paste" | "cut" => {
            INPUT_CONTEXT
        }
        "toggle_switcher" => PAGE_CONTEXT,
        _ => PANEL_CONTEXT,
    }
}

/// Validate one `[keymap]` entry.
pub fn parse_override(key: &str, action: &str) -> Result<Binding, ConfigError> {
    let normalized = normalize_keystroke(key);
    Keystroke::parse(&normalized)
        .map_err(|e| ConfigError::InvalidKeystroke(format!("'{}': {:?}", key, e)))?;

    if action_from_name(action).is_none() {
        return Err(ConfigError::InvalidKeystroke(format!(
            "'{}' is bound to unknown action '{}'",
            key, action
        )));
    }

    Ok(Binding {
        key: normalized,
        action: action.to_string(),
        context: context_for(action),
    })
}

/// Defaults followed by valid overrides. Invalid overrides are logged and skipped.
pub fn resolve_bindings(overrides: &BTreeMap<String, String>) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = DEFAULT_BINDINGS
        .iter()
        .map(|(key, action, context)| Binding {
            key: key.to_string(),
            action: action.to_string(),
            context,
        })
        .collect();

    for (key, action) in overrides {
        match parse_override(key, action) {
            Ok(binding) => bindings.push(binding),
            Err(e) => tracing::warn!("Ignoring keymap entry: {}", e),
        }
    }

    bindings
}

// =============================================================================
// Apply Keybindings
// =============================================================================

/// Register `bindings` with GPUI, in order.
pub fn apply_keybindings(bindings: &[Binding], cx: &mut App) {
    for binding in bindings {
        apply_binding(binding, cx);
    }
    tracing::debug!("Registered {} key bindings", bindings.len());
}

fn apply_binding(binding: &Binding, cx: &mut App) {
    let Some(action) = action_from_name(&binding.action) else {
        tracing::warn!("Unknown action: {}", binding.action);
        return;
    };

    let context_predicate = KeyBindingContextPredicate::parse(binding.context)
        .ok()
        .map(Rc::new);

    match KeyBinding::load(
        &binding.key,
        action,
        context_predicate,
        false, // use_key_equivalents
        None,  // action_input
        &DummyKeyboardMapper,
    ) {
        Ok(key_binding) => {
            cx.bind_keys([key_binding]);
            tracing::debug!(
                "Registered binding: {} -> {} (context: {})",
                binding.key,
                binding.action,
                binding.context
            );
        }
        Err(e) => {
            tracing::warn!("Failed to create binding for '{}': {:?}", binding.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keystroke() {
        assert_eq!(normalize_keystroke("ctrl+n"), "ctrl-n");
        assert_eq!(normalize_keystroke("cmd+shift+z"), "cmd-shift-z");
        assert_eq!(normalize_keystroke("ctrl-n"), "ctrl-n"); // Already normalized
    }

    #[test]
    fn test_defaults_parse() {
        for (key, action, _) in DEFAULT_BINDINGS {
            assert!(parse_override(key, action).is_ok(), "{key} -> {action}");
        }
    }

    #[test]
    fn test_parse_override_context() {
        let binding = parse_override("ctrl+j", "cursor_down").unwrap();
        assert_eq!(binding.key, "ctrl-j");
        assert_eq!(binding.context, PANEL_CONTEXT);

        assert_eq!(parse_override("ctrl+h", "backspace").unwrap().context, INPUT_CONTEXT);
        assert_eq!(
            parse_override("ctrl+space", "toggle_switcher").unwrap().context,
            PAGE_CONTEXT
        );
    }

    #[test]
    fn test_parse_override_unknown_action() {
        let err = parse_override("ctrl+j", "launch_rockets").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeystroke(_)));
    }

    #[test]
    fn test_overrides_come_after_defaults() {
        let mut overrides = BTreeMap::new();
        overrides.insert("ctrl+j".to_string(), "cursor_down".to_string());
        overrides.insert("ctrl+q".to_string(), "nope".to_string());

        let bindings = resolve_bindings(&overrides);
        assert_eq!(bindings.len(), DEFAULT_BINDINGS.len() + 1);
        assert_eq!(bindings.last().unwrap().key, "ctrl-j");
    }
}
