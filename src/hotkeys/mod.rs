//! Hotkey system
//!
//! Centralized hotkey management for the capture shell.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Detach the currently selected frame row.
    RemoveSelectedFrame,
    /// Close the open overlay without confirming.
    DismissOverlay,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a modal overlay is currently open
    pub overlay_open: bool,
    /// Whether a frame row is selected
    pub has_selection: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    _ctrl: bool,
    _alt: bool,
    _meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    // An open overlay captures the keyboard: Escape dismisses it and
    // everything else is inert.
    if context.overlay_open {
        if matches!(key, Key::Escape) {
            return HotkeyResult::Action(HotkeyAction::DismissOverlay);
        }
        return HotkeyResult::NoMatch;
    }

    if context.has_selection {
        match key {
            Key::Delete | Key::Backspace => {
                return HotkeyResult::Action(HotkeyAction::RemoveSelectedFrame);
            }
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dismisses_open_overlay() {
        let ctx = HotkeyContext {
            overlay_open: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Escape, false, false, false, false, &ctx);
        assert!(matches!(
            result,
            HotkeyResult::Action(HotkeyAction::DismissOverlay)
        ));
    }

    #[test]
    fn test_escape_without_overlay_is_nomatch() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Escape, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_delete_removes_selected_frame() {
        let ctx = HotkeyContext {
            has_selection: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Delete, false, false, false, false, &ctx);
        assert!(matches!(
            result,
            HotkeyResult::Action(HotkeyAction::RemoveSelectedFrame)
        ));
    }

    #[test]
    fn test_delete_without_selection_is_nomatch() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Delete, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_delete_suppressed_while_overlay_open() {
        let ctx = HotkeyContext {
            overlay_open: true,
            has_selection: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Delete, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            has_selection: true,
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Delete, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
