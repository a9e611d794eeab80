//! Hotkey system
//!
//! Keyboard shortcuts for the screens of the app.
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

use crate::state::View;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Start a new project from the home screen.
    NewProject,
    /// Leave the current screen (preview → editor, editor/projects → home).
    Back,
    /// Accept whichever modal gate is open in the preview.
    ConfirmGate,
    /// Run the preview from the editor.
    Run,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// The screen currently shown.
    pub view: View,
    /// Whether a modal gate is waiting for confirmation.
    pub gate_open: bool,
    /// Whether an element is being dragged (suppresses all hotkeys)
    pub dragging: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., a drag is in progress)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(key: &Key, context: &HotkeyContext) -> HotkeyResult {
    if context.dragging {
        return HotkeyResult::Suppressed;
    }

    match (key, context.view) {
        (Key::Escape, View::Projects | View::Editor | View::Preview) => {
            HotkeyResult::Action(HotkeyAction::Back)
        }
        (Key::Enter, View::Preview) if context.gate_open => {
            HotkeyResult::Action(HotkeyAction::ConfirmGate)
        }
        (Key::Character(c), View::Editor) if c.eq_ignore_ascii_case("r") => {
            HotkeyResult::Action(HotkeyAction::Run)
        }
        (Key::Character(c), View::Home) if c.eq_ignore_ascii_case("n") => {
            HotkeyResult::Action(HotkeyAction::NewProject)
        }
        _ => HotkeyResult::NoMatch,
    }
}
