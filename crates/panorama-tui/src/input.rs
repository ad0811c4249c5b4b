use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollLeft,
    ScrollRight,
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,
    /// Zero-based section index
    JumpToSection(usize),
    ToggleTheme,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    // Digits jump straight to a section
    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        return Action::JumpToSection(c as usize - '1' as usize);
    }

    keymap
        .get(&KeyBinding::from_event(&key))
        .copied()
        .unwrap_or(Action::None)
}
