// Pane actions and key mapping.

use riffle_core::{Key, Modifiers};

/// Spaces inserted for a Tab press, matching soft-tab editing surfaces.
pub const INDENT: &str = "    ";

/// Actions an editable pane can perform in response to input.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneAction {
    InsertChar(char),
    /// Insert a line break at the cursor.
    Enter,
    /// Insert a four-space indent at the cursor.
    Indent,
    Backspace,
    Delete,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Home,
    End,
    /// Set cursor to a specific buffer position (from a pointer click).
    SetCursor { line: usize, col: usize },
}

/// Map a Key + Modifiers to a PaneAction.
pub fn key_to_pane_action(key: &Key, modifiers: &Modifiers) -> Option<PaneAction> {
    // Ctrl/meta chords belong to the host, not the pane
    if modifiers.ctrl || modifiers.meta {
        return None;
    }

    match key {
        Key::Char(ch) => Some(PaneAction::InsertChar(*ch)),
        Key::Enter => Some(PaneAction::Enter),
        Key::Tab => Some(PaneAction::Indent),
        Key::Backspace => Some(PaneAction::Backspace),
        Key::Delete => Some(PaneAction::Delete),
        Key::Up => Some(PaneAction::MoveUp),
        Key::Down => Some(PaneAction::MoveDown),
        Key::Left => Some(PaneAction::MoveLeft),
        Key::Right => Some(PaneAction::MoveRight),
        Key::Home => Some(PaneAction::Home),
        Key::End => Some(PaneAction::End),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_mod() -> Modifiers {
        Modifiers::default()
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Default::default()
        }
    }

    #[test]
    fn char_maps_to_insert() {
        assert_eq!(
            key_to_pane_action(&Key::Char('a'), &no_mod()),
            Some(PaneAction::InsertChar('a'))
        );
    }

    #[test]
    fn enter_maps_to_line_break() {
        assert_eq!(
            key_to_pane_action(&Key::Enter, &no_mod()),
            Some(PaneAction::Enter)
        );
    }

    #[test]
    fn tab_maps_to_indent() {
        assert_eq!(
            key_to_pane_action(&Key::Tab, &no_mod()),
            Some(PaneAction::Indent)
        );
    }

    #[test]
    fn ctrl_chords_return_none() {
        assert_eq!(key_to_pane_action(&Key::Char('s'), &ctrl()), None);
    }
}
