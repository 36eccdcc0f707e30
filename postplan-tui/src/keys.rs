//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which part of the UI currently receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation over the table.
    Browse,
    /// Typing into the staged field of the row being edited.
    EditingField,
    /// Typing a 1-based page number to jump to.
    PageInput,
    /// Typing a substring filter for the cursor column.
    FilterInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenHelp,
    Cancel,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleSort,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    OpenPageInput,
    OpenFilterInput,
    CyclePageSize,
    EditRow,
    Regenerate,
    Confirm,
    NextField,
    PrevField,
    InputChar(char),
    InputBackspace,
}

pub fn map_key(mode: InputMode, event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Browse => map_browse_key(code),
        InputMode::EditingField | InputMode::PageInput | InputMode::FilterInput => {
            map_input_key(mode, code)
        }
    }
}

fn map_browse_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char(':') => Some(Action::OpenPageInput),
        KeyCode::Char('/') => Some(Action::OpenFilterInput),
        KeyCode::Char('z') => Some(Action::CyclePageSize),
        KeyCode::Char('e') => Some(Action::EditRow),
        KeyCode::Char('r') => Some(Action::Regenerate),
        KeyCode::Enter => Some(Action::EditRow),
        _ => None,
    }
}

fn map_input_key(mode: InputMode, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Tab if mode == InputMode::EditingField => Some(Action::NextField),
        KeyCode::BackTab if mode == InputMode::EditingField => Some(Action::PrevField),
        // Arrow keys switch the edit target to an adjacent row.
        KeyCode::Up if mode == InputMode::EditingField => Some(Action::MoveUp),
        KeyCode::Down if mode == InputMode::EditingField => Some(Action::MoveDown),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_bindings() {
        assert_eq!(
            map_key(InputMode::Browse, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(InputMode::Browse, key(KeyCode::Char('s'))),
            Some(Action::ToggleSort)
        );
        assert_eq!(
            map_key(InputMode::Browse, key(KeyCode::Char(':'))),
            Some(Action::OpenPageInput)
        );
        assert_eq!(
            map_key(InputMode::Browse, key(KeyCode::Enter)),
            Some(Action::EditRow)
        );
    }

    #[test]
    fn test_text_goes_to_buffer_while_editing() {
        assert_eq!(
            map_key(InputMode::EditingField, key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            map_key(InputMode::EditingField, key(KeyCode::Tab)),
            Some(Action::NextField)
        );
        assert_eq!(
            map_key(InputMode::PageInput, key(KeyCode::Char('3'))),
            Some(Action::InputChar('3'))
        );
        // Tab only moves fields in edit mode, not in the small inputs.
        assert_eq!(map_key(InputMode::PageInput, key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_arrows_switch_rows_while_editing() {
        assert_eq!(
            map_key(InputMode::EditingField, key(KeyCode::Down)),
            Some(Action::MoveDown)
        );
        assert_eq!(map_key(InputMode::FilterInput, key(KeyCode::Down)), None);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(InputMode::Browse, event), Some(Action::Quit));
        assert_eq!(map_key(InputMode::EditingField, event), Some(Action::Quit));
    }
}
