//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, move cursor, enter mode)
/// rather than specific key presses, allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the editor
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// First character of the line (0)
    LineStart,
    /// Last character of the line ($)
    LineEnd,
    /// Start of the next word (w)
    NextWord,
    /// Start of the previous word (b)
    PreviousWord,
    /// End of the current or next word (e)
    WordEnd,
    /// Enter insert mode (from normal mode)
    EnterInsertMode,
    /// Start typing an ex-command (:)
    EnterCommandMode,
    /// Start typing a search pattern (/)
    EnterSearchMode,
    /// Exit insert mode back to normal mode
    ExitMode,
    /// Delete the character under the cursor (x)
    DeleteChar,
    /// Delete to the end of the line (D)
    DeleteToEnd,
    /// First or second key of dd
    Delete,
    /// First or second key of yy
    Yank,
    /// Paste the yanked line after the current one
    Paste,
    /// Paste the yanked line before the current one
    PasteBefore,
    /// Open an empty line below (n)
    OpenLine,
    /// Join the next line onto this one (J)
    JoinLines,
    /// First or second key of >>
    Indent,
    /// First or second key of <<
    Outdent,
    /// Insert a character in insert mode
    InsertCharacter(char),
    /// Backspace in insert mode
    InsertBackspace,
    /// Enter in insert mode
    InsertEnter,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// Different modes interpret keys differently (vim-style modal editing):
/// - Normal mode: hjkl and arrows for movement, i for insert, : for command,
///   / for search, q for quit
/// - Insert mode: Esc to exit, arrows move, everything else is text
///
/// # Arguments
///
/// * `event` - The termion Event to map
/// * `mode` - The current editor mode
///
/// # Returns
///
/// The corresponding InputEvent, or InputEvent::Unknown if not mapped
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use textquill::editor::mode::EditorMode;
/// use textquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// let input_event = map_key_event(event, &EditorMode::Normal);
/// assert_eq!(input_event, InputEvent::MoveDown);
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Char('q') => InputEvent::Quit,
            Key::Char('i') => InputEvent::EnterInsertMode,
            Key::Char(':') => InputEvent::EnterCommandMode,
            Key::Char('/') => InputEvent::EnterSearchMode,
            Key::Char('j') => InputEvent::MoveDown,
            Key::Char('k') => InputEvent::MoveUp,
            Key::Char('h') => InputEvent::MoveLeft,
            Key::Char('l') => InputEvent::MoveRight,
            Key::Char('0') => InputEvent::LineStart,
            Key::Char('$') => InputEvent::LineEnd,
            Key::Char('w') => InputEvent::NextWord,
            Key::Char('b') => InputEvent::PreviousWord,
            Key::Char('e') => InputEvent::WordEnd,
            Key::Char('x') => InputEvent::DeleteChar,
            Key::Char('D') => InputEvent::DeleteToEnd,
            Key::Char('d') => InputEvent::Delete,
            Key::Char('y') => InputEvent::Yank,
            Key::Char('p') => InputEvent::Paste,
            Key::Char('P') => InputEvent::PasteBefore,
            Key::Char('n') => InputEvent::OpenLine,
            Key::Char('J') => InputEvent::JoinLines,
            Key::Char('>') => InputEvent::Indent,
            Key::Char('<') => InputEvent::Outdent,
            Key::Down => InputEvent::MoveDown,
            Key::Up => InputEvent::MoveUp,
            Key::Left => InputEvent::MoveLeft,
            Key::Right => InputEvent::MoveRight,
            Key::Home => InputEvent::LineStart,
            Key::End => InputEvent::LineEnd,
            _ => InputEvent::Unknown,
        },
        EditorMode::Insert => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Char('\n') | Key::Char('\r') => InputEvent::InsertEnter,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Down => InputEvent::MoveDown,
            Key::Up => InputEvent::MoveUp,
            Key::Left => InputEvent::MoveLeft,
            Key::Right => InputEvent::MoveRight,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_quit() {
        let event = Event::Key(Key::Char('q'));
        assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::Quit);
    }

    #[test]
    fn test_normal_mode_movement_vim_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('j')), &EditorMode::Normal),
            InputEvent::MoveDown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('k')), &EditorMode::Normal),
            InputEvent::MoveUp
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('h')), &EditorMode::Normal),
            InputEvent::MoveLeft
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('l')), &EditorMode::Normal),
            InputEvent::MoveRight
        );
    }

    #[test]
    fn test_arrow_keys_work_in_both_modes() {
        for mode in [EditorMode::Normal, EditorMode::Insert] {
            assert_eq!(
                map_key_event(Event::Key(Key::Down), &mode),
                InputEvent::MoveDown
            );
            assert_eq!(
                map_key_event(Event::Key(Key::Left), &mode),
                InputEvent::MoveLeft
            );
        }
    }

    #[test]
    fn test_normal_mode_enter_modes() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('i')), &EditorMode::Normal),
            InputEvent::EnterInsertMode
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char(':')), &EditorMode::Normal),
            InputEvent::EnterCommandMode
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('/')), &EditorMode::Normal),
            InputEvent::EnterSearchMode
        );
    }

    #[test]
    fn test_n_opens_a_line_in_normal_mode() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('n')), &EditorMode::Normal),
            InputEvent::OpenLine
        );
    }

    #[test]
    fn test_insert_mode_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), &EditorMode::Insert),
            InputEvent::ExitMode
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('\n')), &EditorMode::Insert),
            InputEvent::InsertEnter
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), &EditorMode::Insert),
            InputEvent::InsertCharacter('q')
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('Z')), &EditorMode::Normal),
            InputEvent::Unknown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), &EditorMode::Normal),
            InputEvent::Unknown
        );
    }
}
