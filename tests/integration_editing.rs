use std::fs;
use tempfile::{NamedTempFile, TempDir};
use termion::event::{Event, Key};
use textquill::document::buffer::Document;
use textquill::editor::mode::EditorMode;
use textquill::editor::state::{EditorState, MessageLevel};
use textquill::input::InputHandler;

struct Session {
    handler: InputHandler,
    state: EditorState,
}

impl Session {
    fn new(lines: &[&str], mode: EditorMode) -> Self {
        let mut state = EditorState::new_with_defaults(Document::from_lines(lines.iter().copied()));
        state.set_mode(mode);
        Self {
            handler: InputHandler::new(),
            state,
        }
    }

    fn key(&mut self, key: Key) -> bool {
        self.handler
            .handle_event(Event::Key(key), &mut self.state)
            .unwrap()
    }

    /// Types each character as its own key press.
    fn keys(&mut self, keys: &str) -> bool {
        let mut quit = false;
        for c in keys.chars() {
            quit = self.key(Key::Char(c));
        }
        quit
    }

    fn lines(&self) -> Vec<String> {
        self.state.document().to_strings()
    }
}

#[test]
fn test_type_then_delete_first_character() {
    let mut s = Session::new(&[""], EditorMode::Insert);
    s.keys("hello");
    s.key(Key::Esc);
    assert_eq!(*s.state.mode(), EditorMode::Normal);

    s.keys("0x");
    assert_eq!(s.lines(), vec!["ello"]);
    assert_eq!(s.state.cursor().column(s.state.document()), 0);

    // Cursor now sits before the first character, so x does nothing
    s.keys("x");
    assert_eq!(s.lines(), vec!["ello"]);
}

#[test]
fn test_return_splits_line() {
    let mut s = Session::new(&["abcd"], EditorMode::Insert);
    s.key(Key::Right);
    s.key(Key::Right);
    s.key(Key::Char('\n'));
    assert_eq!(s.lines(), vec!["ab", "cd"]);
    assert_eq!(s.state.cursor().line(), 1);

    s.keys("X");
    assert_eq!(s.lines(), vec!["ab", "Xcd"]);
}

#[test]
fn test_backspace_at_line_start_merges() {
    let mut s = Session::new(&["ab", "cd"], EditorMode::Insert);
    s.key(Key::Down);
    s.key(Key::Left);
    s.key(Key::Backspace);
    assert_eq!(s.lines(), vec!["abcd"]);
    assert_eq!(s.state.cursor().line(), 0);

    s.keys("X");
    assert_eq!(s.lines(), vec!["abXcd"]);
}

#[test]
fn test_yank_and_paste() {
    let mut s = Session::new(&["one", "two"], EditorMode::Normal);
    s.keys("yy");
    assert_eq!(s.state.yank_buffer(), Some("one"));
    s.keys("p");
    assert_eq!(s.lines(), vec!["one", "one", "two"]);
    assert_eq!(s.state.cursor().line(), 0);

    s.keys("jjP");
    assert_eq!(s.lines(), vec!["one", "one", "one", "two"]);
    // The cursor stays on "two", now one line further down
    assert_eq!(s.state.cursor().line(), 3);
    assert_eq!(s.state.status().column, 1);
}

#[test]
fn test_paste_with_empty_yank_buffer() {
    let mut s = Session::new(&["one"], EditorMode::Normal);
    s.keys("p");
    assert_eq!(s.lines(), vec!["one"]);
    assert_eq!(s.state.message().unwrap().level, MessageLevel::Warning);
}

#[test]
fn test_dd_on_last_remaining_line_keeps_one_line() {
    let mut s = Session::new(&["only"], EditorMode::Normal);
    s.keys("dd");
    assert_eq!(s.lines(), vec![""]);
    assert_eq!(s.state.document().line_count(), 1);

    s.keys("dd");
    assert_eq!(s.state.document().line_count(), 1);
}

#[test]
fn test_substitute_globally() {
    let mut s = Session::new(&["banana"], EditorMode::Normal);
    s.keys(":s/a/b/g\n");
    assert_eq!(s.lines(), vec!["bbnbnb"]);
    assert!(s.state.is_dirty());
}

#[test]
fn test_substitute_first_only() {
    let mut s = Session::new(&["banana"], EditorMode::Normal);
    s.keys(":s/an/AN/\n");
    assert_eq!(s.lines(), vec!["bANana"]);
}

#[test]
fn test_delete_line_by_number() {
    let mut s = Session::new(&["a", "b", "c"], EditorMode::Normal);
    s.keys("jj");
    s.keys(":d 2\n");
    assert_eq!(s.lines(), vec!["a", "c"]);
    assert_eq!(s.state.cursor().line(), 1);

    s.keys(":d 9\n");
    assert_eq!(s.lines(), vec!["a", "c"]);
    assert_eq!(s.state.message().unwrap().text, "Line 9 out of range");
}

#[test]
fn test_open_join_and_indent() {
    let mut s = Session::new(&["first", "second"], EditorMode::Normal);
    s.keys("n");
    assert_eq!(s.lines(), vec!["first", "", "second"]);

    s.keys("kJ");
    assert_eq!(s.lines(), vec!["first", "second"]);

    s.keys(">>");
    assert_eq!(s.lines(), vec!["\tfirst", "second"]);
    s.keys("<<");
    assert_eq!(s.lines(), vec!["first", "second"]);
}

#[test]
fn test_delete_to_end_of_line() {
    let mut s = Session::new(&["hello world"], EditorMode::Normal);
    s.keys("wD");
    assert_eq!(s.lines(), vec!["hello "]);
}

#[test]
fn test_delete_to_end_before_first_character() {
    let mut s = Session::new(&["hello"], EditorMode::Normal);
    s.keys("D");
    assert_eq!(s.lines(), vec!["hello"]);
    assert!(!s.state.is_dirty());
}

#[test]
fn test_edit_command_loads_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "alpha\nbeta\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut s = Session::new(&["old"], EditorMode::Normal);
    s.keys(&format!(":e {}\n", path));
    assert_eq!(s.lines(), vec!["alpha", "beta"]);
    assert_eq!(s.state.filename(), Some(path.as_str()));
    assert_eq!(
        s.state.message().unwrap().text,
        format!("\"{}\" 2 lines", path)
    );
}

#[test]
fn test_edit_command_failure_keeps_buffer() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let mut s = Session::new(&["old"], EditorMode::Normal);
    s.keys(&format!(":e {}\n", missing.display()));
    assert_eq!(s.lines(), vec!["old"]);
    let message = s.state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.starts_with("Error loading file"));
}

#[test]
fn test_save_before_quit_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let mut s = Session::new(&[""], EditorMode::Insert);
    s.keys("draft");
    s.key(Key::Esc);

    assert!(!s.keys(":q\n"));
    assert!(s.state.message().unwrap().text.starts_with("No write since last change"));

    assert!(!s.keys(&format!(":w {}\n", path.display())));
    assert!(!s.state.is_dirty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "draft\n");

    assert!(s.keys(":q\n"));
}

#[test]
fn test_force_quit_discards_changes() {
    let mut s = Session::new(&[""], EditorMode::Insert);
    s.keys("scratch");
    s.key(Key::Esc);
    assert!(s.keys(":q!\n"));
}

#[test]
fn test_search_then_repeat() {
    let mut s = Session::new(&["cat", "dog cat", "cat"], EditorMode::Normal);
    s.keys("/cat\n");
    assert!(s.handler.is_search_active());
    assert_eq!(s.state.cursor().line(), 0);

    s.keys("n");
    assert_eq!(s.state.cursor().line(), 1);
    assert_eq!(s.state.cursor().column(s.state.document()), 5);

    s.keys("n");
    assert_eq!(s.state.cursor().line(), 2);

    s.key(Key::Esc);
    assert!(!s.handler.is_search_active());
    // Outside the search loop n opens a line again
    s.keys("n");
    assert_eq!(s.state.document().line_count(), 4);
}
