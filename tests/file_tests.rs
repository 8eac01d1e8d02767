use std::fs;
use tempfile::{NamedTempFile, TempDir};
use textquill::document::buffer::Document;
use textquill::editor::state::EditorState;
use textquill::file::loader::load_text_file;
use textquill::file::saver::{save_text_file, SaveOptions};

#[test]
fn test_save_then_load_reproduces_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    let doc = Document::from_lines(["first", "", "\tindented", "last", ""]);

    save_text_file(&path, &doc.to_strings(), SaveOptions::default()).unwrap();
    let loaded = load_text_file(&path).unwrap();

    assert_eq!(loaded, doc.to_strings());
}

#[test]
fn test_single_empty_line_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    let doc = Document::new();

    save_text_file(&path, &doc.to_strings(), SaveOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
    assert_eq!(
        Document::from_lines(load_text_file(&path).unwrap()).to_strings(),
        doc.to_strings()
    );
}

#[test]
fn test_gzip_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt.gz");
    let lines = vec!["compressed".to_string(), "text".to_string()];

    save_text_file(&path, &lines, SaveOptions::default()).unwrap();

    // Not plain text on disk
    let raw = fs::read(&path).unwrap();
    assert_eq!(&raw[..2], &[0x1f, 0x8b]);

    assert_eq!(load_text_file(&path).unwrap(), lines);
}

#[test]
fn test_crlf_input_is_normalized() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "one\r\ntwo\r\n").unwrap();
    assert_eq!(load_text_file(file.path()).unwrap(), vec!["one", "two"]);
}

#[test]
fn test_latin1_file_loads() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), b"caf\xe9\nna\xefve\n").unwrap();
    assert_eq!(load_text_file(file.path()).unwrap(), vec!["café", "naïve"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_text_file(dir.path().join("nope.txt")).is_err());
}

#[test]
fn test_failed_load_leaves_buffer_untouched() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    let mut state = EditorState::new_with_defaults(Document::from_lines(["keep me"]));
    state.mark_dirty();

    assert!(state.load_file(missing.to_str().unwrap()).is_err());
    assert_eq!(state.document().to_strings(), vec!["keep me"]);
    assert!(state.is_dirty());
    assert_eq!(state.filename(), None);
}

#[test]
fn test_failed_save_keeps_dirty_flag() {
    let dir = TempDir::new().unwrap();
    let unwritable = dir.path().join("no_such_dir").join("out.txt");
    let mut state = EditorState::new_with_defaults(Document::from_lines(["data"]));
    state.mark_dirty();

    assert!(state.save_to(unwritable.to_str().unwrap()).is_err());
    assert!(state.is_dirty());
    assert_eq!(state.filename(), None);
}

#[test]
fn test_load_file_resets_cursor_and_dirty() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "alpha\nbeta\n").unwrap();
    let path = file.path().to_str().unwrap();

    let mut state = EditorState::new_with_defaults(Document::from_lines(["x", "y", "z"]));
    state.move_down();
    state.move_down();
    state.mark_dirty();

    state.load_file(path).unwrap();
    assert_eq!(state.document().to_strings(), vec!["alpha", "beta"]);
    assert_eq!(state.cursor().line(), 0);
    assert!(!state.is_dirty());
    assert_eq!(state.filename(), Some(path));
}
