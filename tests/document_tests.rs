use textquill::document::buffer::Document;
use textquill::document::line::Position;

#[test]
fn test_new_document_has_one_empty_line() {
    let doc = Document::new();
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.to_strings(), vec![String::new()]);

    let empty: Vec<String> = Vec::new();
    assert_eq!(Document::from_lines(empty).line_count(), 1);
}

#[test]
fn test_split_and_merge_are_inverse() {
    let mut doc = Document::from_lines(["hello world"]);
    let at = doc[0].position_at(4);

    assert!(doc.split_at(0, at));
    assert_eq!(doc.to_strings(), vec!["hello", " world"]);

    let join = doc.merge_into_previous(1).unwrap();
    assert_eq!(doc.to_strings(), vec!["hello world"]);
    assert_eq!(doc[0].column(join), 5);
}

#[test]
fn test_split_at_start_moves_whole_line_down() {
    let mut doc = Document::from_lines(["abc"]);
    doc.split_at(0, Position::Start);
    assert_eq!(doc.to_strings(), vec!["", "abc"]);
}

#[test]
fn test_merge_into_empty_previous_line() {
    let mut doc = Document::from_lines(["", "abc"]);
    assert_eq!(doc.merge_into_previous(1), Some(Position::Start));
    assert_eq!(doc.to_strings(), vec!["abc"]);
}

#[test]
fn test_merge_first_line_is_rejected() {
    let mut doc = Document::from_lines(["a", "b"]);
    assert_eq!(doc.merge_into_previous(0), None);
    assert_eq!(doc.merge_into_previous(5), None);
    assert_eq!(doc.line_count(), 2);
}

#[test]
fn test_join_on_last_line_is_noop() {
    let mut doc = Document::from_lines(["a", "b"]);
    assert!(!doc.join_with_next(1));
    assert!(doc.join_with_next(0));
    assert_eq!(doc.to_strings(), vec!["ab"]);
}

#[test]
fn test_insert_line_clamps_index() {
    let mut doc = Document::from_lines(["a"]);
    assert_eq!(doc.insert_line(10, "z"), 1);
    assert_eq!(doc.insert_line(0, "first"), 0);
    assert_eq!(doc.to_strings(), vec!["first", "a", "z"]);
}

#[test]
fn test_delete_last_remaining_line_clears_it() {
    let mut doc = Document::from_lines(["a", "b"]);
    assert!(doc.delete_line(0));
    assert!(doc.delete_line(0));
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.to_strings(), vec![String::new()]);
    assert!(!doc.delete_line(1));
}
