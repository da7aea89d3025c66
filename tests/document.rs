use docfold::{
    document::Document,
    range::{FoldRange, Location},
};

#[test]
fn test_new_splits_lines_and_trims_carriage_returns() {
    let document = Document::new("file:///crlf.py", "a\r\n\"\"\"\r\nbody\r\n\"\"\"\r\n");

    assert_eq!(document.line_count(), 4);
    assert_eq!(document.line(0), Some("a"));
    assert_eq!(document.line_len(0), Some(1));
    assert_eq!(document.fold_ranges(), [FoldRange::new(1, 2)]);
}

#[test]
fn test_from_lines_keeps_the_given_sequence() {
    let document = Document::from_lines("untitled:1", vec!["x", "\"\"\"", "\"\"\""]);

    assert_eq!(document.key(), "untitled:1");
    assert_eq!(document.lines().collect::<Vec<_>>(), ["x", "\"\"\"", "\"\"\""]);
    assert_eq!(document.fold_ranges(), [FoldRange::new(1, 1)]);
}

#[test]
fn test_line_queries_past_the_end_return_nothing() {
    let document = Document::new("file:///one.py", "only line");

    assert_eq!(document.line(1), None);
    assert_eq!(document.line_len(1), None);
}

#[test]
fn test_line_len_counts_characters() {
    let document = Document::new("file:///uni.py", "päällekkäin");

    assert_eq!(document.line_len(0), Some(11));
}

#[test]
fn test_range_converts_to_a_character_precise_span() {
    let document = Document::new("file:///s.py", "def f():\n    \"\"\"\n    doc\n    \"\"\"\n");
    let ranges = document.fold_ranges();

    assert_eq!(ranges, [FoldRange::new(1, 2)]);

    let span = ranges[0].to_span(&document);

    assert_eq!(span.start, Location { line: 1, column: 0 });
    assert_eq!(span.end, Location { line: 2, column: 7 });
}

#[test]
fn test_span_of_a_range_past_the_end_is_empty_columned() {
    // An unterminated block can end on the last line; a host may also hold a
    // stale range for a shrunk document. Missing lines count as empty.
    let document = Document::new("file:///stale.py", "\"\"\"\n");
    let span = FoldRange::new(0, 2).to_span(&document);

    assert_eq!(span.end, Location { line: 2, column: 0 });
}

#[test]
fn test_fold_range_helpers() {
    let range = FoldRange::new(3, 5);

    assert_eq!(range.line_count(), 3);
    assert!(range.is_foldable());
    assert!(range.contains_line(3));
    assert!(range.contains_line(5));
    assert!(!range.contains_line(6));
    assert_eq!(format!("{}", range), "lines 3-5");

    let single = FoldRange::new(4, 4);
    assert_eq!(single.line_count(), 1);
    assert!(!single.is_foldable());
}
