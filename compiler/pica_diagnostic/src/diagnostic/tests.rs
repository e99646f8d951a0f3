use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("expected `end`, found end of file")
        .with_label(Span::new(30, 30), "expected `end`")
        .with_secondary_label(Span::new(0, 5), "`match` starts here")
        .with_note("every `match` is closed by `end`");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(30, 30)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes, vec!["every `match` is closed by `end`".to_string()]);
}

#[test]
fn test_primary_span_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E9001)
        .with_secondary_label(Span::new(1, 2), "context")
        .with_label(Span::new(5, 9), "here");

    assert_eq!(diag.primary_span(), Some(Span::new(5, 9)));
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `then`, found `else`")
        .with_label(Span::new(4, 8), "expected `then`")
        .with_suggestion("add `then`");

    assert_eq!(
        diag.to_string(),
        "error [E1001]: expected `then`, found `else`\n  --> 4..8: expected `then`\n  = help: add `then`"
    );
}
