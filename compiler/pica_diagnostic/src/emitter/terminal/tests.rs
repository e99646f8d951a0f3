#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pica_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `then`, found `else`")
        .with_label(Span::new(15, 19), "expected `then`")
        .with_note("a case pattern is followed by `then`")
        .with_suggestion("insert `then` before the body")
}

fn render(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_no_color_without_source() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = render(emitter);
    assert!(text.starts_with("error[E1001]: expected `then`, found `else`\n"));
    assert!(text.contains("--> 15..19: expected `then`"));
    assert!(text.contains("= note: a case pattern is followed by `then`"));
    assert!(text.contains("= help: insert `then` before the body"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_with_color() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());

    let text = render(emitter);
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("E1001"));
}

#[test]
fn test_auto_color_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}

#[test]
fn test_source_snippet() {
    let source = "match x\ncase 1 else 2\nend\n";
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("demo.pica", source);
    emitter.emit(&sample_diagnostic());

    let text = render(emitter);
    let expected = [
        "error[E1001]: expected `then`, found `else`",
        " --> demo.pica:2:8",
        "  |",
        "2 | case 1 else 2",
        "  |        ^^^^ expected `then`",
        "  = note: a case pattern is followed by `then`",
        "  = help: insert `then` before the body",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 0);

    assert_eq!(
        render(emitter),
        "error: aborting due to 2 previous errors; 1 warning emitted\n\
         error: aborting due to previous error\n"
    );
}
