use super::*;

#[test]
fn emits_text_newlines_and_indent() {
    let mut out = StringEmitter::new();
    out.emit("do");
    out.emit_newline();
    out.emit_indent(4);
    out.emit("1");
    assert_eq!(out.as_str(), "do\n    1");
}

#[test]
fn trailing_newline_is_normalized() {
    let mut out = StringEmitter::new();
    out.emit("x");
    out.ensure_trailing_newline();
    assert_eq!(out.as_str(), "x\n");

    out.emit_newline();
    out.emit_newline();
    out.ensure_trailing_newline();
    assert_eq!(out.output(), "x\n");
}
