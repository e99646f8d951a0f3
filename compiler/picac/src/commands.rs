//! Subcommands.
//!
//! Each command takes the whole source text and returns what to print on
//! stdout, or the diagnostic that stopped it.

use pica_diagnostic::Diagnostic;
use pica_eval::{Interpreter, SharedPrintHandler};
use pica_ir::{Expr, StringInterner, Token, TokenKind};

/// `pica lex`: one line per token, `start..end description`.
pub fn lex_source(source: &str) -> String {
    let interner = StringInterner::new();
    let tokens = pica_lexer::lex(source, &interner);

    let mut out = String::new();
    for token in tokens.iter() {
        out.push_str(&format!("{} {}\n", token.span, describe(token, &interner)));
    }
    out
}

fn describe(token: &Token, interner: &StringInterner) -> String {
    match token.kind {
        TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(name)),
        TokenKind::Int(n) => format!("integer {n}"),
        TokenKind::String(s) => format!("string {:?}", interner.lookup(s)),
        ref kind => kind.display_name().to_owned(),
    }
}

fn parse_module(source: &str, interner: &StringInterner) -> Result<Expr, Diagnostic> {
    let tokens = pica_lexer::lex(source, interner);
    pica_parse::parse(&tokens, interner).map_err(|err| err.to_diagnostic())
}

/// `pica parse`: the desugared tree in surface syntax.
pub fn parse_source(source: &str) -> Result<String, Diagnostic> {
    let interner = StringInterner::new();
    let module = parse_module(source, &interner)?;
    Ok(pica_fmt::format_module(&module, &interner))
}

/// `pica run`: evaluate, then print the module's value.
///
/// `print` calls write to `print` as they happen; the returned text is only
/// the final value.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source(source: &str, print: SharedPrintHandler) -> Result<String, Diagnostic> {
    let interner = StringInterner::new();
    let module = parse_module(source, &interner)?;
    let mut interpreter = Interpreter::with_print_handler(&interner, print);
    let value = interpreter
        .eval_module(&module)
        .map_err(|err| err.to_diagnostic())?;
    Ok(format!("{value}\n"))
}
