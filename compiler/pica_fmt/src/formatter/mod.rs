//! Expression rendering.

mod precedence;
mod types;

use pica_ir::{Binder, Expr, ExprKind, Literal, Pattern, StringInterner, TypeExpr, UnaryOp};
use pica_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter};
use precedence::Prec;

/// Line width a one-line conditional must fit in.
pub const MAX_LINE_WIDTH: usize = 100;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Render an expression. Multi-line output has no trailing newline.
pub fn format_expr(expr: &Expr, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner);
    formatter.format(expr);
    formatter.finish().output()
}

/// Render a parsed module: the expressions of the top-level block one after
/// another, ending with a newline.
pub fn format_module(module: &Expr, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner);
    match &module.kind {
        ExprKind::Block(exprs) => {
            for (i, expr) in exprs.iter().enumerate() {
                if i > 0 {
                    formatter.newline();
                }
                formatter.format(expr);
            }
        }
        ExprKind::Nothing => {}
        _ => formatter.format(module),
    }
    let mut out = formatter.finish();
    out.ensure_trailing_newline();
    out.output()
}

pub fn format_type(ty: &TypeExpr, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner);
    formatter.format_type(ty);
    formatter.finish().output()
}

pub fn format_pattern(pattern: &Pattern, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner);
    match pattern {
        Pattern::Literal { value, .. } => formatter.literal(*value),
        Pattern::Type { ty } => formatter.format_type(ty),
    }
    formatter.finish().output()
}

/// Writes expressions to an [`Emitter`], tracking indentation and column.
pub struct Formatter<'a, E: Emitter = StringEmitter> {
    interner: &'a StringInterner,
    out: E,
    indent: usize,
    column: usize,
    max_width: usize,
    /// Print every conditional on one line; used to measure.
    flat: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self::with_emitter(interner, StringEmitter::new())
    }
}

impl<'a, E: Emitter> Formatter<'a, E> {
    pub fn with_emitter(interner: &'a StringInterner, out: E) -> Self {
        Formatter {
            interner,
            out,
            indent: 0,
            column: 0,
            max_width: MAX_LINE_WIDTH,
            flat: false,
        }
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn finish(self) -> E {
        self.out
    }

    /// Render one expression at the current position.
    pub fn format(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.format_inner(expr));
    }

    fn text(&mut self, text: &str) {
        self.out.emit(text);
        self.column += text.chars().count();
    }

    fn newline(&mut self) {
        let spaces = self.indent * INDENT_WIDTH;
        self.out.emit_newline();
        self.out.emit_indent(spaces);
        self.column = spaces;
    }

    fn format_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(literal) => self.literal(*literal),
            ExprKind::Nothing => self.text("nothing"),
            ExprKind::Ident(name) => self.text(self.interner.lookup(*name)),
            ExprKind::Local(id) => self.text(&id.to_string()),
            ExprKind::Tuple(items) => {
                self.text("(");
                self.comma_separated(items);
                self.text(")");
            }
            ExprKind::Binary { op, left, right } => {
                let prec = Prec::of_binary(*op);
                self.operand(left, prec);
                self.text(" ");
                self.text(op.as_symbol());
                self.text(" ");
                self.operand(right, prec.tighter());
            }
            ExprKind::Unary { op, operand } => match op {
                UnaryOp::Not => {
                    self.text("not ");
                    self.operand(operand, Prec::Not);
                }
                UnaryOp::Neg => {
                    self.text("-");
                    self.operand(operand, Prec::Unary);
                }
            },
            ExprKind::Is { value, ty } => {
                self.operand(value, Prec::Equality);
                self.text(" is ");
                self.format_type(ty);
            }
            ExprKind::Let { binder, value } => {
                self.text("var ");
                match binder {
                    Binder::Named(name) => self.text(self.interner.lookup(*name)),
                    Binder::Hidden(id) => self.text(&id.to_string()),
                }
                self.text(" = ");
                self.format(value);
            }
            ExprKind::Assign { name, value } => {
                self.text(self.interner.lookup(*name));
                self.text(" = ");
                self.format(value);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.flat || self.fits_on_line(expr) {
                    self.text("if ");
                    self.format(cond);
                    self.text(" then ");
                    self.format(then_branch);
                    self.text(" else ");
                    self.format(else_branch);
                    self.text(" end");
                } else {
                    self.text("if ");
                    self.format(cond);
                    self.text(" then");
                    self.branch(then_branch);
                    self.newline();
                    self.text("else");
                    self.branch(else_branch);
                    self.newline();
                    self.text("end");
                }
            }
            ExprKind::Block(exprs) => {
                self.text("do");
                self.indented(exprs);
                self.newline();
                self.text("end");
            }
            ExprKind::Lambda { params, body } => {
                self.text("fn (");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.text(", ");
                    }
                    self.text(self.interner.lookup(*param));
                }
                self.text(") ");
                self.format(body);
            }
            ExprKind::Call { func, args } => {
                self.operand(func, Prec::Call);
                self.text("(");
                self.comma_separated(args);
                self.text(")");
            }
        }
    }

    fn literal(&mut self, literal: Literal) {
        match literal {
            Literal::Bool(b) => self.text(if b { "true" } else { "false" }),
            Literal::Int(n) => self.text(&n.to_string()),
            Literal::Str(name) => {
                let quoted = quote(self.interner.lookup(name));
                self.text(&quoted);
            }
        }
    }

    /// Render `expr`, parenthesized if it binds looser than `min`.
    fn operand(&mut self, expr: &Expr, min: Prec) {
        if Prec::of(expr) < min {
            self.text("(");
            self.format(expr);
            self.text(")");
        } else {
            self.format(expr);
        }
    }

    fn comma_separated(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.text(", ");
            }
            self.format(expr);
        }
    }

    /// Each expression on its own line, one level deeper.
    fn indented(&mut self, exprs: &[Expr]) {
        self.indent += 1;
        for expr in exprs {
            self.newline();
            self.format(expr);
        }
        self.indent -= 1;
    }

    /// Body of a broken conditional. A non-empty block spreads its
    /// expressions over the branch lines; re-parsing yields the same block.
    fn branch(&mut self, branch: &Expr) {
        match &branch.kind {
            ExprKind::Block(exprs) if !exprs.is_empty() => self.indented(exprs),
            _ => self.indented(std::slice::from_ref(branch)),
        }
    }

    /// Whether `expr` renders as a single line that fits from the current
    /// column.
    fn fits_on_line(&self, expr: &Expr) -> bool {
        let mut trial = Formatter::new(self.interner).with_max_width(usize::MAX);
        trial.flat = true;
        trial.format(expr);
        let trial = trial.finish();
        let line = trial.as_str();
        !line.contains('\n') && self.column + line.chars().count() <= self.max_width
    }
}

/// Quote a string literal, escaping what the lexer unescapes.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
