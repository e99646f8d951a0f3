//! Type expressions in surface syntax.

use pica_ir::TypeExpr;

use super::Formatter;
use crate::emitter::Emitter;

impl<E: Emitter> Formatter<'_, E> {
    pub(super) fn format_type(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named { name, .. } => self.text(self.interner.lookup(*name)),
            TypeExpr::Literal { value, .. } => self.literal(*value),
            TypeExpr::Unit { .. } => self.text("()"),
            TypeExpr::Tuple { elements, .. } => {
                self.text("(");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.text(", ");
                    }
                    self.format_type(element);
                }
                self.text(")");
            }
            TypeExpr::Union { members, .. } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.text(" | ");
                    }
                    // Union members are primary types.
                    let nested = matches!(member, TypeExpr::Union { .. } | TypeExpr::Function { .. });
                    self.type_operand(member, nested);
                }
            }
            TypeExpr::Function { param, ret, .. } => {
                // `=>` is right associative.
                self.type_operand(param, matches!(**param, TypeExpr::Function { .. }));
                self.text(" => ");
                self.format_type(ret);
            }
        }
    }

    fn type_operand(&mut self, ty: &TypeExpr, parenthesize: bool) {
        if parenthesize {
            self.text("(");
            self.format_type(ty);
            self.text(")");
        } else {
            self.format_type(ty);
        }
    }
}
