use pretty_assertions::assert_eq;

use super::*;

#[test]
fn equality_requires_same_kind() {
    assert!(Value::Int(1).equals(&Value::Int(1)));
    assert!(!Value::Int(1).equals(&Value::string("1")));
    assert!(!Value::Bool(false).equals(&Value::Nothing));
    assert!(Value::Nothing.equals(&Value::Nothing));
}

#[test]
fn tuples_compare_element_wise() {
    let a = Value::tuple(vec![Value::Int(1), Value::string("x")]);
    let b = Value::tuple(vec![Value::Int(1), Value::string("x")]);
    let c = Value::tuple(vec![Value::Int(1), Value::string("y")]);
    let shorter = Value::tuple(vec![Value::Int(1), Value::string("x"), Value::Nothing]);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    assert!(!a.equals(&shorter));
}

#[test]
fn literals_become_values() {
    let interner = StringInterner::new();
    let text = interner.intern("hi");
    assert_eq!(Value::from_literal(Literal::Int(7), &interner), Value::Int(7));
    assert_eq!(
        Value::from_literal(Literal::Bool(true), &interner),
        Value::Bool(true)
    );
    assert_eq!(
        Value::from_literal(Literal::Str(text), &interner),
        Value::string("hi")
    );
}

#[test]
fn display_quotes_strings_only_when_nested() {
    let value = Value::tuple(vec![Value::string("a"), Value::Nothing, Value::Bool(true)]);
    assert_eq!(value.to_string(), r#"("a", nothing, true)"#);
    assert_eq!(Value::string("plain").display_value(), "plain");
    assert_eq!(Value::string("plain").to_string(), r#""plain""#);
}

#[test]
fn builtins_report_function_type() {
    let print = Value::Builtin(Builtin::Print);
    assert_eq!(print.type_name(), "Function");
    assert_eq!(print.arity(), Some(1));
    assert_eq!(Value::Int(3).arity(), None);
    assert_eq!(print.to_string(), "<builtin print>");
}
