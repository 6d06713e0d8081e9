use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

fn eval(input: &str) -> Value {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser had error(s): {:?}",
        parser.errors()
    );
    eval_program(&program, &Environment::new())
}

#[test]
fn evaluates_integer_arithmetic() {
    let cases = vec![
        ("5", Value::Integer(5)),
        ("5 + 5 + 5 + 5 - 10", Value::Integer(10)),
        ("2 * 2 * 2 * 2 * 2", Value::Integer(32)),
        ("5 * 2 + 10", Value::Integer(20)),
        ("5 + 2 * 10", Value::Integer(25)),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", Value::Integer(50)),
        ("9 % 2 * 2 + 10", Value::Integer(12)),
    ];
    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn evaluates_mixed_float_arithmetic() {
    assert_eq!(eval("25 / 2.5 * 3 + 10").to_string(), "40.000000");
    assert_eq!(eval("1 + 1.5").to_string(), "2.500000");
}

#[test]
fn evaluates_boolean_and_comparison_expressions() {
    let cases = vec![
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("1 < 2", Value::Boolean(true)),
        ("1 > 2", Value::Boolean(false)),
        ("1 == 1", Value::Boolean(true)),
        ("1 != 1", Value::Boolean(false)),
        ("(1 < 2) == true", Value::Boolean(true)),
        ("(1 < 2) == false", Value::Boolean(false)),
    ];
    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn bang_operator_negates_truthiness() {
    let cases = [
        ("!true", Value::Boolean(false)),
        ("!false", Value::Boolean(true)),
        ("!5", Value::Boolean(false)),
        ("!!true", Value::Boolean(true)),
        ("!!5", Value::Boolean(true)),
        ("!null_ident", Value::Boolean(true)), // identifier not found -> error, not bool; see below
    ];
    for (input, expected) in &cases[..cases.len() - 1] {
        assert_eq!(eval(input), *expected, "input: {input}");
    }
    assert!(eval("!null_ident").is_error());
}

#[test]
fn if_else_expressions() {
    let cases = vec![
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", Value::Null),
        ("if (1) { 10 }", Value::Integer(10)),
        ("if (1 < 2) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 }", Value::Null),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
    ];
    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn return_propagates_through_nested_blocks() {
    let input = "
        if (10 > 1) {
            if (10 > 1) {
                return 10;
            }
            return 1;
        }
    ";
    assert_eq!(eval(input), Value::Integer(10));
}

#[test]
fn return_short_circuits_remaining_statements() {
    assert_eq!(eval("return 2 * 5; 9;"), Value::Integer(10));
}

#[test]
fn errors_propagate_unchanged() {
    let cases = vec![
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "
            if (10 > 1) {
                if (10 > 1) {
                    return true + false;
                }
                return 1;
            }
            ",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"a\" - \"b\"", "unknown operator: STRING - STRING"),
    ];
    for (input, message) in cases {
        let Value::Error(got) = eval(input) else {
            panic!("expected error for input {input}");
        };
        assert_eq!(&*got, message, "input: {input}");
    }
}

#[test]
fn let_statements_bind_values() {
    let cases = vec![
        ("let a = 5; a;", Value::Integer(5)),
        ("let a = 5 * 5; a;", Value::Integer(25)),
        ("let a = 5; let b = a; b;", Value::Integer(5)),
        ("let a = 5; let b = a; let c = a + b + 5; c;", Value::Integer(15)),
    ];
    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn function_application_and_closures() {
    assert_eq!(eval("let identity = fn(x) { x; }; identity(5);"), Value::Integer(5));
    assert_eq!(eval("let identity = fn(x) { return x; }; identity(5);"), Value::Integer(5));
    assert_eq!(eval("let double = fn(x) { x * 2; }; double(5);"), Value::Integer(10));
    assert_eq!(eval("let add = fn(x, y) { x + y; }; add(5, 5);"), Value::Integer(10));
    assert_eq!(
        eval("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"),
        Value::Integer(20)
    );
    assert_eq!(
        eval("let add = fn(x, y){ return x + y; }; add(1, add(5, 10))"),
        Value::Integer(16)
    );
}

#[test]
fn closures_capture_their_defining_environment() {
    let input = "
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(2);
    ";
    assert_eq!(eval(input), Value::Integer(4));
}

#[test]
fn closure_is_immune_to_later_rebinding_of_captured_name() {
    let input = "
        let mk = fn(x) { fn(y) { x + y } };
        let a = mk(8);
        let x = 100;
        a(10)
    ";
    assert_eq!(eval(input), Value::Integer(18));
}

#[test]
fn string_concatenation_and_equality() {
    assert_eq!(
        eval("\"monkey\" + \" \" + \"Says\" + \" \" + \"Hi!\"").to_string(),
        "monkey Says Hi!"
    );
    assert_eq!(eval("\"abc\" == \"abc\""), Value::Boolean(true));
    assert_eq!(eval("\"abc\" != \"def\""), Value::Boolean(true));
}

#[test]
fn array_literal_and_indexing() {
    assert_eq!(
        eval("[1, 2 * 2, 3 + 3]"),
        Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]))
    );
    assert_eq!(eval("[1, 2, 3 * 2, 4 + 5][2]"), Value::Integer(6));
    assert_eq!(eval("[1, 2, 3][3]"), Value::Null);
    assert_eq!(eval("[1, 2, 3][-1]"), Value::Null);
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("len(\"\")"), Value::Integer(0));
    assert_eq!(eval("len(\"four\")"), Value::Integer(4));
    assert_eq!(eval("len([1, 2, 3])"), Value::Integer(3));
    assert!(eval("len(1)").is_error());
    assert!(eval("len(\"one\", \"two\")").is_error());

    assert_eq!(eval("first([1, 2, 3])"), Value::Integer(1));
    assert_eq!(eval("last([1, 2, 3])"), Value::Integer(3));
    assert_eq!(
        eval("rest([1, 2, 3])"),
        Value::Array(Rc::new(vec![Value::Integer(2), Value::Integer(3)]))
    );
    assert_eq!(
        eval("push([1, 2], 3)"),
        Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]))
    );
}

#[test]
fn function_inspect_renders_parameters_and_body() {
    let value = eval("fn(x) { x + 2; };");
    assert_eq!(value.to_string(), "fn(x) {\n(x + 2)\n}");
}
