//! Tree-walking evaluator: recursively visits an [`ast::Program`] and
//! produces a runtime [`Value`], consulting an [`Environment`] for
//! identifier binding and function invocation.

mod builtins;

use std::rc::Rc;

use log::trace;

use crate::ast::{
    BlockStatement, CallExpression, Expression, FunctionLiteral, IfExpression, IndexExpression,
    InfixExpression, PrefixExpression, Program, Statement,
};
use crate::object::{native_bool, Environment, Value};

/// Evaluate a parsed program against `env`, returning its final value.
///
/// A top-level `return` unwraps here: the REPL driver never sees a
/// [`Value::Return`].
pub fn eval_program(program: &Program, env: &Environment) -> Value {
    let mut result = Value::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::Return(inner) => return (*inner).clone(),
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Value {
    match statement {
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(stmt.name.value.clone(), value.clone());
            value
        }
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Rc::new(value))
        }
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Block(block) => eval_block(block, env),
    }
}

/// A `return` stays wrapped here so it keeps propagating outward through
/// nested blocks; only [`eval_program`] and function application unwrap it.
fn eval_block(block: &BlockStatement, env: &Environment) -> Value {
    let mut result = Value::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_expression(expression: &Expression, env: &Environment) -> Value {
    match expression {
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::FloatLiteral(lit) => Value::Float(lit.value),
        Expression::StringLiteral(lit) => Value::String(Rc::from(lit.value.as_str())),
        Expression::BooleanLiteral(lit) => native_bool(lit.value),
        Expression::Prefix(expr) => eval_prefix_expression(expr, env),
        Expression::Infix(expr) => eval_infix_expression(expr, env),
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Function(lit) => eval_function_literal(lit, env),
        Expression::Call(expr) => eval_call_expression(expr, env),
        Expression::Array(lit) => eval_array_literal(&lit.elements, env),
        Expression::Index(expr) => eval_index_expression(expr, env),
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Value {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Value::error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(expr: &PrefixExpression, env: &Environment) -> Value {
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }
    match expr.operator.as_str() {
        "!" => native_bool(!right.is_truthy()),
        "-" => match right {
            Value::Integer(v) => Value::Integer(-v),
            Value::Float(v) => Value::Float(-v),
            other => Value::error(format!("unknown operator: -{}", other.type_name())),
        },
        other => Value::error(format!("unknown operator: {other}{}", right.type_name())),
    }
}

fn eval_infix_expression(expr: &InfixExpression, env: &Environment) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }
    apply_infix(&expr.operator, left, right)
}

fn apply_infix(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Integer(l), Value::Float(r)) => eval_float_infix(operator, *l as f64, *r),
        (Value::Float(l), Value::Integer(r)) => eval_float_infix(operator, *l, *r as f64),
        (Value::Float(l), Value::Float(r)) => eval_float_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        _ if left.type_name() != right.type_name() => Value::error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Value::error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => Value::Integer(left / right),
        "%" => Value::Integer(left % right),
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

/// Float modulo uses Rust's native `%` (truncated remainder, sign follows
/// the dividend) — the language imposes no integer-only modulo rule.
fn eval_float_infix(operator: &str, left: f64, right: f64) -> Value {
    match operator {
        "+" => Value::Float(left + right),
        "-" => Value::Float(left - right),
        "*" => Value::Float(left * right),
        "/" => Value::Float(left / right),
        "%" => Value::Float(left % right),
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: FLOAT {other} FLOAT")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(Rc::from(format!("{left}{right}"))),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: STRING {other} STRING")),
    }
}

/// Booleans compare by the singleton's identity in spirit; since
/// `Value::Boolean` carries no other state, structural equality coincides
/// with identity here.
fn eval_boolean_infix(operator: &str, left: bool, right: bool) -> Value {
    match operator {
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: BOOLEAN {other} BOOLEAN")),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Environment) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_function_literal(lit: &FunctionLiteral, env: &Environment) -> Value {
    Value::Function {
        parameters: Rc::new(lit.parameters.clone()),
        body: Rc::new(lit.body.clone()),
        env: env.clone(),
    }
}

fn eval_call_expression(expr: &CallExpression, env: &Environment) -> Value {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let mut arguments = Vec::with_capacity(expr.arguments.len());
    for arg in &expr.arguments {
        let value = eval_expression(arg, env);
        if value.is_error() {
            return value;
        }
        arguments.push(value);
    }

    apply_function(function, &arguments)
}

fn apply_function(function: Value, arguments: &[Value]) -> Value {
    match function {
        Value::Function { parameters, body, env } => {
            trace!("calling function with {} argument(s)", arguments.len());
            let call_env = Environment::enclosed(&env);
            for (param, arg) in parameters.iter().zip(arguments) {
                call_env.set(param.value.clone(), arg.clone());
            }
            match eval_block(&body, &call_env) {
                Value::Return(inner) => (*inner).clone(),
                other => other,
            }
        }
        Value::Builtin(native) => native(arguments),
        other => Value::error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_array_literal(elements: &[Expression], env: &Environment) -> Value {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        let value = eval_expression(element, env);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }
    Value::Array(Rc::new(values))
}

fn eval_index_expression(expr: &IndexExpression, env: &Environment) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&expr.index, env);
    if index.is_error() {
        return index;
    }
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Value::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        _ => Value::error(format!("index operator not supported: {}", left.type_name())),
    }
}

#[cfg(test)]
mod tests;
