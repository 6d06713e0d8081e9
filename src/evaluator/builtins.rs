//! Builtin functions, resolved after an environment lookup misses.

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::object::{BuiltinFn, Value};

pub static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, BuiltinFn> = HashMap::new();
    table.insert("len", len);
    table.insert("first", first);
    table.insert("last", last);
    table.insert("rest", rest);
    table.insert("push", push);
    table
});

pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS.get(name).map(|f| Value::Builtin(*f))
}

fn wrong_arity(got: usize, expected: &str) -> Value {
    Value::error(format!("wrong number of arguments. got={got}, expected={expected}"))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!("argument to 'len' not supported, got {}", other.type_name())),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::error(format!("argument to 'first' must be ARRAY, got {}", other.type_name())),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::error(format!("argument to 'last' must be ARRAY, got {}", other.type_name())),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Value::error(format!("argument to 'rest' must be ARRAY, got {}", other.type_name())),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), "2");
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut copy = (**elements).clone();
            copy.push(args[1].clone());
            Value::Array(Rc::new(copy))
        }
        other => Value::error(format!("argument to 'push' must be ARRAY, got {}", other.type_name())),
    }
}
