use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

use super::environment::Environment;

/// A native function backing a builtin name, e.g. `len`.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// Every runtime value the evaluator can produce.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
    Boolean(bool),
    Array(Rc<Vec<Value>>),
    Null,
    /// Internal: wraps the value of a `return` until it reaches the
    /// enclosing function application. Never user-visible.
    Return(Rc<Value>),
    Function {
        parameters: Rc<Vec<Identifier>>,
        body: Rc<BlockStatement>,
        env: Environment,
    },
    Builtin(BuiltinFn),
    Error(Rc<str>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::Boolean(_) => "BOOLEAN",
            Value::Array(_) => "ARRAY",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Function { .. } => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    /// Every value is truthy except `false` and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn error(message: impl Into<Rc<str>>) -> Value {
        Value::Error(message.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:.6}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Null => write!(f, "null"),
            Value::Return(inner) => write!(f, "{inner}"),
            Value::Function { parameters, body, .. } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}
