use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

struct EnvironmentInner {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A lexical scope: a name → value mapping with an optional outer parent.
/// Lookup walks outward; `set` always writes to the innermost scope.
///
/// Cheaply cloneable (an `Rc` handle) so that function values can close over
/// the environment they were defined in — the defining scope must outlive
/// every closure that captured it, which `Rc` guarantees without the
/// interpreter needing to track lifetimes explicitly. Environments never
/// form cycles (parent links only ever point outward), so reference
/// counting alone is sufficient.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentInner>>);

impl Environment {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    pub fn enclosed(outer: &Environment) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Look up `name`, walking outward through enclosing scopes on a local
    /// miss.
    pub fn get(&self, name: &str) -> Option<Value> {
        let inner = self.0.borrow();
        if let Some(value) = inner.store.get(name) {
            return Some(value.clone());
        }
        inner.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in the innermost (this) scope only.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment")
    }
}
