use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to one scope of bindings.
///
/// Cloning an `Environment` clones the handle, not the bindings: every clone
/// observes the same scope. Function values keep a handle to the scope they
/// were created in, which is how closures see later bindings made there.
///
/// # Example
/// ```
/// use yoru::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new();
/// global.define("x", Value::from(1));
///
/// let local = Environment::new_enclosed(global.clone());
/// local.define("y", Value::from(2));
///
/// assert_eq!(local.get("x"), Some(Value::from(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    inner: Rc<RefCell<Scope>>,
}

#[derive(Default)]
struct Scope {
    values: HashMap<String, Value>,
    parent: Option<Environment>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn new_enclosed(parent: Self) -> Self {
        Self { inner: Rc::new(RefCell::new(Scope { values: HashMap::new(),
                                                   parent: Some(parent), })) }
    }

    /// Binds `name` in this scope, replacing any earlier binding here.
    /// Enclosing scopes are never written.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.inner.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks `name` up in this scope, then in each enclosing scope in turn.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let parent = {
            let scope = self.inner.borrow();
            if let Some(value) = scope.values.get(name) {
                return Some(value.clone());
            }
            scope.parent.clone()
        };

        parent.and_then(|scope| scope.get(name))
    }

    /// Names bound directly in this scope, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.borrow().values.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Environment {
    // Bindings may hold closures that point back at this scope, so only the
    // names are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.inner.borrow();
        f.debug_struct("Environment")
         .field("names", &self.names())
         .field("enclosed", &scope.parent.is_some())
         .finish()
    }
}
