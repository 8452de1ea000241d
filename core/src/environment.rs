//! Environment for identifier bindings
//!
//! An Environment is a flat mapping from identifier to value with value
//! semantics: copying one yields an independent environment, and extending a
//! copy never affects the original. There is no parent chain; a new scope is
//! the enclosing scope's bindings with new ones layered on top.
//!
//! Bindings live in a persistent hash map, so a copy shares structure with
//! its source and costs O(1) while extension costs O(log n).

use std::fmt;

use im::HashMap as ImHashMap;
use rustc_hash::FxBuildHasher;

use crate::error::{EvalError, EvalResult};
use crate::identifier::Identifier;
use crate::language::Value;

type Bindings = ImHashMap<Identifier, Value, FxBuildHasher>;

#[derive(Clone, Default)]
pub struct Environment {
    bindings: Bindings,
}

impl Environment {
    /// Create an environment with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// An independent snapshot of the current bindings
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Bind `name` to `value` in place, overwriting any prior binding
    pub fn extend(&mut self, name: Identifier, value: Value) {
        self.bindings.insert(name, value);
    }

    /// A copy of this environment with `name` bound to `value`
    pub fn with(&self, name: Identifier, value: Value) -> Self {
        Environment {
            bindings: self.bindings.update(name, value),
        }
    }

    /// Install every binding of `other` on top of this environment
    pub fn merge(&mut self, other: &Environment) {
        for (name, value) in other.bindings.iter() {
            self.bindings.insert(*name, value.clone());
        }
    }

    /// Look up a binding, failing with `UnboundIdentifier` if there is none
    pub fn lookup(&self, name: Identifier) -> EvalResult<Value> {
        self.get(name).ok_or(EvalError::UnboundIdentifier(name))
    }

    pub fn get(&self, name: Identifier) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    pub fn contains(&self, name: Identifier) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(Identifier, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (Identifier, Value)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.extend(name, value);
        }
        env
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.bindings.iter()).finish()
    }
}
