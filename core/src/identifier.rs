use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static INTERNER: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// A name interned in the global string interner.
///
/// Two identifiers built from the same string compare and hash equal, so an
/// identifier is a plain `Copy` key with equality by name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(DefaultSymbol);

impl Identifier {
    /// Intern `name` and return its identifier
    pub fn new(name: &str) -> Self {
        if let Some(symbol) = INTERNER
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Identifier(symbol);
        }
        let mut interner = INTERNER.write().unwrap_or_else(PoisonError::into_inner);
        Identifier(interner.get_or_intern(name))
    }

    /// The identifier's name as an owned string
    pub fn name(&self) -> String {
        let interner = INTERNER.read().unwrap_or_else(PoisonError::into_inner);
        interner
            .resolve(self.0)
            .expect("identifiers are only created by the global interner")
            .to_string()
    }

    /// Run `f` against the name. The interner lock is released before `f`
    /// runs, so `f` may intern further identifiers.
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let name = self.name();
        f(&name)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.debug_tuple("Identifier").field(&s).finish())
    }
}
