//! Interned symbols
//!
//! Symbols are names the program already knows about: field names, enum-like
//! values such as roles or sort orders, and anything registered from trusted
//! configuration at startup. Untrusted input can only *resolve* an existing
//! symbol through [`Symbol::existing`], it can never add one to the table.
//!
//! ```
//! use ferrule_validation::Symbol;
//!
//! Symbol::register_all(["asc", "desc"]);
//!
//! assert!(Symbol::existing("asc").is_some());
//! assert!(Symbol::existing("sideways-unregistered").is_none());
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Process-wide interning table.
static SYMBOLS: Lazy<RwLock<HashSet<Arc<str>>>> = Lazy::new(|| RwLock::new(HashSet::new()));

/// An interned name.
///
/// Equality, ordering and hashing follow the name, so two handles to the
/// same symbol always compare equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Intern a trusted name, registering it if it is new.
    pub fn intern(name: &str) -> Self {
        if let Some(existing) = Self::existing(name) {
            return existing;
        }

        let mut table = SYMBOLS.write();
        // Another thread may have registered it between the two locks.
        if let Some(existing) = table.get(name) {
            return Symbol(existing.clone());
        }
        let interned: Arc<str> = Arc::from(name);
        table.insert(interned.clone());
        Symbol(interned)
    }

    /// Resolve a name only if it has already been interned.
    pub fn existing(name: &str) -> Option<Self> {
        SYMBOLS.read().get(name).map(|s| Symbol(s.clone()))
    }

    /// Register a batch of trusted names.
    pub fn register_all<I, S>(names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            Self::intern(name.as_ref());
        }
    }

    /// Check whether a name has been interned.
    pub fn is_registered(name: &str) -> bool {
        SYMBOLS.read().contains(name)
    }

    /// Get the symbol name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_returns_same_symbol() {
        let a = Symbol::intern("symbol_test_same");
        let b = Symbol::intern("symbol_test_same");
        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn test_existing_does_not_create() {
        assert!(Symbol::existing("symbol_test_never_interned").is_none());
        assert!(!Symbol::is_registered("symbol_test_never_interned"));
    }

    #[test]
    fn test_register_all() {
        Symbol::register_all(["symbol_test_red", "symbol_test_green"]);
        assert!(Symbol::is_registered("symbol_test_red"));
        assert_eq!(
            Symbol::existing("symbol_test_green").map(|s| s.to_string()),
            Some("symbol_test_green".to_string())
        );
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Symbol::intern("admin")), ":admin");
    }
}
