// Field keys

use crate::Symbol;
use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies a field in the input and in the accumulator.
///
/// Input decoded from a request usually arrives keyed by plain strings,
/// while code refers to fields by symbol. [`crate::Params::lookup`] bridges
/// the two by retrying a symbol key under its string form.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    /// Plain string key
    Name(String),

    /// Interned symbol key
    Symbol(Symbol),
}

impl FieldKey {
    /// Create a string key
    pub fn name(name: impl Into<String>) -> Self {
        FieldKey::Name(name.into())
    }

    /// Create a symbol key, interning the name
    pub fn sym(name: &str) -> Self {
        FieldKey::Symbol(Symbol::intern(name))
    }

    /// Get the key text, regardless of representation
    pub fn as_str(&self) -> &str {
        match self {
            FieldKey::Name(name) => name,
            FieldKey::Symbol(symbol) => symbol.as_str(),
        }
    }

    /// String rendering of a symbol key, used as the lookup fallback.
    ///
    /// Returns `None` for keys that are already strings.
    pub fn string_form(&self) -> Option<FieldKey> {
        match self {
            FieldKey::Name(_) => None,
            FieldKey::Symbol(symbol) => Some(FieldKey::Name(symbol.as_str().to_string())),
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, FieldKey::Symbol(_))
    }
}

impl fmt::Debug for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name(name) => write!(f, "{:?}", name),
            FieldKey::Symbol(symbol) => write!(f, "{:?}", symbol),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::Name(name.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        FieldKey::Name(name)
    }
}

impl From<Symbol> for FieldKey {
    fn from(symbol: Symbol) -> Self {
        FieldKey::Symbol(symbol)
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
