//! Declarative field configuration
//!
//! Field sets can be described in JSON and loaded at startup:
//!
//! ```
//! use ferrule_validation::{FieldKey, FieldSetConfig, Params, Symbol, Value};
//!
//! let fields = FieldSetConfig::from_json_str(r#"{
//!     "symbols": ["asc", "desc"],
//!     "fields": [
//!         { "name": "query", "required": true, "type": "string" },
//!         { "name": "order", "type": "string", "as": "symbol",
//!           "allowed": ["asc", "desc"], "default": "asc" }
//!     ]
//! }"#)
//! .unwrap()
//! .build()
//! .unwrap();
//!
//! let output = fields
//!     .validate(&Params::new().with("query", "rust").with("order", "desc"))
//!     .unwrap();
//! assert_eq!(
//!     output.get(&FieldKey::sym("order")),
//!     Some(&Value::Symbol(Symbol::intern("desc")))
//! );
//! ```
//!
//! Configuration is trusted: symbol names, field names and remap keys it
//! mentions are interned while building. `default_lazy` and `post` are only
//! available from code.

use crate::{
    Cast, ConfigError, ConfigResult, FieldKey, FieldRules, FieldSet, FieldType, Presence, Symbol,
    Value,
};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Rule options for one field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    #[serde(rename = "type", default)]
    pub field_type: Option<FieldType>,

    #[serde(rename = "as", default)]
    pub cast: Option<Cast>,

    #[serde(default)]
    pub allowed: Option<Vec<Value>>,

    /// Output key, stored as a symbol
    #[serde(default)]
    pub key: Option<String>,

    /// A present `null` is a `Null` default, not a missing one
    #[serde(default, deserialize_with = "present_value")]
    pub default: Option<Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RuleConfig {
    /// Convert into runtime rules
    pub fn into_rules(self) -> FieldRules {
        let mut rules = FieldRules::new();

        if let Some(field_type) = self.field_type {
            rules = rules.of_type(field_type);
        }
        if let Some(cast) = self.cast {
            rules = rules.cast(cast);
        }
        if let Some(allowed) = self.allowed {
            // Allow-lists are compared after the cast, so cast the entries too.
            let allowed = match self.cast {
                Some(Cast::Symbol) => allowed.into_iter().map(intern_strings).collect(),
                None => allowed,
            };
            rules = rules.allowed(allowed);
        }
        if let Some(key) = self.key {
            rules = rules.key(FieldKey::sym(&key));
        }
        if let Some(default) = self.default {
            rules = rules.default(default);
        }

        rules
    }
}

fn intern_strings(value: Value) -> Value {
    match value {
        Value::String(name) => Value::Symbol(Symbol::intern(&name)),
        other => other,
    }
}

/// One declared field
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    /// Lookup key, stored as a symbol
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(flatten)]
    pub rules: RuleConfig,
}

/// A complete field set document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldSetConfig {
    /// Symbols to register before any input is seen
    #[serde(default)]
    pub symbols: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl FieldSetConfig {
    /// Parse a field set document
    pub fn from_json_str(document: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Parse a field set from an already-decoded JSON value
    pub fn from_json(document: serde_json::Value) -> ConfigResult<Self> {
        Ok(serde_json::from_value(document)?)
    }

    /// Register symbols and build the runtime field set
    pub fn build(self) -> ConfigResult<FieldSet> {
        Symbol::register_all(&self.symbols);

        let mut seen = HashSet::new();
        let mut fields = FieldSet::new();

        for field in self.fields {
            if !seen.insert(field.name.clone()) {
                return Err(ConfigError::DuplicateField(field.name));
            }

            let presence = if field.required {
                Presence::Required
            } else {
                Presence::Optional
            };
            fields = fields.field(FieldKey::sym(&field.name), presence, field.rules.into_rules());
        }

        tracing::debug!(fields = fields.len(), "field set loaded");
        Ok(fields)
    }
}
