// Per-field rule configuration

use crate::{ErrorKind, FieldKey, Symbol, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Post-processing callback: transforms the value or rejects it with a reason.
pub type PostFn = Arc<dyn Fn(Value) -> Result<Value, ErrorKind> + Send + Sync>;

/// Lazily computed default for an absent optional field.
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Native value categories a field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Map,
    List,
}

impl FieldType {
    /// Check whether a value belongs to this category
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldType::String, Value::String(_))
                | (FieldType::Integer, Value::Integer(_))
                | (FieldType::Boolean, Value::Bool(_))
                | (FieldType::Map, Value::Map(_))
                | (FieldType::List, Value::List(_))
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Map => "map",
            FieldType::List => "list",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target representation for casting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cast {
    /// String to an already-interned symbol. Never creates a symbol.
    #[serde(alias = "atom")]
    Symbol,
}

impl Cast {
    /// Apply the conversion, returning `None` when it is not possible
    pub fn apply(&self, value: Value) -> Option<Value> {
        match self {
            Cast::Symbol => match value {
                Value::String(name) => Symbol::existing(&name).map(Value::Symbol),
                _ => None,
            },
        }
    }
}

/// Rule configuration for a single field.
///
/// Every option is absent by default, and an absent option is a no-op.
///
/// ```
/// use ferrule_validation::{Cast, FieldKey, FieldRules, FieldType, Symbol};
///
/// Symbol::register_all(["asc", "desc"]);
///
/// let rules = FieldRules::new()
///     .of_type(FieldType::String)
///     .cast(Cast::Symbol)
///     .allowed([Symbol::intern("asc"), Symbol::intern("desc")])
///     .key(FieldKey::sym("sort_order"));
/// assert_eq!(rules.field_type(), Some(FieldType::String));
/// ```
#[derive(Clone)]
pub struct FieldRules {
    field_type: Option<FieldType>,
    cast: Option<Cast>,
    allowed: Option<Vec<Value>>,
    key: Option<FieldKey>,
    default: Option<Value>,
    default_lazy: Option<DefaultFn>,
    post: Option<PostFn>,
}

impl FieldRules {
    /// Create rules with every option absent
    pub fn new() -> Self {
        Self {
            field_type: None,
            cast: None,
            allowed: None,
            key: None,
            default: None,
            default_lazy: None,
            post: None,
        }
    }

    /// Require the value to be of the given type
    pub fn of_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Cast the value after the type check
    pub fn cast(mut self, cast: Cast) -> Self {
        self.cast = Some(cast);
        self
    }

    /// Restrict the (cast) value to a finite set
    pub fn allowed<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Store the result under a different key
    pub fn key(mut self, key: impl Into<FieldKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Literal fallback for an absent optional field
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Computed fallback for an absent optional field, used when no literal
    /// default is configured
    pub fn default_lazy<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default_lazy = Some(Arc::new(f));
        self
    }

    /// Final transformation or custom check on the value
    pub fn post<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ErrorKind> + Send + Sync + 'static,
    {
        self.post = Some(Arc::new(f));
        self
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    pub fn cast_to(&self) -> Option<Cast> {
        self.cast
    }

    pub fn allowed_values(&self) -> Option<&[Value]> {
        self.allowed.as_deref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn default_fn(&self) -> Option<&DefaultFn> {
        self.default_lazy.as_ref()
    }

    pub(crate) fn post_fn(&self) -> Option<&PostFn> {
        self.post.as_ref()
    }

    /// Key the result is stored under: the `key` option if set, else the lookup key
    pub fn output_key<'a>(&'a self, key: &'a FieldKey) -> &'a FieldKey {
        self.key.as_ref().unwrap_or(key)
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("type", &self.field_type)
            .field("as", &self.cast)
            .field("allowed", &self.allowed)
            .field("key", &self.key)
            .field("default", &self.default)
            .field("default_lazy", &self.default_lazy.as_ref().map(|_| "<fn>"))
            .field("post", &self.post.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
