// Input and accumulator mappings

use crate::{ConfigError, ConfigResult, FieldKey, Value};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};

/// Mapping from field key to value.
///
/// Serves both as the raw input for one validation pass and as the
/// accumulator of validated output. Validators take the accumulator by
/// value and hand back the updated map, so a caller's map is never changed
/// behind its back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    fields: BTreeMap<FieldKey, Value>,
}

impl Params {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    pub fn with(mut self, key: impl Into<FieldKey>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Return a mapping with `key` set to `value`, replacing any previous value
    pub fn put(mut self, key: FieldKey, value: Value) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Exact lookup, no fallback
    pub fn get(&self, key: &FieldKey) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Two-step lookup: exact key first, then the string form of a symbol key.
    pub fn lookup(&self, key: &FieldKey) -> Option<&Value> {
        if let Some(value) = self.fields.get(key) {
            return Some(value);
        }
        key.string_form().and_then(|name| self.fields.get(&name))
    }

    pub fn contains_key(&self, key: &FieldKey) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &Value)> {
        self.fields.iter()
    }

    pub fn into_inner(self) -> BTreeMap<FieldKey, Value> {
        self.fields
    }

    /// Build input params from a decoded JSON object. Keys become string keys.
    pub fn from_json(json: serde_json::Value) -> ConfigResult<Self> {
        match json {
            serde_json::Value::Object(entries) => Ok(entries
                .into_iter()
                .map(|(k, v)| (FieldKey::Name(k), Value::from(v)))
                .collect()),
            other => Err(ConfigError::NotAnObject(json_kind(&other).to_string())),
        }
    }

    /// Parse input params from a JSON document
    pub fn from_json_str(body: &str) -> ConfigResult<Self> {
        Self::from_json(serde_json::from_str(body)?)
    }

    /// Convert to JSON representation.
    ///
    /// A string key and a symbol key with the same name are distinct here
    /// but would share one JSON key, so that case is an error.
    pub fn to_json(&self) -> ConfigResult<serde_json::Value> {
        let mut object = serde_json::Map::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            if object.insert(key.as_str().to_string(), value.to_json()).is_some() {
                return Err(ConfigError::KeyCollision(key.as_str().to_string()));
            }
        }
        Ok(serde_json::Value::Object(object))
    }

    fn colliding_key(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        self.fields
            .keys()
            .map(FieldKey::as_str)
            .find(|name| !seen.insert(*name))
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<K: Into<FieldKey>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<FieldKey, Value>> for Params {
    fn from(fields: BTreeMap<FieldKey, Value>) -> Self {
        Self { fields }
    }
}

impl From<std::collections::HashMap<String, String>> for Params {
    fn from(query: std::collections::HashMap<String, String>) -> Self {
        query.into_iter().collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(name) = self.colliding_key() {
            return Err(S::Error::custom(ConfigError::KeyCollision(name.to_string())));
        }
        serializer.collect_map(self.fields.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_first() {
        let params = Params::new()
            .with(FieldKey::sym("age"), 1)
            .with("age", 2);
        assert_eq!(params.lookup(&FieldKey::sym("age")), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_lookup_symbol_falls_back_to_string() {
        let params = Params::new().with("age", "30");
        assert_eq!(params.lookup(&FieldKey::sym("age")), Some(&Value::from("30")));
        assert_eq!(params.get(&FieldKey::sym("age")), None);
    }

    #[test]
    fn test_lookup_string_does_not_fall_back_to_symbol() {
        let params = Params::new().with(FieldKey::sym("age"), "30");
        assert_eq!(params.lookup(&FieldKey::name("age")), None);
    }

    #[test]
    fn test_from_json() {
        let params = Params::from_json_str(r#"{"age": "30", "admin": false}"#).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(&FieldKey::name("admin")), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Params::from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject(kind) if kind == "array"));
    }

    #[test]
    fn test_to_json() {
        let params = Params::new().with(FieldKey::sym("page"), 2).with("q", "rust");
        assert_eq!(
            params.to_json().unwrap(),
            serde_json::json!({"page": 2, "q": "rust"})
        );
        assert_eq!(serde_json::to_value(&params).unwrap(), params.to_json().unwrap());
    }

    #[test]
    fn test_to_json_rejects_name_symbol_collision() {
        let params = Params::new().with("k", 1).with(FieldKey::sym("k"), 2);
        assert_eq!(params.len(), 2);

        let err = params.to_json().unwrap_err();
        assert!(matches!(err, ConfigError::KeyCollision(name) if name == "k"));
        assert!(serde_json::to_string(&params).is_err());
    }

    #[test]
    fn test_into_inner() {
        let fields = Params::new().with("a", 1).into_inner();
        assert_eq!(fields.get(&FieldKey::name("a")), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_from_query_map() {
        let mut query = std::collections::HashMap::new();
        query.insert("page".to_string(), "2".to_string());
        let params = Params::from(query);
        assert_eq!(params.get(&FieldKey::name("page")), Some(&Value::from("2")));
    }
}
