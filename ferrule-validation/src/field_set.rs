// Ordered field sets

use crate::{FieldError, FieldKey, FieldRules, FieldValidator, Params};

/// Whether a field must be present in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// One declared field
#[derive(Debug, Clone)]
pub struct FieldEntry {
    pub key: FieldKey,
    pub presence: Presence,
    pub rules: FieldRules,
}

/// An ordered list of field checks, folded one after another.
///
/// Validation stops at the first failing field; nothing is aggregated.
///
/// ```
/// use ferrule_validation::{FieldKey, FieldRules, FieldSet, FieldType, Params, Value};
///
/// let fields = FieldSet::new()
///     .required(FieldKey::sym("name"), FieldRules::new().of_type(FieldType::String))
///     .optional(FieldKey::sym("role"), FieldRules::new().default("guest"));
///
/// let output = fields.validate(&Params::new().with("name", "Ada")).unwrap();
/// assert_eq!(output.get(&FieldKey::sym("role")), Some(&Value::from("guest")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<FieldEntry>,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required field
    pub fn required(self, key: impl Into<FieldKey>, rules: FieldRules) -> Self {
        self.field(key.into(), Presence::Required, rules)
    }

    /// Declare an optional field
    pub fn optional(self, key: impl Into<FieldKey>, rules: FieldRules) -> Self {
        self.field(key.into(), Presence::Optional, rules)
    }

    /// Declare a field with explicit presence
    pub fn field(mut self, key: FieldKey, presence: Presence, rules: FieldRules) -> Self {
        self.fields.push(FieldEntry {
            key,
            presence,
            rules,
        });
        self
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate all fields into a fresh accumulator
    pub fn validate(&self, input: &Params) -> Result<Params, FieldError> {
        self.validate_into(input, Params::new())
    }

    /// Validate all fields, threading `acc` through each check in declaration order
    pub fn validate_into(&self, input: &Params, acc: Params) -> Result<Params, FieldError> {
        self.fields.iter().try_fold(acc, |acc, entry| match entry.presence {
            Presence::Required => FieldValidator::required(&entry.key, input, acc, &entry.rules),
            Presence::Optional => FieldValidator::optional(&entry.key, input, acc, &entry.rules),
        })
    }
}
