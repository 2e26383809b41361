// Field validation pipeline

use crate::{ErrorKind, FieldError, FieldKey, FieldRules, Params, Value};
use tracing::{debug, trace};

/// Validates one field against its rules and folds it into an accumulator.
///
/// A found value runs through five stages in order, stopping at the first
/// failure:
///
/// 1. type check (`type`)
/// 2. cast (`as`)
/// 3. allow-list check (`allowed`)
/// 4. post-process (`post`)
/// 5. store under the output key (`key`, else the lookup key)
///
/// Errors are always tagged with the lookup key, even when `key` remaps the
/// output.
pub struct FieldValidator;

impl FieldValidator {
    /// Validate a field that must be present.
    ///
    /// ```
    /// use ferrule_validation::{ErrorKind, FieldKey, FieldRules, FieldType, FieldValidator, Params};
    ///
    /// let input = Params::new().with("age", "30");
    /// let age = FieldKey::sym("age");
    ///
    /// let acc = FieldValidator::required(
    ///     &age,
    ///     &input,
    ///     Params::new(),
    ///     &FieldRules::new().of_type(FieldType::String),
    /// )
    /// .unwrap();
    /// assert_eq!(acc.get(&age).and_then(|v| v.as_str()), Some("30"));
    ///
    /// let err = FieldValidator::required(
    ///     &age,
    ///     &input,
    ///     Params::new(),
    ///     &FieldRules::new().of_type(FieldType::Integer),
    /// )
    /// .unwrap_err();
    /// assert_eq!(err.kind, ErrorKind::BadType);
    /// ```
    pub fn required(
        key: &FieldKey,
        input: &Params,
        acc: Params,
        rules: &FieldRules,
    ) -> Result<Params, FieldError> {
        match input.lookup(key) {
            Some(value) => Self::run(key, value.clone(), acc, rules),
            None => {
                debug!(field = %key, reason = "missing_arg", "required field missing");
                Err(FieldError::missing(key.clone()))
            }
        }
    }

    /// Validate a field that may be absent.
    ///
    /// When absent, the literal `default` is stored if configured, else the
    /// `default_lazy` result, else the accumulator is returned unchanged.
    /// Defaults skip the pipeline entirely.
    ///
    /// ```
    /// use ferrule_validation::{FieldKey, FieldRules, FieldValidator, Params, Value};
    ///
    /// let role = FieldKey::sym("role");
    /// let acc = FieldValidator::optional(
    ///     &role,
    ///     &Params::new(),
    ///     Params::new(),
    ///     &FieldRules::new().default("guest"),
    /// )
    /// .unwrap();
    /// assert_eq!(acc.get(&role), Some(&Value::from("guest")));
    /// ```
    pub fn optional(
        key: &FieldKey,
        input: &Params,
        acc: Params,
        rules: &FieldRules,
    ) -> Result<Params, FieldError> {
        if let Some(value) = input.lookup(key) {
            return Self::run(key, value.clone(), acc, rules);
        }

        let output_key = rules.output_key(key);
        if let Some(default) = rules.default_value() {
            trace!(field = %key, stored_as = %output_key, "using default");
            Ok(acc.put(output_key.clone(), default.clone()))
        } else if let Some(default_fn) = rules.default_fn() {
            trace!(field = %key, stored_as = %output_key, "using lazy default");
            Ok(acc.put(output_key.clone(), default_fn()))
        } else {
            Ok(acc)
        }
    }

    fn run(
        key: &FieldKey,
        value: Value,
        acc: Params,
        rules: &FieldRules,
    ) -> Result<Params, FieldError> {
        let value = check_type(value, rules)
            .and_then(|v| cast(v, rules))
            .and_then(|v| check_allowed(v, rules))
            .and_then(|v| post_process(v, rules))
            .map_err(|kind| {
                debug!(field = %key, reason = %kind, "field rejected");
                FieldError::new(kind, key.clone())
            })?;

        let output_key = rules.output_key(key);
        trace!(field = %key, stored_as = %output_key, "field accepted");
        Ok(acc.put(output_key.clone(), value))
    }
}

/// Type-check stage. Passes when no `type` is configured.
pub fn check_type(value: Value, rules: &FieldRules) -> Result<Value, ErrorKind> {
    match rules.field_type() {
        Some(field_type) if !field_type.matches(&value) => {
            trace!(expected = %field_type, found = value.type_name(), "type mismatch");
            Err(ErrorKind::BadType)
        }
        _ => Ok(value),
    }
}

/// Cast stage. Passes the value through when no `as` is configured.
pub fn cast(value: Value, rules: &FieldRules) -> Result<Value, ErrorKind> {
    match rules.cast_to() {
        Some(target) => target.apply(value).ok_or(ErrorKind::BadValue),
        None => Ok(value),
    }
}

/// Allow-list stage. Passes when no `allowed` set is configured.
pub fn check_allowed(value: Value, rules: &FieldRules) -> Result<Value, ErrorKind> {
    match rules.allowed_values() {
        Some(allowed) if !allowed.contains(&value) => Err(ErrorKind::BadValue),
        _ => Ok(value),
    }
}

/// Post-process stage. The callback's error is returned as-is.
pub fn post_process(value: Value, rules: &FieldRules) -> Result<Value, ErrorKind> {
    match rules.post_fn() {
        Some(post) => post(value),
        None => Ok(value),
    }
}
