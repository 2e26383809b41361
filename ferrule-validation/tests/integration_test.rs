//! Integration tests for ferrule-validation

use ferrule_validation::*;
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn age_input() -> Params {
    Params::from_json_str(r#"{"age": "30"}"#).unwrap()
}

#[test]
fn test_required_string_age() {
    let age = FieldKey::sym("age");
    let acc = FieldValidator::required(
        &age,
        &age_input(),
        Params::new(),
        &FieldRules::new().of_type(FieldType::String),
    )
    .unwrap();

    assert_eq!(acc, Params::new().with(age, "30"));
}

#[test]
fn test_required_integer_age_is_bad_type() {
    let age = FieldKey::sym("age");
    let err = FieldValidator::required(
        &age,
        &age_input(),
        Params::new(),
        &FieldRules::new().of_type(FieldType::Integer),
    )
    .unwrap_err();

    assert_eq!(err, FieldError::new(ErrorKind::BadType, age));
}

#[test]
fn test_optional_role_defaults_to_guest() {
    let role = FieldKey::sym("role");
    let acc = FieldValidator::optional(
        &role,
        &Params::new(),
        Params::new(),
        &FieldRules::new().default("guest"),
    )
    .unwrap();

    assert_eq!(acc, Params::new().with(role, "guest"));
}

#[test]
fn test_default_honors_key_remap() {
    let acc = FieldValidator::optional(
        &FieldKey::sym("role"),
        &Params::new(),
        Params::new(),
        &FieldRules::new().default("guest").key(FieldKey::sym("user_role")),
    )
    .unwrap();

    assert_eq!(acc, Params::new().with(FieldKey::sym("user_role"), "guest"));
}

#[test]
fn test_remap_stores_under_alt_but_errors_use_original() {
    let age = FieldKey::sym("age");
    let alt = FieldKey::sym("alt");

    let acc = FieldValidator::required(
        &age,
        &age_input(),
        Params::new(),
        &FieldRules::new().key(alt.clone()),
    )
    .unwrap();
    assert_eq!(acc.get(&alt), Some(&Value::from("30")));
    assert!(!acc.contains_key(&age));

    let err = FieldValidator::required(
        &age,
        &age_input(),
        Params::new(),
        &FieldRules::new().key(alt).of_type(FieldType::Boolean),
    )
    .unwrap_err();
    assert_eq!(err.key, age);
}

#[test]
fn test_cast_of_unknown_name_is_bad_value() {
    let input = Params::new().with("status", "integration_never_registered_status");
    let err = FieldValidator::required(
        &FieldKey::sym("status"),
        &input,
        Params::new(),
        &FieldRules::new().cast(Cast::Symbol),
    )
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::BadValue);
    assert!(Symbol::existing("integration_never_registered_status").is_none());
}

#[test]
fn test_cast_of_non_string_is_bad_value() {
    let input = Params::new().with("status", 5);
    let err = FieldValidator::required(
        &FieldKey::sym("status"),
        &input,
        Params::new(),
        &FieldRules::new().cast(Cast::Symbol),
    )
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::BadValue);
}

#[test]
fn test_allow_list_failure() {
    let input = Params::new().with("letter", "x");
    let err = FieldValidator::required(
        &FieldKey::sym("letter"),
        &input,
        Params::new(),
        &FieldRules::new().allowed(["a", "b"]),
    )
    .unwrap_err();

    assert_eq!(err, FieldError::new(ErrorKind::BadValue, FieldKey::sym("letter")));
}

#[test]
fn test_post_custom_reason() {
    let input = Params::new().with("code", "abc");
    let err = FieldValidator::optional(
        &FieldKey::sym("code"),
        &input,
        Params::new(),
        &FieldRules::new().post(|_| Err(ErrorKind::custom("expired"))),
    )
    .unwrap_err();

    assert_eq!(err, FieldError::new(ErrorKind::custom("expired"), FieldKey::sym("code")));
}

#[test]
fn test_lazy_default_called_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let rules = FieldRules::new().default_lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::Integer(7)
    });

    let key = FieldKey::sym("page");
    let acc = FieldValidator::optional(&key, &Params::new(), Params::new(), &rules).unwrap();

    assert_eq!(acc.get(&key), Some(&Value::Integer(7)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_string_key_does_not_match_symbol_input() {
    let input = Params::new().with(FieldKey::sym("token"), "t");
    let err = FieldValidator::required(&FieldKey::name("token"), &input, Params::new(), &FieldRules::new())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingArg);
}

#[test]
fn test_input_is_not_modified() {
    let input = age_input();
    let before = input.clone();
    FieldValidator::required(&FieldKey::sym("age"), &input, Params::new(), &FieldRules::new()).unwrap();
    assert_eq!(input, before);
}

#[test]
fn test_map_and_list_types() {
    let input = Params::from_json_str(r#"{"filters": {"tag": "rust"}, "ids": [1, 2]}"#).unwrap();

    let acc = FieldSet::new()
        .required(FieldKey::sym("filters"), FieldRules::new().of_type(FieldType::Map))
        .required(FieldKey::sym("ids"), FieldRules::new().of_type(FieldType::List))
        .validate(&input)
        .unwrap();
    assert_eq!(acc.len(), 2);

    let err = FieldSet::new()
        .required(FieldKey::sym("ids"), FieldRules::new().of_type(FieldType::Map))
        .validate(&input)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::BadType);
}

#[test]
fn test_error_json_body() {
    let err = FieldSet::new()
        .required(FieldKey::sym("email"), FieldRules::new())
        .validate(&Params::new())
        .unwrap_err();

    assert_eq!(
        err.to_json(),
        serde_json::json!({"error": "missing_arg", "field": "email"})
    );
}

proptest! {
    #[test]
    fn prop_typed_string_stored_unchanged(s in ".*") {
        let key = FieldKey::sym("prop_text");
        let input = Params::new().with("prop_text", s.clone());
        let acc = FieldValidator::required(
            &key,
            &input,
            Params::new(),
            &FieldRules::new().of_type(FieldType::String),
        )
        .unwrap();
        prop_assert_eq!(acc.get(&key), Some(&Value::String(s)));
    }

    #[test]
    fn prop_typed_integer_stored_unchanged(n in any::<i64>()) {
        let key = FieldKey::sym("prop_number");
        let input = Params::new().with("prop_number", n);
        let acc = FieldValidator::optional(
            &key,
            &input,
            Params::new(),
            &FieldRules::new().of_type(FieldType::Integer),
        )
        .unwrap();
        prop_assert_eq!(acc.get(&key), Some(&Value::Integer(n)));
    }

    #[test]
    fn prop_absent_field_is_missing_arg(name in "[a-z]{1,12}") {
        let key = FieldKey::name(format!("absent_{}", name));
        let input = Params::new().with("present", 1);
        let err = FieldValidator::required(&key, &input, Params::new(), &FieldRules::new()).unwrap_err();
        prop_assert_eq!(err, FieldError::missing(key));
    }

    #[test]
    fn prop_absent_symbol_field_is_missing_arg(name in "[a-z]{1,12}") {
        // Neither the symbol nor its string form is in the input.
        let key = FieldKey::sym(&format!("absent_sym_{}", name));
        let input = Params::new()
            .with("present", 1)
            .with(FieldKey::sym("present_sym"), 2);
        let err = FieldValidator::required(&key, &input, Params::new(), &FieldRules::new()).unwrap_err();
        prop_assert_eq!(err, FieldError::missing(key));
    }
}
